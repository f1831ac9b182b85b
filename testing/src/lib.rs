//! In-process stub of the events catalog API.
//!
//! [`StubServer::start`] binds an ephemeral local port and serves a
//! [`Catalog`] until stopped, so client code can be exercised
//! over real HTTP without a database.

use actix_web::{dev::ServerHandle, middleware::Logger, App, HttpServer};
use anyhow::{Context, Result};

pub mod app_setup;
pub mod catalog;

pub use catalog::{Catalog, CatalogError, ListParams};

/// Running stub server; lives until [`stop`](Self::stop) or the end of the runtime.
pub struct StubServer {
    base_url: String,
    handle: ServerHandle,
}

impl StubServer {
    /// Must be called from within an actix or tokio runtime.
    pub async fn start(catalog: Catalog) -> Result<Self> {
        let data = app_setup::catalog_data(catalog);
        let server = HttpServer::new(move || {
            App::new()
                .wrap(Logger::default())
                .app_data(data.clone())
                .configure(app_setup::configure)
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .context("Failed to bind stub server")?;

        let addr = server
            .addrs()
            .first()
            .copied()
            .context("Stub server has no bound address")?;
        let server = server.run();
        let handle = server.handle();
        actix_rt::spawn(server);

        let base_url = format!("http://{}", addr);
        log::info!("Stub catalog API listening at {}", base_url);
        Ok(Self { base_url, handle })
    }

    /// Origin to prefix API paths with, e.g. `http://127.0.0.1:38121`
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn stop(self) {
        self.handle.stop(true).await;
    }
}

/// Routes `log` output to the test harness; safe to call from every test.
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
