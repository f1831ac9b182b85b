//! Actix routes serving a [`Catalog`] under `/api/v1`, shaped like the
//! production API: JSON bodies everywhere and `{"error": ...}` on failure.

use actix_web::{error, http::StatusCode, web, HttpResponse, ResponseError};
use shared::endpoints::{EVENTS, SPORTS, TEAMS, VENUES};
use shared::{CreateEventRequest, CreatedResponse, ErrorResponse};
use std::sync::Mutex;

use crate::catalog::{Catalog, CatalogError, ListParams};

pub type CatalogData = web::Data<Mutex<Catalog>>;

impl ResponseError for CatalogError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

pub fn catalog_data(catalog: Catalog) -> CatalogData {
    web::Data::new(Mutex::new(catalog))
}

/// Registers every catalog route. Malformed JSON bodies get the same
/// `{"error": ...}` shape as domain errors.
pub fn configure(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(ErrorResponse {
            error: err.to_string(),
        });
        error::InternalError::from_response(err, response).into()
    });

    cfg.app_data(json_config)
        .route(SPORTS, web::get().to(list_sports))
        .route(TEAMS, web::get().to(list_teams))
        .route(VENUES, web::get().to(list_venues))
        .service(
            web::resource(EVENTS)
                .route(web::get().to(list_events))
                .route(web::post().to(create_event)),
        );
}

fn locked(data: &CatalogData) -> Result<std::sync::MutexGuard<'_, Catalog>, error::Error> {
    data.lock()
        .map_err(|_| error::ErrorInternalServerError("catalog lock poisoned"))
}

async fn list_sports(data: CatalogData) -> actix_web::Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(locked(&data)?.sports()))
}

async fn list_teams(data: CatalogData) -> actix_web::Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(locked(&data)?.teams()))
}

async fn list_venues(data: CatalogData) -> actix_web::Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(locked(&data)?.venues()))
}

async fn list_events(
    data: CatalogData,
    params: web::Query<ListParams>,
) -> actix_web::Result<HttpResponse> {
    log::debug!("Listing events with {:?}", params);
    let listing = locked(&data)?.list(&params)?;
    Ok(HttpResponse::Ok().json(listing))
}

async fn create_event(
    data: CatalogData,
    body: web::Json<CreateEventRequest>,
) -> actix_web::Result<HttpResponse> {
    let id = locked(&data)?.create(&body)?;
    log::info!("Created event {}", id);
    Ok(HttpResponse::Created().json(CreatedResponse { id }))
}
