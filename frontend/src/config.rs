use shared::endpoints::DEFAULT_LIMIT;

pub struct Config;

impl Config {
    /// Origin prefixed to every API path.
    ///
    /// Empty by default so requests stay relative: in development Trunk proxies
    /// `/api/` to the catalog API, in production nginx does. Set
    /// `EVENTS_API_ORIGIN` at build time to talk to another host.
    pub fn api_base_url() -> String {
        option_env!("EVENTS_API_ORIGIN")
            .unwrap_or_default()
            .trim_end_matches('/')
            .to_string()
    }

    /// Rows per listing page, `EVENTS_PAGE_SIZE` at build time or 10.
    pub fn default_page_size() -> u32 {
        parse_page_size(option_env!("EVENTS_PAGE_SIZE"))
    }

    pub fn log_level() -> log::Level {
        if cfg!(debug_assertions) {
            log::Level::Debug
        } else {
            log::Level::Info
        }
    }
}

fn parse_page_size(raw: Option<&str>) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|size| *size > 0)
        .unwrap_or(DEFAULT_LIMIT)
}
