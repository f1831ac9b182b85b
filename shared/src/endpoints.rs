//! Paths of the catalog REST API, relative to the serving origin.

pub const API_BASE_PATH: &str = "/api/v1";
pub const SPORTS: &str = "/api/v1/sports";
pub const TEAMS: &str = "/api/v1/teams";
pub const VENUES: &str = "/api/v1/venues";
pub const EVENTS: &str = "/api/v1/events";

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_share_base_path() {
        for path in [SPORTS, TEAMS, VENUES, EVENTS] {
            assert!(path.starts_with(API_BASE_PATH), "{} outside base path", path);
        }
    }
}
