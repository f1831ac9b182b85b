use crate::endpoints::{DEFAULT_LIMIT, DEFAULT_PAGE, EVENTS};

/// Pagination and filter parameters driving the next listing fetch.
///
/// Fields are only changed through [`apply_filter`](Self::apply_filter),
/// [`clear_filters`](Self::clear_filters) and [`set_page`](Self::set_page).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQueryState {
    page: u32,
    limit: u32,
    date_filter: Option<String>,
    sport_filter: Option<i64>,
}

impl Default for ListQueryState {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT)
    }
}

impl ListQueryState {
    /// First page, no filters. A zero limit falls back to the default.
    pub fn new(limit: u32) -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: if limit == 0 { DEFAULT_LIMIT } else { limit },
            date_filter: None,
            sport_filter: None,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn date_filter(&self) -> Option<&str> {
        self.date_filter.as_deref()
    }

    pub fn sport_filter(&self) -> Option<i64> {
        self.sport_filter
    }

    /// Replaces both filters and goes back to the first page.
    /// Blank dates count as no filter.
    pub fn apply_filter(&mut self, date: Option<String>, sport_id: Option<i64>) {
        self.date_filter = date
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        self.sport_filter = sport_id;
        self.page = DEFAULT_PAGE;
    }

    pub fn clear_filters(&mut self) {
        self.apply_filter(None, None);
    }

    /// Moves to `page`, leaving filters untouched. Page 0 is treated as 1.
    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(DEFAULT_PAGE);
    }

    /// `page` and `limit` always, then whichever filters are set.
    pub fn to_query_string(&self) -> String {
        let mut params = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ];
        if let Some(date) = &self.date_filter {
            params.push(("date_from", date.clone()));
        }
        if let Some(sport_id) = self.sport_filter {
            params.push(("sport_id", sport_id.to_string()));
        }

        params
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Listing URL relative to `origin` (empty for same-origin).
    pub fn events_url(&self, origin: &str) -> String {
        format!("{}{}?{}", origin, EVENTS, self.to_query_string())
    }
}
