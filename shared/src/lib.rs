pub mod dto {
    pub mod common;
    pub mod event;
    pub mod pagination;
    pub mod reference;
}

pub mod datetime;
pub mod endpoints;
pub mod error;
pub mod query;

// Re-export commonly used items
pub use error::{api_error_message, ClientError, Result};
pub use query::ListQueryState;

// Re-export DTOs
pub use dto::{
    common::{CreatedResponse, ErrorResponse},
    event::{CreateEventRequest, EventSummary},
    pagination::{EventListResponse, PaginationInfo},
    reference::ReferenceItem,
};
