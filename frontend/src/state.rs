//! DOM-free state behind the two screens. Components only translate these
//! view-models into markup.
pub mod create_event;
pub mod listing;
