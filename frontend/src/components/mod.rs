pub mod event_filters;
pub mod event_table;
pub mod form_message;
pub mod nav;
pub mod pagination;
pub mod reference_select;
