// Presentation layer - HTTP surface for the operator form
pub mod app_state;
pub mod handlers;
pub mod page;
pub mod router;
