// Presentation layer - HTTP handlers over the trend engine
pub mod app_state;
pub mod error;
pub mod handlers;
