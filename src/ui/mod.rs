// Module declarations
mod app;
pub mod components;
pub mod dashboard;
pub mod form;
pub mod list;
pub mod notification;
pub mod splash;
pub mod transfer;
pub mod utils;
// Re-exports for external use
pub use app::{App, run};
