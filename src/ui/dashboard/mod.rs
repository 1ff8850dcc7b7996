//! Dashboard view
//!
//! Summary cards over the active benefits, quick actions and the session's
//! activity log

pub mod components;
pub mod renderer;
pub mod state;

pub use renderer::render_dashboard;
pub use state::DashboardState;
