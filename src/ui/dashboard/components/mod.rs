//! Dashboard component modules

pub mod actions;
pub mod info_panel;
pub mod logs;
pub mod stats;
