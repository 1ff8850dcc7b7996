//! Components shared by every view

pub mod footer;
pub mod header;
