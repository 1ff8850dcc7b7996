//! Event System
//!
//! Activity-log entries produced by the views as they talk to the API

use crate::logging::passes_env_threshold;
use chrono::Local;
use log::Level;
use std::fmt::Display;

/// The view an event originated from.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Origin {
    Dashboard,
    List,
    Form,
    Transfer,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub origin: Origin,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: Level,
}

impl Event {
    fn new(origin: Origin, msg: String, event_type: EventType, log_level: Level) -> Self {
        Self {
            origin,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn success(origin: Origin, msg: impl Into<String>) -> Self {
        Self::new(origin, msg.into(), EventType::Success, Level::Info)
    }

    pub fn refresh(origin: Origin, msg: impl Into<String>) -> Self {
        Self::new(origin, msg.into(), EventType::Refresh, Level::Debug)
    }

    pub fn error_with_level(origin: Origin, msg: impl Into<String>, log_level: Level) -> Self {
        Self::new(origin, msg.into(), EventType::Error, log_level)
    }

    pub fn should_display(&self) -> bool {
        // successes and anything at info or louder always show
        if self.event_type == EventType::Success || self.log_level <= Level::Info {
            return true;
        }
        passes_env_threshold(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.event_type, self.timestamp, self.origin, self.msg
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_and_errors_always_display() {
        assert!(Event::success(Origin::Form, "ok").should_display());
        assert!(Event::error_with_level(Origin::List, "boom", Level::Warn).should_display());
    }

    #[test]
    fn test_refresh_is_debug_level() {
        let event = Event::refresh(Origin::Dashboard, "loaded");
        assert_eq!(event.log_level, Level::Debug);
        assert_eq!(event.event_type, EventType::Refresh);
    }

    #[test]
    fn test_display_includes_origin_and_message() {
        let event = Event::success(Origin::Transfer, "Transferência realizada");
        let text = event.to_string();
        assert!(text.starts_with("Success ["));
        assert!(text.ends_with("Transfer: Transferência realizada"));
    }

    #[test]
    fn test_timestamp_format() {
        let event = Event::refresh(Origin::Dashboard, "loaded");
        // "YYYY-MM-DD HH:MM:SS"
        assert_eq!(event.timestamp.len(), 19);
        assert_eq!(&event.timestamp[4..5], "-");
        assert_eq!(&event.timestamp[10..11], " ");
    }
}
