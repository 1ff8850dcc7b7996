//! Dashboard state management

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::environment::Environment;
use crate::events::Event;
use crate::models::Beneficio;
use crate::stats::Summary;

use std::collections::VecDeque;
use std::time::Instant;

/// Dashboard state. Lives for the whole session so the activity log survives
/// navigation between views.
#[derive(Debug)]
pub struct DashboardState {
    /// The environment in which the application is running.
    pub environment: Environment,
    /// The start time of the session, used for computing uptime.
    pub start_time: Instant,
    /// Aggregates over the last loaded list.
    pub summary: Summary,
    /// Number of records in the last loaded list, active or not.
    pub total_records: usize,
    /// Whether the list was loaded at least once.
    pub loaded: bool,
    /// Activity logs for display
    pub activity_logs: VecDeque<Event>,
    /// Whether to enable background colors
    pub with_background_color: bool,
}

impl DashboardState {
    pub fn new(environment: Environment, start_time: Instant, with_background_color: bool) -> Self {
        Self {
            environment,
            start_time,
            summary: Summary::default(),
            total_records: 0,
            loaded: false,
            activity_logs: VecDeque::new(),
            with_background_color,
        }
    }

    pub fn set_beneficios(&mut self, beneficios: &[Beneficio]) {
        self.summary = Summary::from_beneficios(beneficios);
        self.total_records = beneficios.len();
        self.loaded = true;
    }

    pub fn inactive_records(&self) -> usize {
        self.total_records.saturating_sub(self.summary.active_count)
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Origin;
    use rust_decimal::Decimal;

    #[test]
    fn test_activity_log_is_capped() {
        let mut state = DashboardState::new(Environment::Local, Instant::now(), false);
        for i in 0..MAX_ACTIVITY_LOGS + 5 {
            state.add_to_activity_log(Event::success(Origin::List, format!("evento {}", i)));
        }
        assert_eq!(state.activity_logs.len(), MAX_ACTIVITY_LOGS);
        assert_eq!(
            state.activity_logs.front().map(|e| e.msg.as_str()),
            Some("evento 5")
        );
    }

    #[test]
    fn test_set_beneficios_counts_inactive() {
        let mut state = DashboardState::new(Environment::Local, Instant::now(), false);
        let beneficios: Vec<Beneficio> = [Some(true), Some(false), None]
            .into_iter()
            .enumerate()
            .map(|(i, ativo)| Beneficio {
                id: i as i64,
                nome: format!("B{}", i),
                descricao: None,
                valor: Decimal::new(10, 0),
                ativo,
                version: None,
            })
            .collect();
        state.set_beneficios(&beneficios);
        assert!(state.loaded);
        assert_eq!(state.summary.active_count, 1);
        assert_eq!(state.inactive_records(), 2);
    }
}
