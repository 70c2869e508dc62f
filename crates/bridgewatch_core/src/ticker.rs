use crate::model::AlertItem;
use std::time::Duration;

pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5);

/// Round-robin over alerts, newest first.
#[derive(Debug, Clone)]
pub struct AlertTicker {
    alerts: Vec<AlertItem>,
    index: usize,
    interval: Duration,
}

impl AlertTicker {
    pub fn new(alerts: &[AlertItem], interval: Duration) -> Self {
        let mut sorted = alerts.to_vec();
        sorted.sort_by(|left, right| right.time.cmp(&left.time));
        Self {
            alerts: sorted,
            index: 0,
            interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    pub fn current(&self) -> Option<&AlertItem> {
        self.alerts.get(self.index)
    }

    /// Moves to the next alert, wrapping after the oldest one.
    pub fn advance(&mut self) -> Option<&AlertItem> {
        if self.alerts.is_empty() {
            return None;
        }
        self.index = (self.index + 1) % self.alerts.len();
        self.current()
    }
}
