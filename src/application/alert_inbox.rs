// Alert inbox - Alerts with their read flags
use crate::domain::alert::Alert;
use crate::domain::error::{DashboardError, DashboardResult};

#[derive(Debug, Clone, Default)]
pub struct AlertInbox {
    alerts: Vec<Alert>,
}

impl AlertInbox {
    pub fn new(alerts: Vec<Alert>) -> Self {
        Self { alerts }
    }

    pub fn list(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn unread_count(&self) -> usize {
        self.alerts.iter().filter(|a| !a.read).count()
    }

    pub fn mark_read(&mut self, id: &str) -> DashboardResult<Alert> {
        let alert = self
            .alerts
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| DashboardError::AlertNotFound(id.to_string()))?;

        alert.acknowledge();
        Ok(alert.clone())
    }

    /// Returns how many alerts went from unread to read.
    pub fn mark_all_read(&mut self) -> usize {
        self.alerts
            .iter_mut()
            .map(Alert::acknowledge)
            .filter(|changed| *changed)
            .count()
    }
}
