// Mission selector - Active mission over a static roster
use crate::domain::error::{DashboardError, DashboardResult};
use crate::domain::mission::Mission;

#[derive(Debug, Clone)]
pub struct MissionSelector {
    roster: Vec<Mission>,
    current: Option<usize>,
}

impl MissionSelector {
    /// Starts on the first in-progress mission, else the first in the roster.
    pub fn new(roster: Vec<Mission>) -> Self {
        let current = roster
            .iter()
            .position(Mission::is_in_progress)
            .or(if roster.is_empty() { None } else { Some(0) });

        Self { roster, current }
    }

    pub fn roster(&self) -> &[Mission] {
        &self.roster
    }

    pub fn current(&self) -> Option<&Mission> {
        self.current.map(|idx| &self.roster[idx])
    }

    /// Switch the active mission. An unknown id keeps the previous selection.
    pub fn select(&mut self, mission_id: &str) -> DashboardResult<&Mission> {
        let idx = self
            .roster
            .iter()
            .position(|m| m.id == mission_id)
            .ok_or_else(|| DashboardError::MissionNotFound(mission_id.to_string()))?;

        self.current = Some(idx);
        Ok(&self.roster[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::mission::{MissionCategory, MissionStatus};
    use chrono::NaiveDate;

    fn mission(id: &str, status: MissionStatus) -> Mission {
        Mission {
            id: id.to_string(),
            name: format!("Mission {}", id),
            category: MissionCategory::Agriculture,
            status,
            date: NaiveDate::from_ymd_opt(2025, 4, 20).unwrap(),
            description: None,
        }
    }

    fn roster() -> Vec<Mission> {
        vec![
            mission("m1", MissionStatus::Planned),
            mission("m2", MissionStatus::Planned),
            mission("m3", MissionStatus::InProgress),
            mission("m4", MissionStatus::Completed),
        ]
    }

    #[test]
    fn test_initial_selection_prefers_in_progress() {
        let selector = MissionSelector::new(roster());
        assert_eq!(selector.current().map(|m| m.id.as_str()), Some("m3"));

        let selector = MissionSelector::new(vec![mission("m1", MissionStatus::Planned)]);
        assert_eq!(selector.current().map(|m| m.id.as_str()), Some("m1"));

        let selector = MissionSelector::new(Vec::new());
        assert!(selector.current().is_none());
    }

    #[test]
    fn test_select() {
        let mut selector = MissionSelector::new(roster());
        let selected = selector.select("m1").unwrap();
        assert_eq!(selected.id, "m1");
        assert_eq!(selector.current().map(|m| m.id.as_str()), Some("m1"));
    }

    #[test]
    fn test_select_unknown_keeps_previous() {
        let mut selector = MissionSelector::new(roster());
        selector.select("m2").unwrap();

        let err = selector.select("m9").unwrap_err();
        assert_eq!(err, DashboardError::MissionNotFound("m9".to_string()));
        assert_eq!(selector.current().map(|m| m.id.as_str()), Some("m2"));
    }
}
