// Mission domain model
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissionCategory {
    Agriculture,
    Surveillance,
    Infrastructure,
}

/// Lifecycle of a mission. Variants are declared in lifecycle order so
/// the derived ordering sorts planned work first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissionStatus {
    Planned,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", alias = "category")]
    pub category: MissionCategory,
    pub status: MissionStatus,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Mission {
    pub fn is_in_progress(&self) -> bool {
        self.status == MissionStatus::InProgress
    }
}
