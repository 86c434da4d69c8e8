// AI insight domain model
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InsightCategory {
    Object,
    Anomaly,
    Prediction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Model confidence in percent.
    pub confidence: u8,
    pub timestamp: DateTime<Utc>,
    pub category: InsightCategory,
    #[serde(default, alias = "related_image", skip_serializing_if = "Option::is_none")]
    pub related_image: Option<String>,
}

impl Insight {
    pub fn matches(&self, category: Option<InsightCategory>) -> bool {
        category.is_none_or(|c| c == self.category)
    }
}
