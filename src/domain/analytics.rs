// Surveillance and infrastructure analytics records
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DetectionKind {
    Person,
    Vehicle,
    Animal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Detection {
    pub id: String,
    #[serde(rename = "type", alias = "kind")]
    pub kind: DetectionKind,
    /// Detector score in [0, 1].
    pub confidence: f64,
    pub timestamp: String,
    /// Normalized [x, y, width, height].
    pub bbox: [f64; 4],
    #[serde(default, alias = "track_id", skip_serializing_if = "Option::is_none")]
    pub track_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DefectSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Defect {
    pub id: String,
    #[serde(rename = "type", alias = "kind")]
    pub kind: String,
    pub location: String,
    pub severity: DefectSeverity,
    pub dimensions: String,
    #[serde(alias = "detected_at")]
    pub detected_at: NaiveDate,
}

/// Defects at or above `min_severity`, most severe first. Ties keep their
/// original order.
pub fn rank_defects(defects: &[Defect], min_severity: Option<DefectSeverity>) -> Vec<Defect> {
    let mut ranked: Vec<Defect> = defects
        .iter()
        .filter(|d| min_severity.is_none_or(|min| d.severity >= min))
        .cloned()
        .collect();
    ranked.sort_by(|a, b| b.severity.cmp(&a.severity));
    ranked
}
