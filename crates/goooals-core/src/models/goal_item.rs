use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Admissible numeric lattice for a `{value}`/`{unit}` placeholder pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Quantify {
    #[ts(type = "number | null")]
    pub min: Option<i64>,
    #[ts(type = "number | null")]
    pub max: Option<i64>,
    #[ts(type = "number | null")]
    pub step: Option<i64>,
    pub unit: Option<String>,
}

/// A subgoal or criterion entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GoalItem {
    pub description: Option<String>,
    #[serde(default)]
    pub quantify: Option<Quantify>,
}

impl GoalItem {
    /// A free-text item as entered by the user: no quantification.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            description: Some(text.into()),
            quantify: None,
        }
    }
}
