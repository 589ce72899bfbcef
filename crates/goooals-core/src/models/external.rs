use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A random activity from the third-party API, passed through verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export)]
pub struct ExternalGoal {
    pub activity: Option<String>,
    /// Ratio in `[0, 1]`.
    pub availability: Option<f64>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub participants: Option<u32>,
    /// Ratio in `[0, 1]`.
    pub price: Option<f64>,
    pub accessibility: Option<String>,
    pub duration: Option<String>,
    pub kid_friendly: Option<bool>,
    pub link: Option<String>,
    pub key: Option<String>,
}
