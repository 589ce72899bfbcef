use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::attributes::{AttributeDescriptor, OrdinalAttribute};
use crate::models::goal_item::GoalItem;

/// A locally curated goal from the standard catalog. Every field is
/// nullable; absence renders as "Not specified".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct StandardGoal {
    pub id: Option<String>,
    pub goal: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<i32>,
    pub duration: Option<i32>,
    pub frequency: Option<i32>,
    pub motivation: Option<String>,
    pub tags: Option<Vec<String>>,
    pub subgoals: Option<Vec<GoalItem>>,
    pub criteria: Option<Vec<GoalItem>>,
}

impl StandardGoal {
    /// Resolve one of the ordinal ratings, `None` when the goal leaves it unset.
    pub fn attribute(&self, attribute: OrdinalAttribute) -> Option<AttributeDescriptor> {
        let key = match attribute {
            OrdinalAttribute::Difficulty => self.difficulty,
            OrdinalAttribute::Duration => self.duration,
            OrdinalAttribute::Frequency => self.frequency,
        };
        key.map(|k| attribute.describe(k))
    }

    pub fn subgoals(&self) -> &[GoalItem] {
        self.subgoals.as_deref().unwrap_or_default()
    }

    pub fn criteria(&self) -> &[GoalItem] {
        self.criteria.as_deref().unwrap_or_default()
    }
}
