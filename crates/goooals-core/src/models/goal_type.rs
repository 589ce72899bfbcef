use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::external::ExternalGoal;
use crate::models::standard::StandardGoal;

/// Which generator produced a goal, as named on the wire (`"Standard"`,
/// `"External"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum GoalType {
    Standard,
    External,
}

impl GoalType {
    pub fn as_str(self) -> &'static str {
        match self {
            GoalType::Standard => "Standard",
            GoalType::External => "External",
        }
    }
}

impl fmt::Display for GoalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GoalType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Standard" => Ok(GoalType::Standard),
            "External" => Ok(GoalType::External),
            other => Err(CoreError::UnknownGoalType(other.to_string())),
        }
    }
}

/// A goal paired with its type, decoded from an untyped JSON snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum GoalPayload {
    Standard(StandardGoal),
    External(ExternalGoal),
}

impl GoalPayload {
    pub fn from_value(goal_type: GoalType, value: serde_json::Value) -> Result<Self, CoreError> {
        Ok(match goal_type {
            GoalType::Standard => GoalPayload::Standard(serde_json::from_value(value)?),
            GoalType::External => GoalPayload::External(serde_json::from_value(value)?),
        })
    }

    pub fn goal_type(&self) -> GoalType {
        match self {
            GoalPayload::Standard(_) => GoalType::Standard,
            GoalPayload::External(_) => GoalType::External,
        }
    }

    /// The headline of the goal: the standard goal statement or the
    /// external activity text.
    pub fn title(&self) -> Option<&str> {
        match self {
            GoalPayload::Standard(goal) => goal.goal.as_deref(),
            GoalPayload::External(goal) => goal.activity.as_deref(),
        }
    }
}
