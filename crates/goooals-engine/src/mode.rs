use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use goooals_core::models::goal_type::GoalType;

use crate::error::EngineError;

/// The generator tabs offered by the UI.
///
/// `Intelligent` is reserved: it can be selected but produces no goals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneratorMode {
    #[default]
    Standard,
    External,
    Intelligent,
}

impl GeneratorMode {
    pub const ALL: [GeneratorMode; 3] = [
        GeneratorMode::Standard,
        GeneratorMode::External,
        GeneratorMode::Intelligent,
    ];

    /// Tab id as persisted under `selectedTab`.
    pub fn id(self) -> &'static str {
        match self {
            GeneratorMode::Standard => "standard",
            GeneratorMode::External => "external",
            GeneratorMode::Intelligent => "intelligent",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GeneratorMode::Standard => "Standard",
            GeneratorMode::External => "External",
            GeneratorMode::Intelligent => "Intelligent",
        }
    }

    pub fn is_available(self) -> bool {
        !matches!(self, GeneratorMode::Intelligent)
    }

    /// The wire goal type produced by this generator.
    pub fn goal_type(self) -> Result<GoalType, EngineError> {
        match self {
            GeneratorMode::Standard => Ok(GoalType::Standard),
            GeneratorMode::External => Ok(GoalType::External),
            GeneratorMode::Intelligent => Err(EngineError::ModeUnavailable(self)),
        }
    }
}

impl fmt::Display for GeneratorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GeneratorMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GeneratorMode::ALL
            .into_iter()
            .find(|mode| mode.id() == s)
            .ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for mode in GeneratorMode::ALL {
            assert_eq!(mode.id().parse::<GeneratorMode>(), Ok(mode));
        }
        assert!("Standard".parse::<GeneratorMode>().is_err());
    }

    #[test]
    fn intelligent_is_not_available() {
        assert!(!GeneratorMode::Intelligent.is_available());
        assert!(matches!(
            GeneratorMode::Intelligent.goal_type(),
            Err(EngineError::ModeUnavailable(GeneratorMode::Intelligent))
        ));
        assert_eq!(GeneratorMode::External.goal_type().unwrap(), GoalType::External);
    }
}
