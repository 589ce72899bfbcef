use thiserror::Error;

use crate::collection::ItemKind;
use crate::mode::GeneratorMode;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("{kind} cannot be empty")]
    EmptyItem { kind: ItemKind },

    #[error("{kind} index {index} is out of range ({len} items)")]
    IndexOutOfBounds {
        kind: ItemKind,
        index: usize,
        len: usize,
    },

    #[error("No goal available to {action}.")]
    NoGoal { action: &'static str },

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("the {0} generator is not available yet")]
    ModeUnavailable(GeneratorMode),

    #[error("session cache serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
