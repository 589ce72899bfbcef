//! Ordinal attribute tables for difficulty, duration and frequency.
//!
//! Each attribute is an integer key 1–3 resolved to a label and a
//! description. Lookups never fail: an undefined key resolves to
//! [`UNKNOWN_ATTRIBUTE`].

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AttributeDescriptor {
    pub label: &'static str,
    pub description: &'static str,
}

pub const UNKNOWN_ATTRIBUTE: AttributeDescriptor = AttributeDescriptor {
    label: "Unknown",
    description: "This attribute is not defined for the provided key.",
};

const DIFFICULTY: [AttributeDescriptor; 3] = [
    AttributeDescriptor {
        label: "Easy",
        description: "Simple tasks that require minimal effort or skill",
    },
    AttributeDescriptor {
        label: "Moderate",
        description: "Tasks that require some effort and skill, but are manageable",
    },
    AttributeDescriptor {
        label: "Challenging",
        description: "Tasks that require significant effort, skill, and concentration",
    },
];

const DURATION: [AttributeDescriptor; 3] = [
    AttributeDescriptor {
        label: "Short",
        description: "Takes a few minutes to an hour to complete",
    },
    AttributeDescriptor {
        label: "Medium",
        description: "Takes about an hour or so to complete",
    },
    AttributeDescriptor {
        label: "Long",
        description: "Takes several hours or more to complete",
    },
];

const FREQUENCY: [AttributeDescriptor; 3] = [
    AttributeDescriptor {
        label: "Rarely",
        description: "Occurs once in a while (e.g. monthly or less)",
    },
    AttributeDescriptor {
        label: "Occasionally",
        description: "Happens from time to time (e.g. weekly)",
    },
    AttributeDescriptor {
        label: "Regularly",
        description: "Happens frequently (e.g. daily)",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrdinalAttribute {
    Difficulty,
    Duration,
    Frequency,
}

impl OrdinalAttribute {
    pub const ALL: [OrdinalAttribute; 3] = [
        OrdinalAttribute::Difficulty,
        OrdinalAttribute::Duration,
        OrdinalAttribute::Frequency,
    ];

    fn table(self) -> &'static [AttributeDescriptor; 3] {
        match self {
            OrdinalAttribute::Difficulty => &DIFFICULTY,
            OrdinalAttribute::Duration => &DURATION,
            OrdinalAttribute::Frequency => &FREQUENCY,
        }
    }

    /// Look up `key` (1-based), falling back to [`UNKNOWN_ATTRIBUTE`].
    pub fn describe(self, key: i32) -> AttributeDescriptor {
        usize::try_from(key)
            .ok()
            .and_then(|k| k.checked_sub(1))
            .and_then(|idx| self.table().get(idx))
            .copied()
            .unwrap_or(UNKNOWN_ATTRIBUTE)
    }
}

impl fmt::Display for OrdinalAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OrdinalAttribute::Difficulty => "Difficulty",
            OrdinalAttribute::Duration => "Duration",
            OrdinalAttribute::Frequency => "Frequency",
        })
    }
}
