use serde::{Deserialize, Serialize};

use crate::error::TaskError;

/// How urgent a task is. Higher tiers sort first.
///
/// - `Low`: level 1
/// - `Medium`: level 2
/// - `High`: level 3
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low = 1,
    Medium = 2,
    High = 3,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Self::Low, Self::Medium, Self::High];

    /// Convert a raw level. Anything outside 1..=3 is rejected rather than
    /// folded into a neighbouring tier.
    pub fn from_level(level: u8) -> Result<Self, TaskError> {
        match level {
            1 => Ok(Self::Low),
            2 => Ok(Self::Medium),
            3 => Ok(Self::High),
            other => Err(TaskError::InvalidPriority(other)),
        }
    }

    pub fn level(&self) -> u8 {
        *self as u8
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Accepts either the level digit or the tier name, case-insensitive.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "low" => Some(Self::Low),
            "2" | "medium" => Some(Self::Medium),
            "3" | "high" => Some(Self::High),
            _ => None,
        }
    }

    pub fn style(&self) -> PriorityStyle {
        match self {
            Self::Low => PriorityStyle {
                label: "Low",
                class: "priority-low",
            },
            Self::Medium => PriorityStyle {
                label: "Medium",
                class: "priority-medium",
            },
            Self::High => PriorityStyle {
                label: "High",
                class: "priority-high",
            },
        }
    }
}

impl TryFrom<u8> for Priority {
    type Error = TaskError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::from_level(level)
    }
}

/// Display text and style class for a priority tier.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PriorityStyle {
    pub label: &'static str,
    pub class: &'static str,
}

/// Style lookup straight from a raw level.
pub fn priority_style(level: u8) -> Result<PriorityStyle, TaskError> {
    Priority::from_level(level).map(|p| p.style())
}
