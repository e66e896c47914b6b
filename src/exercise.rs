// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Supported exercises.
//!
//! Each exercise owns a phase classifier and an ordered rule set. Dispatch is
//! by enum, so an unsupported exercise can only arise when parsing a name.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::landmark::Frame;
use crate::phase::{self, Phase};
use crate::rules::{self, Rule};

/// Exercise types with a rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Exercise {
    /// Bodyweight squat, filmed from the front.
    Squat,
    /// Push-up, filmed from the side.
    #[serde(rename = "pushup")]
    PushUp,
}

impl Exercise {
    /// All supported exercises.
    pub const ALL: [Self; 2] = [Self::Squat, Self::PushUp];

    /// Returns the canonical name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Squat => "squat",
            Self::PushUp => "pushup",
        }
    }

    /// Rules evaluated for this exercise, in order.
    #[must_use]
    pub const fn rules(&self) -> &'static [Rule] {
        match self {
            Self::Squat => &rules::squat::RULES,
            Self::PushUp => &rules::pushup::RULES,
        }
    }

    /// Movement phase of `frame` for this exercise.
    #[must_use]
    pub fn classify(&self, frame: &Frame) -> Phase {
        match self {
            Self::Squat => phase::classify_squat(frame),
            Self::PushUp => phase::classify_pushup(frame),
        }
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Exercise {
    type Err = ExerciseParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "squat" | "squats" => Ok(Self::Squat),
            "pushup" | "pushups" | "push-up" | "push-ups" => Ok(Self::PushUp),
            _ => Err(ExerciseParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an unknown exercise name.
#[derive(Debug, Clone)]
pub struct ExerciseParseError(String);

impl ExerciseParseError {
    /// The name that failed to parse.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExerciseParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid exercise '{}', expected one of: squats, pushups",
            self.0
        )
    }
}

impl std::error::Error for ExerciseParseError {}
