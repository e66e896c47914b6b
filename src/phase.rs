// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Movement phase classification.
//!
//! Each classifier is a pure function of the current frame. There is no
//! hysteresis: a frame sitting on a threshold switches phase immediately, and
//! jitter around a threshold can make consecutive frames alternate.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::angle;
use crate::landmark::{Frame, Side};

/// Angle reported for a joint whose landmarks are not all present.
pub const STRAIGHT_JOINT: f32 = 180.0;

/// Squat: average knee angle below this is the bottom.
pub const SQUAT_BOTTOM_BELOW: f32 = 120.0;
/// Squat: average knee angle above this is the top.
pub const SQUAT_TOP_ABOVE: f32 = 160.0;
/// Push-up: average elbow angle below this is the bottom.
pub const PUSHUP_BOTTOM_BELOW: f32 = 90.0;
/// Push-up: average elbow angle above this is the top.
pub const PUSHUP_TOP_ABOVE: f32 = 160.0;

/// Discrete stage of a repetition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Fully extended.
    Top,
    /// Between top and bottom, in either direction.
    Descent,
    /// Deepest point.
    Bottom,
}

impl Phase {
    /// Returns the lowercase name used in serialized output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Descent => "descent",
            Self::Bottom => "bottom",
        }
    }

    fn from_angle(average: f32, bottom_below: f32, top_above: f32) -> Self {
        if average < bottom_below {
            Self::Bottom
        } else if average > top_above {
            Self::Top
        } else {
            Self::Descent
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn joint_angle(frame: &Frame, (a, vertex, b): (usize, usize, usize)) -> f32 {
    match (frame.point(a), frame.point(vertex), frame.point(b)) {
        (Some(a), Some(vertex), Some(b)) => angle(a, vertex, b),
        _ => STRAIGHT_JOINT,
    }
}

/// Hip–knee–ankle angle for `side`, or [`STRAIGHT_JOINT`] if a landmark is missing.
#[must_use]
pub fn knee_angle(frame: &Frame, side: Side) -> f32 {
    joint_angle(frame, side.leg())
}

/// Shoulder–elbow–wrist angle for `side`, or [`STRAIGHT_JOINT`] if a landmark is missing.
#[must_use]
pub fn elbow_angle(frame: &Frame, side: Side) -> f32 {
    joint_angle(frame, side.arm())
}

/// Mean of the left and right knee angles.
#[must_use]
pub fn average_knee_angle(frame: &Frame) -> f32 {
    (knee_angle(frame, Side::Right) + knee_angle(frame, Side::Left)) / 2.0
}

/// Mean of the left and right elbow angles.
#[must_use]
pub fn average_elbow_angle(frame: &Frame) -> f32 {
    (elbow_angle(frame, Side::Right) + elbow_angle(frame, Side::Left)) / 2.0
}

/// Classify a squat frame by average knee angle.
#[must_use]
pub fn classify_squat(frame: &Frame) -> Phase {
    Phase::from_angle(average_knee_angle(frame), SQUAT_BOTTOM_BELOW, SQUAT_TOP_ABOVE)
}

/// Classify a push-up frame by average elbow angle.
#[must_use]
pub fn classify_pushup(frame: &Frame) -> Phase {
    Phase::from_angle(
        average_elbow_angle(frame),
        PUSHUP_BOTTOM_BELOW,
        PUSHUP_TOP_ABOVE,
    )
}
