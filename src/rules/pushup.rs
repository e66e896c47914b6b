// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use crate::geometry::{Point, angle};
use crate::landmark::{
    Frame, LEFT_EAR, LEFT_ELBOW, LEFT_HIP, LEFT_KNEE, LEFT_SHOULDER, NOSE, RIGHT_EAR,
    RIGHT_ELBOW, RIGHT_HIP, RIGHT_KNEE, RIGHT_SHOULDER,
};
use crate::phase::{Phase, average_elbow_angle};
use crate::results::{Issue, IssueTemplate, Severity};
use crate::rules::Rule;

/// Bottom phase: average elbow angle must not exceed this.
pub const MAX_BOTTOM_ELBOW_ANGLE: f32 = 100.0;
/// Top phase: average elbow angle must reach this.
pub const MIN_TOP_ELBOW_ANGLE: f32 = 160.0;
/// Maximum angle between the torso and thigh lines, degrees.
pub const MAX_BODY_BEND: f32 = 12.0;
/// Minimum height of the ears above the shoulders.
pub const MIN_HEAD_CLEARANCE: f32 = 0.05;
/// Maximum left/right difference in upper-arm angle from vertical, degrees.
pub const MAX_SHOULDER_ASYMMETRY: f32 = 10.0;

const ARM_LANDMARKS: &[usize] = &[11, 13, 15, 12, 14, 16];
const ARM_CONNECTIONS: &[[usize; 2]] = &[[11, 13], [13, 15], [12, 14], [14, 16]];

/// Elbows still too straight at the bottom.
pub const NOT_LOW_ENOUGH: IssueTemplate = IssueTemplate {
    message: "Lower your chest more - bend your elbows to 90°",
    severity: Severity::High,
    landmarks: ARM_LANDMARKS,
    connections: ARM_CONNECTIONS,
};

/// Elbows not locked out at the top.
pub const ARMS_NOT_EXTENDED: IssueTemplate = IssueTemplate {
    message: "Fully extend your arms at the top position",
    severity: Severity::Medium,
    landmarks: ARM_LANDMARKS,
    connections: ARM_CONNECTIONS,
};

/// Hips sag or pike away from the shoulder-knee line.
pub const BACK_NOT_STRAIGHT: IssueTemplate = IssueTemplate {
    message: "Keep your back straight and aligned with legs",
    severity: Severity::High,
    landmarks: &[11, 12, 23, 24, 25, 26],
    connections: &[[11, 12], [12, 24], [24, 23], [23, 11], [24, 26], [23, 25]],
};

/// Head drops toward shoulder level.
pub const HEAD_OUT_OF_LINE: IssueTemplate = IssueTemplate {
    message: "Keep your head in line with your spine",
    severity: Severity::Medium,
    landmarks: &[0, 7, 8, 11, 12],
    connections: &[[7, 8], [8, 12], [12, 11], [11, 7]],
};

/// Upper arms hang at different angles.
pub const UNSTABLE_SHOULDERS: IssueTemplate = IssueTemplate {
    message: "Keep your shoulders stable and level",
    severity: Severity::High,
    landmarks: &[11, 12, 13, 14],
    connections: &[[11, 13], [12, 14], [11, 12]],
};

/// Push-up rules in evaluation order.
pub const RULES: [Rule; 4] = [
    Rule::new("elbow_angle", elbow_angle),
    Rule::new("back_alignment", back_alignment),
    Rule::new("head_position", head_position),
    Rule::new("shoulder_stability", shoulder_stability),
];

/// Depth at the bottom and lockout at the top. Silent while descending.
#[must_use]
pub fn elbow_angle(frame: &Frame, phase: Phase) -> Option<Issue> {
    let average = average_elbow_angle(frame);

    match phase {
        Phase::Bottom if average > MAX_BOTTOM_ELBOW_ANGLE => NOT_LOW_ENOUGH.emit(frame),
        Phase::Top if average < MIN_TOP_ELBOW_ANGLE => ARMS_NOT_EXTENDED.emit(frame),
        _ => None,
    }
}

fn midpoint(frame: &Frame, left: usize, right: usize) -> Option<Point> {
    Some(frame.point(left)?.midpoint(frame.point(right)?))
}

/// Direction of `from → to` in radians.
fn heading(from: Point, to: Point) -> f32 {
    (to.y - from.y).atan2(to.x - from.x)
}

/// Torso (hips → shoulders) and thighs (knees → hips) should form one line.
#[must_use]
pub fn back_alignment(frame: &Frame, _phase: Phase) -> Option<Issue> {
    let shoulders = midpoint(frame, LEFT_SHOULDER, RIGHT_SHOULDER)?;
    let hips = midpoint(frame, LEFT_HIP, RIGHT_HIP)?;
    let knees = midpoint(frame, LEFT_KNEE, RIGHT_KNEE)?;

    let mut bend = (heading(hips, shoulders) - heading(knees, hips))
        .abs()
        .to_degrees();
    // Headings near ±180° straddle the atan2 branch cut
    if bend > 180.0 {
        bend = 360.0 - bend;
    }

    if bend > MAX_BODY_BEND {
        return BACK_NOT_STRAIGHT.emit(frame);
    }
    None
}

/// Ears should sit clearly above the shoulders.
#[must_use]
pub fn head_position(frame: &Frame, _phase: Phase) -> Option<Issue> {
    frame.point(NOSE)?;
    let ears = midpoint(frame, LEFT_EAR, RIGHT_EAR)?;
    let shoulders = midpoint(frame, LEFT_SHOULDER, RIGHT_SHOULDER)?;

    if ears.y > shoulders.y - MIN_HEAD_CLEARANCE {
        return HEAD_OUT_OF_LINE.emit(frame);
    }
    None
}

/// Upper arms should hang at the same angle from vertical on both sides.
#[must_use]
pub fn shoulder_stability(frame: &Frame, _phase: Phase) -> Option<Issue> {
    let left_shoulder = frame.point(LEFT_SHOULDER)?;
    let right_shoulder = frame.point(RIGHT_SHOULDER)?;
    let left_elbow = frame.point(LEFT_ELBOW)?;
    let right_elbow = frame.point(RIGHT_ELBOW)?;

    let left = angle(left_elbow, left_shoulder, left_shoulder.above());
    let right = angle(right_elbow, right_shoulder, right_shoulder.above());

    if (left - right).abs() > MAX_SHOULDER_ASYMMETRY {
        return UNSTABLE_SHOULDERS.emit(frame);
    }
    None
}
