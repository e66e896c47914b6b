// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use crate::geometry::angle;
use crate::landmark::{
    Frame, LEFT_ANKLE, LEFT_HEEL, LEFT_HIP, LEFT_KNEE, RIGHT_ANKLE, RIGHT_HEEL, RIGHT_HIP,
    RIGHT_KNEE, RIGHT_SHOULDER, Side,
};
use crate::phase::{Phase, average_knee_angle};
use crate::results::{Issue, IssueTemplate, Severity};
use crate::rules::Rule;

/// Maximum torso lean from vertical, degrees.
pub const MAX_TORSO_LEAN: f32 = 10.0;
/// Bottom phase: average knee angle must not exceed this.
pub const MAX_BOTTOM_KNEE_ANGLE: f32 = 95.0;
/// Top phase: average knee angle must reach this.
pub const MIN_TOP_KNEE_ANGLE: f32 = 170.0;
/// Inward knee offset from the hip–ankle midpoint tolerated before valgus is reported.
pub const VALGUS_TOLERANCE: f32 = 0.01;
/// Horizontal knee offset from the ankle tolerated in either direction.
pub const KNEE_DRIFT_TOLERANCE: f32 = 0.07;
/// Maximum left/right knee angle difference, degrees.
pub const MAX_KNEE_ASYMMETRY: f32 = 12.0;
/// Maximum horizontal ankle–heel offset.
pub const MAX_HEEL_OFFSET: f32 = 0.05;

const LEG_CONNECTIONS: &[[usize; 2]] = &[[23, 25], [25, 27], [24, 26], [26, 28]];
const SHIN_CONNECTIONS: &[[usize; 2]] = &[[25, 27], [26, 28]];

/// Torso leans too far from vertical.
pub const BACK_ANGLE: IssueTemplate = IssueTemplate {
    message: "Keep your back more upright - chest up!",
    severity: Severity::High,
    landmarks: &[11, 12, 23, 24],
    connections: &[[11, 12], [12, 24], [24, 23], [23, 11]],
};

/// Knees still too straight at the bottom.
pub const NOT_DEEP_ENOUGH: IssueTemplate = IssueTemplate {
    message: "Squat deeper - aim for thighs parallel to ground",
    severity: Severity::Medium,
    landmarks: &[23, 25, 27, 24, 26, 28],
    connections: LEG_CONNECTIONS,
};

/// Knees not locked out at the top.
pub const NOT_EXTENDED: IssueTemplate = IssueTemplate {
    message: "Stand up straight - fully extend your legs",
    severity: Severity::Medium,
    landmarks: &[23, 25, 27, 24, 26, 28],
    connections: LEG_CONNECTIONS,
};

/// Knee valgus: a knee collapses inward.
pub const KNEES_CAVING: IssueTemplate = IssueTemplate {
    message: "Knees are caving in! Push them out to align with toes",
    severity: Severity::High,
    landmarks: &[25, 26, 27, 28],
    connections: LEG_CONNECTIONS,
};

/// A knee drifts ahead of its ankle.
pub const KNEES_FORWARD: IssueTemplate = IssueTemplate {
    message: "Knees are too far forward! Keep them over ankles",
    severity: Severity::High,
    landmarks: &[25, 26, 27, 28],
    connections: SHIN_CONNECTIONS,
};

/// A knee sits behind its ankle.
pub const KNEES_BACK: IssueTemplate = IssueTemplate {
    message: "Knees are too far back! Keep them over ankles",
    severity: Severity::High,
    landmarks: &[25, 26, 27, 28],
    connections: SHIN_CONNECTIONS,
};

/// Left and right knees bend by different amounts.
pub const ASYMMETRIC_LEGS: IssueTemplate = IssueTemplate {
    message: "Keep your legs symmetrical - both sides should move together",
    severity: Severity::High,
    landmarks: &[23, 24, 25, 26, 27, 28],
    connections: LEG_CONNECTIONS,
};

/// Heel offset from the ankle, weight off mid-foot.
pub const OFF_CENTER_WEIGHT: IssueTemplate = IssueTemplate {
    message: "Keep your weight centered - don't lean too far forward or back",
    severity: Severity::Medium,
    landmarks: &[27, 28, 29, 30],
    connections: &[[27, 29], [28, 30]],
};

/// Squat rules in evaluation order.
pub const RULES: [Rule; 5] = [
    Rule::new("back_angle", back_angle),
    Rule::new("knee_bend", knee_bend),
    Rule::new("knee_alignment", knee_alignment),
    Rule::new("leg_symmetry", leg_symmetry),
    Rule::new("weight_distribution", weight_distribution),
];

/// Torso lean: angle at the right hip between the shoulder and straight up.
#[must_use]
pub fn back_angle(frame: &Frame, _phase: Phase) -> Option<Issue> {
    let hip = frame.point(RIGHT_HIP)?;
    let shoulder = frame.point(RIGHT_SHOULDER)?;

    let lean = angle(shoulder, hip, hip.above());
    if lean > MAX_TORSO_LEAN {
        return BACK_ANGLE.emit(frame);
    }
    None
}

/// Depth at the bottom and lockout at the top. Silent while descending.
#[must_use]
pub fn knee_bend(frame: &Frame, phase: Phase) -> Option<Issue> {
    let average = average_knee_angle(frame);

    match phase {
        Phase::Bottom if average > MAX_BOTTOM_KNEE_ANGLE => NOT_DEEP_ENOUGH.emit(frame),
        Phase::Top if average < MIN_TOP_KNEE_ANGLE => NOT_EXTENDED.emit(frame),
        _ => None,
    }
}

/// Knee tracking relative to hip and ankle.
///
/// Checks valgus first, then forward drift, then backward drift; the first
/// failure found is the only one reported.
#[must_use]
pub fn knee_alignment(frame: &Frame, _phase: Phase) -> Option<Issue> {
    let right_hip = frame.point(RIGHT_HIP)?;
    let right_knee = frame.point(RIGHT_KNEE)?;
    let right_ankle = frame.point(RIGHT_ANKLE)?;
    let left_hip = frame.point(LEFT_HIP)?;
    let left_knee = frame.point(LEFT_KNEE)?;
    let left_ankle = frame.point(LEFT_ANKLE)?;

    // Positive when the knee sits outside the hip–ankle line
    let right_outward = right_knee.x - right_hip.midpoint(right_ankle).x;
    let left_outward = left_hip.midpoint(left_ankle).x - left_knee.x;
    if right_outward < -VALGUS_TOLERANCE || left_outward < -VALGUS_TOLERANCE {
        return KNEES_CAVING.emit(frame);
    }

    let right_drift = right_knee.x - right_ankle.x;
    let left_drift = left_knee.x - left_ankle.x;
    if right_drift > KNEE_DRIFT_TOLERANCE || left_drift > KNEE_DRIFT_TOLERANCE {
        return KNEES_FORWARD.emit(frame);
    }
    if -right_drift > KNEE_DRIFT_TOLERANCE || -left_drift > KNEE_DRIFT_TOLERANCE {
        return KNEES_BACK.emit(frame);
    }
    None
}

/// Left and right knees should bend by the same amount.
#[must_use]
pub fn leg_symmetry(frame: &Frame, _phase: Phase) -> Option<Issue> {
    let joint = |side: Side| {
        let (hip, knee, ankle) = side.leg();
        Some(angle(frame.point(hip)?, frame.point(knee)?, frame.point(ankle)?))
    };
    let left = joint(Side::Left)?;
    let right = joint(Side::Right)?;

    if (left - right).abs() > MAX_KNEE_ASYMMETRY {
        return ASYMMETRIC_LEGS.emit(frame);
    }
    None
}

/// Ankle–heel horizontal offset as a proxy for pressure shifting off mid-foot.
#[must_use]
pub fn weight_distribution(frame: &Frame, _phase: Phase) -> Option<Issue> {
    let left_ankle = frame.point(LEFT_ANKLE)?;
    let right_ankle = frame.point(RIGHT_ANKLE)?;
    let left_heel = frame.point(LEFT_HEEL)?;
    let right_heel = frame.point(RIGHT_HEEL)?;

    let left_offset = left_ankle.x - left_heel.x;
    let right_offset = right_ankle.x - right_heel.x;
    if left_offset.abs() > MAX_HEEL_OFFSET || right_offset.abs() > MAX_HEEL_OFFSET {
        return OFF_CENTER_WEIGHT.emit(frame);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::landmark::{LEFT_SHOULDER, Landmark};
    use crate::phase::tests::bend;
    use crate::rules::fixtures::standing;

    fn leaning(degrees: f32) -> Frame {
        let rad = degrees.to_radians();
        let lean = |hip_x: f32| Landmark::new(hip_x + 0.25 * rad.sin(), 0.55 - 0.25 * rad.cos());
        standing()
            .with(LEFT_SHOULDER, lean(0.45))
            .with(RIGHT_SHOULDER, lean(0.55))
    }

    fn squatting(degrees: f32) -> Frame {
        let frame = bend(standing(), Side::Left.leg(), Point::new(0.45, 0.75), degrees);
        bend(frame, Side::Right.leg(), Point::new(0.55, 0.75), degrees)
    }

    fn shift(frame: Frame, index: usize, dx: f32) -> Frame {
        let lm = *frame.get(index).unwrap();
        frame.with(index, Landmark::new(lm.x + dx, lm.y))
    }

    #[test]
    fn test_back_angle() {
        assert!(back_angle(&leaning(5.0), Phase::Top).is_none());

        let issue = back_angle(&leaning(15.0), Phase::Top).unwrap();
        assert_eq!(issue.severity, Severity::High);
        assert_eq!(issue.connections, vec![[11, 12], [12, 24], [24, 23], [23, 11]]);
    }

    #[test]
    fn test_back_angle_missing_landmarks() {
        assert!(back_angle(&leaning(15.0).without(RIGHT_HIP), Phase::Top).is_none());
        // Implicated but not measured: still suppressed
        assert!(back_angle(&leaning(15.0).without(LEFT_HIP), Phase::Top).is_none());
    }

    #[test]
    fn test_knee_bend_bottom() {
        let issue = knee_bend(&squatting(110.0), Phase::Bottom).unwrap();
        assert_eq!(issue.message, NOT_DEEP_ENOUGH.message);
        assert_eq!(issue.severity, Severity::Medium);

        assert!(knee_bend(&squatting(90.0), Phase::Bottom).is_none());
    }

    #[test]
    fn test_knee_bend_top() {
        let issue = knee_bend(&squatting(165.0), Phase::Top).unwrap();
        assert_eq!(issue.message, NOT_EXTENDED.message);
        assert!(knee_bend(&standing(), Phase::Top).is_none());
    }

    #[test]
    fn test_knee_bend_silent_while_descending() {
        assert!(knee_bend(&squatting(110.0), Phase::Descent).is_none());
        assert!(knee_bend(&squatting(165.0), Phase::Descent).is_none());
    }

    #[test]
    fn test_knee_alignment_valgus() {
        let frame = shift(standing(), RIGHT_KNEE, -0.02);
        let issue = knee_alignment(&frame, Phase::Top).unwrap();
        assert_eq!(issue.message, KNEES_CAVING.message);
        assert_eq!(issue.connections.len(), 4);
    }

    #[test]
    fn test_knee_alignment_valgus_checked_first() {
        // Left knee both caved in and past the ankle
        let frame = shift(standing(), LEFT_KNEE, 0.08);
        let issue = knee_alignment(&frame, Phase::Top).unwrap();
        assert_eq!(issue.message, KNEES_CAVING.message);
    }

    #[test]
    fn test_knee_alignment_forward_and_back() {
        let frame = shift(standing(), RIGHT_KNEE, 0.08);
        let issue = knee_alignment(&frame, Phase::Top).unwrap();
        assert_eq!(issue.message, KNEES_FORWARD.message);
        assert_eq!(issue.connections, vec![[25, 27], [26, 28]]);

        let frame = shift(standing(), LEFT_KNEE, -0.08);
        let issue = knee_alignment(&frame, Phase::Top).unwrap();
        assert_eq!(issue.message, KNEES_BACK.message);
    }

    #[test]
    fn test_knee_alignment_small_offsets_pass() {
        let frame = shift(standing(), RIGHT_KNEE, 0.05);
        assert!(knee_alignment(&frame, Phase::Top).is_none());
    }

    #[test]
    fn test_leg_symmetry() {
        let frame = bend(standing(), Side::Right.leg(), Point::new(0.55, 0.75), 160.0);
        let issue = leg_symmetry(&frame, Phase::Top).unwrap();
        assert_eq!(issue.severity, Severity::High);

        let frame = bend(standing(), Side::Right.leg(), Point::new(0.55, 0.75), 172.0);
        assert!(leg_symmetry(&frame, Phase::Top).is_none());
    }

    #[test]
    fn test_leg_symmetry_needs_both_legs() {
        let frame = bend(standing(), Side::Right.leg(), Point::new(0.55, 0.75), 120.0);
        assert!(leg_symmetry(&frame.without(LEFT_ANKLE), Phase::Top).is_none());
    }

    #[test]
    fn test_weight_distribution() {
        let frame = shift(standing(), RIGHT_HEEL, 0.06);
        let issue = weight_distribution(&frame, Phase::Top).unwrap();
        assert_eq!(issue.message, OFF_CENTER_WEIGHT.message);
        assert_eq!(issue.landmarks, vec![27, 28, 29, 30]);

        assert!(weight_distribution(&frame.without(LEFT_HEEL), Phase::Top).is_none());
    }
}
