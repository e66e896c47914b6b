// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Fault-detection rules.
//!
//! A rule is a pure function of a frame (and the frame's phase) that reports at
//! most one [`Issue`]. Rules never fail: when a landmark they need is missing
//! they report nothing.

use std::fmt;

use crate::landmark::Frame;
use crate::phase::Phase;
use crate::results::Issue;

/// Squat rule set.
pub mod squat;

/// Push-up rule set.
pub mod pushup;

/// Signature shared by every rule.
pub type RuleFn = fn(&Frame, Phase) -> Option<Issue>;

/// A named fault detector.
#[derive(Clone, Copy)]
pub struct Rule {
    name: &'static str,
    check: RuleFn,
}

impl Rule {
    /// Create a rule.
    #[must_use]
    pub const fn new(name: &'static str, check: RuleFn) -> Self {
        Self { name, check }
    }

    /// Identifier of the rule, e.g. `"back_angle"`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Run the rule against a frame.
    #[must_use]
    pub fn check(&self, frame: &Frame, phase: Phase) -> Option<Issue> {
        (self.check)(frame, phase)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Rule").field(&self.name).finish()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_debug_and_name() {
        let rule = squat::RULES[0];
        assert_eq!(rule.name(), "back_angle");
        assert_eq!(format!("{rule:?}"), "Rule(\"back_angle\")");
    }

    #[test]
    fn test_rule_order() {
        let names: Vec<_> = squat::RULES.iter().map(Rule::name).collect();
        assert_eq!(
            names,
            [
                "back_angle",
                "knee_bend",
                "knee_alignment",
                "leg_symmetry",
                "weight_distribution"
            ]
        );
        let names: Vec<_> = pushup::RULES.iter().map(Rule::name).collect();
        assert_eq!(
            names,
            [
                "elbow_angle",
                "back_alignment",
                "head_position",
                "shoulder_stability"
            ]
        );
    }

    #[test]
    fn test_good_form_fixtures_are_clean() {
        let frame = fixtures::standing();
        for rule in &squat::RULES {
            assert!(rule.check(&frame, Phase::Top).is_none(), "{}", rule.name());
        }
        let frame = fixtures::plank();
        for rule in &pushup::RULES {
            assert!(rule.check(&frame, Phase::Top).is_none(), "{}", rule.name());
        }
    }

    #[test]
    fn test_empty_frame_reports_nothing() {
        let frame = Frame::empty();
        for phase in [Phase::Top, Phase::Descent, Phase::Bottom] {
            for rule in squat::RULES.iter().chain(pushup::RULES.iter()) {
                assert!(rule.check(&frame, phase).is_none(), "{}", rule.name());
            }
        }
    }
}
