// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Per-frame evaluation.
//!
//! [`evaluate`] classifies the frame's phase and runs the exercise's rules in
//! order, collecting every issue. It is pure and holds no state, so frames from
//! any number of streams can be evaluated in parallel.

use crate::config::EvaluationConfig;
use crate::error::Result;
use crate::exercise::Exercise;
use crate::landmark::Frame;
use crate::results::EvaluationResult;
use crate::visualizer::Highlights;

/// Evaluate one frame for `exercise`.
///
/// # Example
///
/// ```rust
/// use form_coach::{Exercise, Frame, evaluate};
///
/// let result = evaluate(Exercise::Squat, &Frame::empty());
/// assert!(result.is_correct);
/// ```
#[must_use]
pub fn evaluate(exercise: Exercise, frame: &Frame) -> EvaluationResult {
    let phase = exercise.classify(frame);
    let issues = exercise
        .rules()
        .iter()
        .filter_map(|rule| rule.check(frame, phase))
        .collect();
    EvaluationResult::new(issues, phase)
}

/// Evaluate one frame for an exercise given by name.
///
/// # Errors
///
/// Returns [`CoachError::UnsupportedExercise`](crate::CoachError::UnsupportedExercise)
/// if `name` is not a known exercise.
pub fn evaluate_named(name: &str, frame: &Frame) -> Result<EvaluationResult> {
    let exercise: Exercise = name.parse()?;
    Ok(evaluate(exercise, frame))
}

/// Evaluator bound to an [`EvaluationConfig`].
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    config: EvaluationConfig,
}

impl Evaluator {
    /// Create an evaluator.
    ///
    /// # Errors
    ///
    /// Returns [`CoachError::ConfigError`](crate::CoachError::ConfigError) if the
    /// configuration is out of range.
    pub fn new(config: EvaluationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    /// Evaluate one frame, dropping low-visibility landmarks first if configured.
    #[must_use]
    pub fn evaluate(&self, exercise: Exercise, frame: &Frame) -> EvaluationResult {
        match self.config.min_visibility {
            Some(min) => evaluate(exercise, &frame.retain_visible(min)),
            None => evaluate(exercise, frame),
        }
    }

    /// Highlights for `result` under the configured policy.
    #[must_use]
    pub fn highlights(&self, result: &EvaluationResult) -> Highlights {
        Highlights::from_result(result, self.config.policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CoachError;
    use crate::landmark::{Landmark, RIGHT_SHOULDER};
    use crate::phase::Phase;
    use crate::rules::fixtures::{plank, standing};
    use crate::visualizer::HighlightPolicy;

    #[test]
    fn test_clean_frames() {
        let result = evaluate(Exercise::Squat, &standing());
        assert!(result.is_correct);
        assert_eq!(result.phase, Phase::Top);

        let result = evaluate(Exercise::PushUp, &plank());
        assert!(result.is_correct);
        assert_eq!(result.phase, Phase::Top);
    }

    #[test]
    fn test_multiple_issues_in_rule_order() {
        // Leaning torso and heel off-center
        let frame = standing()
            .with(RIGHT_SHOULDER, Landmark::new(0.65, 0.33))
            .with(30, Landmark::new(0.62, 0.97));
        let result = evaluate(Exercise::Squat, &frame);
        assert!(!result.is_correct);
        let messages: Vec<_> = result.issues.iter().map(|i| i.message.as_str()).collect();
        assert_eq!(
            messages,
            [
                "Keep your back more upright - chest up!",
                "Keep your weight centered - don't lean too far forward or back"
            ]
        );
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let frame = standing().with(RIGHT_SHOULDER, Landmark::new(0.65, 0.33));
        assert_eq!(
            evaluate(Exercise::Squat, &frame),
            evaluate(Exercise::Squat, &frame)
        );
    }

    #[test]
    fn test_evaluate_named() {
        assert!(evaluate_named("squats", &standing()).unwrap().is_correct);
        assert!(matches!(
            evaluate_named("deadlift", &standing()),
            Err(CoachError::UnsupportedExercise(name)) if name == "deadlift"
        ));
    }

    #[test]
    fn test_evaluator_visibility_filter() {
        let frame = standing().with(
            RIGHT_SHOULDER,
            Landmark::new(0.65, 0.33).with_visibility(0.1),
        );
        assert!(!evaluate(Exercise::Squat, &frame).is_correct);

        let evaluator = Evaluator::new(EvaluationConfig::new().with_min_visibility(0.5)).unwrap();
        assert!(evaluator.evaluate(Exercise::Squat, &frame).is_correct);
    }

    #[test]
    fn test_evaluator_rejects_bad_config() {
        let config = EvaluationConfig::new().with_min_visibility(2.0);
        assert!(matches!(Evaluator::new(config), Err(CoachError::ConfigError(_))));
    }

    #[test]
    fn test_evaluator_highlight_policy() {
        let evaluator =
            Evaluator::new(EvaluationConfig::new().with_policy(HighlightPolicy::WorstSeverity))
                .unwrap();
        let result = evaluator.evaluate(Exercise::Squat, &standing());
        assert_eq!(
            evaluator.highlights(&result).policy(),
            HighlightPolicy::WorstSeverity
        );
    }
}
