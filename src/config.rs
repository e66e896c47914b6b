// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Evaluation configuration.
//!
//! This module defines the [`EvaluationConfig`] struct, which controls how frames
//! are filtered before evaluation and how issues are turned into highlights.

use crate::error::{CoachError, Result};
use crate::visualizer::HighlightPolicy;

/// Configuration for an [`Evaluator`](crate::Evaluator).
///
/// The defaults reproduce plain [`evaluate`](crate::evaluate): every landmark is
/// used and highlights follow the first matching issue.
///
/// # Example
///
/// ```rust
/// use form_coach::{EvaluationConfig, HighlightPolicy};
///
/// let config = EvaluationConfig::new()
///     .with_min_visibility(0.5)
///     .with_policy(HighlightPolicy::WorstSeverity);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EvaluationConfig {
    /// Landmarks whose visibility score is below this are treated as absent.
    /// `None` keeps every landmark the pose source reported.
    pub min_visibility: Option<f32>,
    /// How overlapping issues pick the highlight of a shared joint or bone.
    pub policy: HighlightPolicy,
}

impl EvaluationConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum visibility for a landmark to be used.
    ///
    /// # Arguments
    ///
    /// * `threshold` - Minimum visibility score (0.0 to 1.0).
    #[must_use]
    pub const fn with_min_visibility(mut self, threshold: f32) -> Self {
        self.min_visibility = Some(threshold);
        self
    }

    /// Set the highlight policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: HighlightPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Check that every value is in range.
    ///
    /// # Errors
    ///
    /// Returns [`CoachError::ConfigError`] if `min_visibility` is outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if let Some(v) = self.min_visibility
            && !(0.0..=1.0).contains(&v)
        {
            return Err(CoachError::ConfigError(format!(
                "min_visibility must be within [0, 1], got {v}"
            )));
        }
        Ok(())
    }
}
