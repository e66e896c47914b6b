// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Evaluation output types.
//!
//! An [`EvaluationResult`] is produced fresh for every frame and holds the
//! movement [`Phase`] plus every [`Issue`] the exercise's rules detected.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::landmark::Frame;
use crate::phase::Phase;

/// Ordinal importance of a detected fault.
///
/// Ordered so that `High > Medium > Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Returns the lowercase name used in serialized output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One detected form fault.
///
/// Carries the joints and bone segments a renderer should highlight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Coaching cue shown to the user.
    pub message: String,
    /// Fault importance.
    pub severity: Severity,
    /// Landmark indices implicated by the fault.
    pub landmarks: Vec<usize>,
    /// Bone segments (landmark index pairs) implicated by the fault.
    pub connections: Vec<[usize; 2]>,
}

impl Issue {
    /// Whether this issue references landmark `index`.
    #[must_use]
    pub fn involves_landmark(&self, index: usize) -> bool {
        self.landmarks.contains(&index)
    }
}

/// Static description of a fault a rule can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IssueTemplate {
    /// Coaching message shown to the user.
    pub message: &'static str,
    /// Severity of the fault.
    pub severity: Severity,
    /// Joints to highlight.
    pub landmarks: &'static [usize],
    /// Bones to highlight, as landmark index pairs.
    pub connections: &'static [[usize; 2]],
}

impl IssueTemplate {
    /// Every landmark index the template references, connections included.
    pub fn referenced(&self) -> impl Iterator<Item = usize> + '_ {
        self.landmarks
            .iter()
            .copied()
            .chain(self.connections.iter().flatten().copied())
    }

    /// Instantiate the template for `frame`.
    ///
    /// Returns `None` when any referenced landmark is absent from the frame, so an
    /// emitted issue never points at a joint the renderer cannot draw.
    #[must_use]
    pub fn emit(&self, frame: &Frame) -> Option<Issue> {
        if !self.referenced().all(|i| frame.contains(i)) {
            return None;
        }
        Some(Issue {
            message: self.message.to_string(),
            severity: self.severity,
            landmarks: self.landmarks.to_vec(),
            connections: self.connections.to_vec(),
        })
    }
}

/// Per-frame evaluation output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    /// `true` iff no issue was detected.
    pub is_correct: bool,
    /// Detected issues in rule order.
    pub issues: Vec<Issue>,
    /// Movement phase of the frame.
    pub phase: Phase,
}

impl EvaluationResult {
    /// Create a result; `is_correct` is derived from `issues`.
    #[must_use]
    pub fn new(issues: Vec<Issue>, phase: Phase) -> Self {
        Self {
            is_correct: issues.is_empty(),
            issues,
            phase,
        }
    }

    /// Highest severity among the issues, if any.
    #[must_use]
    pub fn worst_severity(&self) -> Option<Severity> {
        self.issues.iter().map(|issue| issue.severity).max()
    }

    /// Short description such as `"2 issues (1 high, 1 medium)"`.
    #[must_use]
    pub fn summary(&self) -> String {
        if self.issues.is_empty() {
            return "good form".to_string();
        }
        let count = |s: Severity| self.issues.iter().filter(|i| i.severity == s).count();
        let parts: Vec<String> = [Severity::High, Severity::Medium, Severity::Low]
            .into_iter()
            .filter_map(|s| match count(s) {
                0 => None,
                n => Some(format!("{n} {s}")),
            })
            .collect();
        let n = self.issues.len();
        format!(
            "{n} {} ({})",
            if n == 1 { "issue" } else { "issues" },
            parts.join(", ")
        )
    }
}
