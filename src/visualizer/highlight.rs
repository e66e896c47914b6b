// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use crate::error::CoachError;
use crate::results::{EvaluationResult, Severity};
use crate::visualizer::color::Color;

/// Line width of a bone referenced by an issue.
pub const HIGHLIGHT_WIDTH: u32 = 5;
/// Line width of an unreferenced bone.
pub const DEFAULT_WIDTH: u32 = 3;
/// Radius of a joint referenced by an issue.
pub const PROBLEM_RADIUS: u32 = 8;
/// Radius of an unreferenced joint.
pub const DEFAULT_RADIUS: u32 = 5;

/// How a joint or bone referenced by several issues picks its highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HighlightPolicy {
    /// The first issue in result order wins.
    #[default]
    FirstMatch,
    /// The most severe issue wins; ties keep the earlier issue.
    WorstSeverity,
}

impl HighlightPolicy {
    /// Returns the name accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FirstMatch => "first-match",
            Self::WorstSeverity => "worst-severity",
        }
    }

    fn assign<K: Eq + Hash>(self, map: &mut HashMap<K, Severity>, key: K, severity: Severity) {
        let current = map.entry(key).or_insert(severity);
        if self == Self::WorstSeverity && severity > *current {
            *current = severity;
        }
    }
}

impl fmt::Display for HighlightPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HighlightPolicy {
    type Err = CoachError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first-match" | "first" => Ok(Self::FirstMatch),
            "worst-severity" | "worst" => Ok(Self::WorstSeverity),
            _ => Err(CoachError::ConfigError(format!(
                "invalid highlight policy '{s}', expected one of: first-match, worst-severity"
            ))),
        }
    }
}

/// Unordered pair of landmark indices forming a bone segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Connection(usize, usize);

impl Connection {
    /// Create a connection; `new(a, b) == new(b, a)`.
    #[must_use]
    pub const fn new(a: usize, b: usize) -> Self {
        if a <= b { Self(a, b) } else { Self(b, a) }
    }

    /// Endpoints, lower index first.
    #[must_use]
    pub const fn endpoints(self) -> (usize, usize) {
        (self.0, self.1)
    }
}

impl From<[usize; 2]> for Connection {
    fn from([a, b]: [usize; 2]) -> Self {
        Self::new(a, b)
    }
}

/// How to draw one bone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentStyle {
    /// Line color.
    pub color: Color,
    /// Line width in pixels.
    pub width: u32,
    /// Whether an issue references this bone.
    pub highlighted: bool,
}

/// How to draw one joint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JointStyle {
    /// Fill color.
    pub color: Color,
    /// Circle radius in pixels.
    pub radius: u32,
    /// Whether an issue references this joint.
    pub problematic: bool,
}

/// Joint and bone highlights derived from one evaluation result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlights {
    policy: HighlightPolicy,
    connections: HashMap<Connection, Severity>,
    landmarks: HashMap<usize, Severity>,
}

impl Highlights {
    /// Build highlights for `result`.
    ///
    /// # Arguments
    ///
    /// * `result` - Evaluation result whose issues are mapped.
    /// * `policy` - Tie-break when several issues reference the same joint or bone.
    #[must_use]
    pub fn from_result(result: &EvaluationResult, policy: HighlightPolicy) -> Self {
        let mut connections = HashMap::new();
        let mut landmarks = HashMap::new();

        for issue in &result.issues {
            for &pair in &issue.connections {
                policy.assign(&mut connections, Connection::from(pair), issue.severity);
            }
            for &index in &issue.landmarks {
                policy.assign(&mut landmarks, index, issue.severity);
            }
        }

        Self {
            policy,
            connections,
            landmarks,
        }
    }

    /// Policy used to build these highlights.
    #[must_use]
    pub const fn policy(&self) -> HighlightPolicy {
        self.policy
    }

    /// Severity assigned to bone `a`–`b`, if any issue references it.
    #[must_use]
    pub fn connection_severity(&self, a: usize, b: usize) -> Option<Severity> {
        self.connections.get(&Connection::new(a, b)).copied()
    }

    /// Severity assigned to joint `index`, if any issue references it.
    #[must_use]
    pub fn landmark_severity(&self, index: usize) -> Option<Severity> {
        self.landmarks.get(&index).copied()
    }

    /// Whether any issue references joint `index`.
    #[must_use]
    pub fn is_problematic(&self, index: usize) -> bool {
        self.landmarks.contains_key(&index)
    }

    /// Style for bone `a`–`b`.
    #[must_use]
    pub fn connection_style(&self, a: usize, b: usize) -> SegmentStyle {
        match self.connection_severity(a, b) {
            Some(severity) => SegmentStyle {
                color: Color::from_severity(severity),
                width: HIGHLIGHT_WIDTH,
                highlighted: true,
            },
            None => SegmentStyle {
                color: Color::OK_CONNECTION,
                width: DEFAULT_WIDTH,
                highlighted: false,
            },
        }
    }

    /// Style for joint `index`.
    #[must_use]
    pub fn landmark_style(&self, index: usize) -> JointStyle {
        match self.landmark_severity(index) {
            Some(severity) => JointStyle {
                color: Color::from_severity(severity),
                radius: PROBLEM_RADIUS,
                problematic: true,
            },
            None => JointStyle {
                color: Color::OK_LANDMARK,
                radius: DEFAULT_RADIUS,
                problematic: false,
            },
        }
    }

    /// Highlighted bones, sorted by endpoints.
    #[must_use]
    pub fn highlighted_connections(&self) -> Vec<(Connection, Severity)> {
        let mut out: Vec<_> = self.connections.iter().map(|(&c, &s)| (c, s)).collect();
        out.sort_unstable();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phase::Phase;
    use crate::results::Issue;

    fn issue(severity: Severity, landmarks: &[usize], connections: &[[usize; 2]]) -> Issue {
        Issue {
            message: severity.to_string(),
            severity,
            landmarks: landmarks.to_vec(),
            connections: connections.to_vec(),
        }
    }

    fn overlapping() -> EvaluationResult {
        EvaluationResult::new(
            vec![
                issue(Severity::Medium, &[23, 25], &[[23, 25], [25, 27]]),
                issue(Severity::High, &[25, 26], &[[25, 23], [26, 28]]),
            ],
            Phase::Bottom,
        )
    }

    #[test]
    fn test_connection_is_unordered() {
        assert_eq!(Connection::new(25, 23), Connection::new(23, 25));
        assert_eq!(Connection::new(25, 23).endpoints(), (23, 25));
    }

    #[test]
    fn test_first_match_policy() {
        let h = Highlights::from_result(&overlapping(), HighlightPolicy::FirstMatch);
        assert_eq!(h.connection_severity(23, 25), Some(Severity::Medium));
        assert_eq!(h.connection_style(25, 23).color, Color::ORANGE);
        assert_eq!(h.landmark_style(25).color, Color::ORANGE);
        assert_eq!(h.landmark_severity(26), Some(Severity::High));
    }

    #[test]
    fn test_worst_severity_policy() {
        let h = Highlights::from_result(&overlapping(), HighlightPolicy::WorstSeverity);
        assert_eq!(h.connection_style(23, 25).color, Color::RED);
        assert_eq!(h.landmark_style(25).color, Color::RED);
        assert_eq!(h.landmark_style(23).color, Color::ORANGE);
    }

    #[test]
    fn test_unmapped_defaults() {
        let h = Highlights::from_result(&overlapping(), HighlightPolicy::FirstMatch);
        let bone = h.connection_style(11, 12);
        assert_eq!(bone.color, Color::OK_CONNECTION);
        assert_eq!(bone.width, DEFAULT_WIDTH);
        assert!(!bone.highlighted);

        let joint = h.landmark_style(0);
        assert_eq!(joint.color, Color::OK_LANDMARK);
        assert_eq!(joint.radius, DEFAULT_RADIUS);
        assert!(!h.is_problematic(0));
    }

    #[test]
    fn test_highlighted_styles() {
        let h = Highlights::from_result(&overlapping(), HighlightPolicy::FirstMatch);
        assert_eq!(h.connection_style(26, 28).width, HIGHLIGHT_WIDTH);
        assert_eq!(h.landmark_style(26).radius, PROBLEM_RADIUS);
        assert_eq!(h.highlighted_connections().len(), 3);
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!(
            "worst-severity".parse::<HighlightPolicy>().unwrap(),
            HighlightPolicy::WorstSeverity
        );
        assert_eq!(
            "first".parse::<HighlightPolicy>().unwrap(),
            HighlightPolicy::FirstMatch
        );
        assert!("loudest".parse::<HighlightPolicy>().is_err());
        assert_eq!(HighlightPolicy::default().to_string(), "first-match");
    }
}
