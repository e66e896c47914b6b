// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Visualization of evaluation results.
//!
//! Turns an [`EvaluationResult`](crate::EvaluationResult) into per-joint and
//! per-bone styles that a renderer can paint over the skeleton.

/// Color definitions and severity palette.
pub mod color;

/// Issue-to-style mapping.
pub mod highlight;

/// Body skeleton topology.
pub mod skeleton;

pub use color::Color;
pub use highlight::{Connection, HighlightPolicy, Highlights, JointStyle, SegmentStyle};
pub use skeleton::SKELETON;
