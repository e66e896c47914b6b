// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

#![allow(clippy::multiple_crate_versions)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Form Coach
//!
//! Rule-based exercise form evaluation over 2D body-pose landmarks.
//!
//! Each [`Frame`] holds up to 33 normalized landmarks in the `MediaPipe` pose
//! layout. [`evaluate`] classifies the movement phase from joint angles, runs the
//! exercise's form rules in order and returns an [`EvaluationResult`] listing
//! every issue found, with the joints and bones each issue refers to. Those
//! references drive the skeleton highlights used by the annotator.
//!
//! ## Features
//!
//! - **Pure evaluation** - No state between frames, no I/O, safe to call from any thread
//! - **Missing-landmark tolerant** - Rules whose landmarks are absent simply stay silent
//! - **Squats and push-ups** - Phase classification plus five squat and four push-up rules
//! - **Highlights** - Per-joint and per-bone severity colors with a configurable tie-break
//! - **Annotation** - Optional skeleton overlay rendering (`annotate` feature)
//!
//! ## Quick Start (Library)
//!
//! ```rust
//! use form_coach::{Exercise, Frame, Landmark, evaluate};
//!
//! let frame = Frame::empty()
//!     .with(11, Landmark::new(0.45, 0.30))
//!     .with(12, Landmark::new(0.55, 0.30));
//!
//! let result = evaluate(Exercise::Squat, &frame);
//! for issue in &result.issues {
//!     println!("{} ({})", issue.message, issue.severity);
//! }
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! # Evaluate a recorded session
//! form-coach evaluate --exercise squats --frames session.json
//!
//! # Machine-readable output, one result per line
//! form-coach evaluate -e pushups -f session.json --json
//!
//! # Save annotated skeletons to runs/squat/evaluate
//! form-coach evaluate -e squats -f session.json --save
//! ```
//!
//! **CLI Options:**
//!
//! | Option | Short | Description | Default |
//! |--------|-------|-------------|---------|
//! | `--exercise` | `-e` | Exercise name | required |
//! | `--frames` | `-f` | Frames JSON file | required |
//! | `--min-visibility` | | Drop landmarks below this visibility | none |
//! | `--policy` | | Highlight tie-break | `first-match` |
//! | `--json` | | JSON lines output | `false` |
//! | `--save` | | Save annotated frames | `false` |
//! | `--image` | | Background image for annotations | black canvas |
//!
//! ## Frame Format
//!
//! A frame is a JSON array of up to 33 entries, each either `null` or
//! `{"x": f32, "y": f32, "z"?: f32, "visibility"?: f32}`. A frames file holds one
//! frame or an array of frames.

// Modules
#[cfg(feature = "annotate")]
pub mod annotate;
pub mod cli;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod exercise;
pub mod geometry;
pub mod io;
pub mod landmark;
pub mod phase;
pub mod results;
pub mod rules;
pub mod visualizer;

// Re-export main types for convenience
pub use config::EvaluationConfig;
pub use error::{CoachError, Result};
pub use evaluator::{Evaluator, evaluate, evaluate_named};
pub use exercise::{Exercise, ExerciseParseError};
pub use geometry::{Point, angle, distance, point_in_triangle};
pub use landmark::{Frame, Landmark, NUM_LANDMARKS, Side};
pub use phase::Phase;
pub use results::{EvaluationResult, Issue, IssueTemplate, Severity};
pub use rules::Rule;

// Re-export highlight types
pub use visualizer::{Color, Connection, HighlightPolicy, Highlights};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
