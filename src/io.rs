// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! I/O utilities for landmark frames and evaluation results.
//!
//! A frames file holds either a single frame (a JSON array of landmark objects or
//! `null`) or an array of such frames.

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use serde::Deserialize;

use crate::error::{CoachError, Result};
use crate::landmark::{Frame, Landmark};
use crate::results::EvaluationResult;

#[derive(Deserialize)]
#[serde(untagged)]
enum FramesFile {
    Many(Vec<Vec<Option<Landmark>>>),
    One(Vec<Option<Landmark>>),
}

impl TryFrom<FramesFile> for Vec<Frame> {
    type Error = CoachError;

    fn try_from(file: FramesFile) -> Result<Self> {
        match file {
            FramesFile::One(landmarks) => Ok(vec![Frame::new(landmarks)?]),
            FramesFile::Many(frames) => frames
                .into_iter()
                .enumerate()
                .map(|(i, landmarks)| {
                    Frame::new(landmarks).map_err(|e| match e {
                        CoachError::InvalidFrame(msg) => {
                            CoachError::InvalidFrame(format!("frame {i}: {msg}"))
                        }
                        other => other,
                    })
                })
                .collect(),
        }
    }
}

/// Parse frames from a JSON string.
///
/// # Errors
///
/// Returns [`CoachError::ParseError`] if the text is neither a frame nor a list of
/// frames, and [`CoachError::InvalidFrame`] if a frame has too many landmarks.
pub fn parse_frames(json: &str) -> Result<Vec<Frame>> {
    let file: FramesFile = serde_json::from_str(json)
        .map_err(|e| CoachError::ParseError(format!("expected a frame or a list of frames: {e}")))?;
    file.try_into()
}

/// Load frames from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, does not hold frames, or holds a
/// frame with too many landmarks.
pub fn load_frames<P: AsRef<Path>>(path: P) -> Result<Vec<Frame>> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| CoachError::IoError(format!("Failed to open {}: {e}", path.display())))?;
    let file: FramesFile = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        CoachError::ParseError(format!("{}: expected a frame or a list of frames: {e}", path.display()))
    })?;
    file.try_into()
}

/// Write one result as a single JSON line.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn write_result_line<W: Write>(mut writer: W, result: &EvaluationResult) -> Result<()> {
    serde_json::to_writer(&mut writer, result)?;
    writeln!(writer)?;
    Ok(())
}
