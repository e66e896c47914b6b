// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Body landmarks and per-instant frames.
//!
//! Indices follow the 33-point body topology used by common pose landmarkers.
//! Only the indices consumed by the rule sets and the skeleton overlay have
//! named constants here.

use ndarray::ArrayView2;
use serde::{Deserialize, Serialize};

use crate::error::{CoachError, Result};
use crate::geometry::Point;

/// Number of landmark slots in a frame.
pub const NUM_LANDMARKS: usize = 33;

/// Nose.
pub const NOSE: usize = 0;
/// Left ear.
pub const LEFT_EAR: usize = 7;
/// Right ear.
pub const RIGHT_EAR: usize = 8;
/// Left shoulder.
pub const LEFT_SHOULDER: usize = 11;
/// Right shoulder.
pub const RIGHT_SHOULDER: usize = 12;
/// Left elbow.
pub const LEFT_ELBOW: usize = 13;
/// Right elbow.
pub const RIGHT_ELBOW: usize = 14;
/// Left wrist.
pub const LEFT_WRIST: usize = 15;
/// Right wrist.
pub const RIGHT_WRIST: usize = 16;
/// Left hip.
pub const LEFT_HIP: usize = 23;
/// Right hip.
pub const RIGHT_HIP: usize = 24;
/// Left knee.
pub const LEFT_KNEE: usize = 25;
/// Right knee.
pub const RIGHT_KNEE: usize = 26;
/// Left ankle.
pub const LEFT_ANKLE: usize = 27;
/// Right ankle.
pub const RIGHT_ANKLE: usize = 28;
/// Left heel.
pub const LEFT_HEEL: usize = 29;
/// Right heel.
pub const RIGHT_HEEL: usize = 30;
/// Left foot index (toe tip).
pub const LEFT_FOOT_INDEX: usize = 31;
/// Right foot index (toe tip).
pub const RIGHT_FOOT_INDEX: usize = 32;

/// Body side, used to pick the matching joint triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Subject's left.
    Left,
    /// Subject's right.
    Right,
}

impl Side {
    /// `(hip, knee, ankle)` indices for this side.
    #[must_use]
    pub const fn leg(self) -> (usize, usize, usize) {
        match self {
            Self::Left => (LEFT_HIP, LEFT_KNEE, LEFT_ANKLE),
            Self::Right => (RIGHT_HIP, RIGHT_KNEE, RIGHT_ANKLE),
        }
    }

    /// `(shoulder, elbow, wrist)` indices for this side.
    #[must_use]
    pub const fn arm(self) -> (usize, usize, usize) {
        match self {
            Self::Left => (LEFT_SHOULDER, LEFT_ELBOW, LEFT_WRIST),
            Self::Right => (RIGHT_SHOULDER, RIGHT_ELBOW, RIGHT_WRIST),
        }
    }
}

/// One anatomical point in normalized image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Horizontal position, `[0, 1]` across the frame.
    pub x: f32,
    /// Vertical position, `[0, 1]` down the frame.
    pub y: f32,
    /// Relative depth, if the pose source provides one. Never used in evaluation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f32>,
    /// Visibility score in `[0, 1]`, if the pose source provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f32>,
}

impl Landmark {
    /// Create a landmark from a 2-D position.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            z: None,
            visibility: None,
        }
    }

    /// Attach a visibility score.
    #[must_use]
    pub const fn with_visibility(mut self, visibility: f32) -> Self {
        self.visibility = Some(visibility);
        self
    }

    /// Attach a depth value.
    #[must_use]
    pub const fn with_z(mut self, z: f32) -> Self {
        self.z = Some(z);
        self
    }

    /// Whether both coordinates are finite numbers.
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// The landmark's 2-D position.
    #[must_use]
    pub const fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// All landmarks of one detected person at one instant.
///
/// A frame always has [`NUM_LANDMARKS`] slots; occluded or undetected landmarks
/// are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Option<Landmark>>", into = "Vec<Option<Landmark>>")]
pub struct Frame {
    landmarks: [Option<Landmark>; NUM_LANDMARKS],
}

impl Default for Frame {
    fn default() -> Self {
        Self::empty()
    }
}

impl Frame {
    /// A frame with every landmark absent.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            landmarks: [None; NUM_LANDMARKS],
        }
    }

    /// Build a frame from up to [`NUM_LANDMARKS`] entries.
    ///
    /// Trailing slots not covered by `landmarks` are absent, and so are entries
    /// whose `x` or `y` is not finite.
    ///
    /// # Errors
    ///
    /// Returns [`CoachError::InvalidFrame`] if more than [`NUM_LANDMARKS`] entries are given.
    pub fn new<I>(landmarks: I) -> Result<Self>
    where
        I: IntoIterator<Item = Option<Landmark>>,
    {
        let mut frame = Self::empty();
        for (i, landmark) in landmarks.into_iter().enumerate() {
            if i >= NUM_LANDMARKS {
                return Err(CoachError::InvalidFrame(format!(
                    "expected at most {NUM_LANDMARKS} landmarks, got more"
                )));
            }
            frame.landmarks[i] = landmark.filter(Landmark::is_finite);
        }
        Ok(frame)
    }

    /// Build a frame from a `(K, C)` keypoint array.
    ///
    /// Column layouts:
    /// - `C = 2`: `x, y`
    /// - `C = 3`: `x, y, visibility`
    /// - `C = 4`: `x, y, z, visibility`
    ///
    /// Rows with a non-finite `x` or `y` are treated as absent.
    ///
    /// # Errors
    ///
    /// Returns [`CoachError::InvalidFrame`] for more than [`NUM_LANDMARKS`] rows or
    /// an unsupported column count.
    pub fn from_array(data: ArrayView2<'_, f32>) -> Result<Self> {
        let (rows, cols) = data.dim();
        if rows > NUM_LANDMARKS {
            return Err(CoachError::InvalidFrame(format!(
                "expected at most {NUM_LANDMARKS} rows, got {rows}"
            )));
        }
        if !(2..=4).contains(&cols) {
            return Err(CoachError::InvalidFrame(format!(
                "expected 2, 3 or 4 columns, got {cols}"
            )));
        }

        let mut frame = Self::empty();
        for (i, row) in data.rows().into_iter().enumerate() {
            let (x, y) = (row[0], row[1]);
            if !x.is_finite() || !y.is_finite() {
                continue;
            }
            let landmark = Landmark::new(x, y);
            frame.landmarks[i] = Some(match cols {
                3 => landmark.with_visibility(row[2]),
                4 => landmark.with_z(row[2]).with_visibility(row[3]),
                _ => landmark,
            });
        }
        Ok(frame)
    }

    /// Return a copy of the frame with `landmark` placed at `index`.
    ///
    /// Out-of-range indices are ignored.
    #[must_use]
    pub fn with(mut self, index: usize, landmark: Landmark) -> Self {
        if let Some(slot) = self.landmarks.get_mut(index) {
            *slot = Some(landmark);
        }
        self
    }

    /// Return a copy of the frame with the landmark at `index` removed.
    #[must_use]
    pub fn without(mut self, index: usize) -> Self {
        if let Some(slot) = self.landmarks.get_mut(index) {
            *slot = None;
        }
        self
    }

    /// Drop landmarks whose visibility is known and below `min_visibility`.
    ///
    /// Landmarks without a visibility score are kept.
    #[must_use]
    pub fn retain_visible(&self, min_visibility: f32) -> Self {
        let mut frame = self.clone();
        for slot in &mut frame.landmarks {
            if (*slot)
                .and_then(|lm| lm.visibility)
                .is_some_and(|v| v < min_visibility)
            {
                *slot = None;
            }
        }
        frame
    }

    /// Landmark at `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Landmark> {
        self.landmarks.get(index).and_then(Option::as_ref)
    }

    /// 2-D position of the landmark at `index`, if present.
    #[must_use]
    pub fn point(&self, index: usize) -> Option<Point> {
        self.get(index).map(Landmark::point)
    }

    /// Whether the landmark at `index` is present.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    /// Number of present landmarks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.landmarks.iter().flatten().count()
    }

    /// Whether no landmark is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over `(index, landmark)` for present landmarks.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Landmark)> {
        self.landmarks
            .iter()
            .enumerate()
            .filter_map(|(i, lm)| lm.as_ref().map(|lm| (i, lm)))
    }
}

impl TryFrom<Vec<Option<Landmark>>> for Frame {
    type Error = CoachError;

    fn try_from(landmarks: Vec<Option<Landmark>>) -> Result<Self> {
        Self::new(landmarks)
    }
}

impl From<Frame> for Vec<Option<Landmark>> {
    fn from(frame: Frame) -> Self {
        frame.landmarks.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array2, array};

    #[test]
    fn test_new_pads_missing_slots() {
        let frame = Frame::new(vec![Some(Landmark::new(0.5, 0.1)), None]).unwrap();
        assert!(frame.contains(NOSE));
        assert!(!frame.contains(1));
        assert!(!frame.contains(RIGHT_FOOT_INDEX));
        assert_eq!(frame.len(), 1);
    }

    #[test]
    fn test_new_rejects_too_many() {
        let landmarks = vec![Some(Landmark::new(0.0, 0.0)); NUM_LANDMARKS + 1];
        assert!(matches!(Frame::new(landmarks), Err(CoachError::InvalidFrame(_))));
    }

    #[test]
    fn test_new_drops_non_finite_positions() {
        let frame = Frame::new(vec![
            Some(Landmark::new(f32::INFINITY, 0.1)),
            Some(Landmark::new(0.2, f32::NAN)),
            Some(Landmark::new(0.3, 0.3)),
        ])
        .unwrap();
        assert!(!frame.contains(NOSE));
        assert!(!frame.contains(1));
        assert!(frame.contains(2));
    }

    #[test]
    fn test_json_overflowing_coordinate_is_absent() {
        // 1e39 does not fit in an f32 and parses as infinity
        let frame: Frame = serde_json::from_str(r#"[{"x":1e39,"y":0.75},{"x":0.4,"y":0.2}]"#).unwrap();
        assert!(!frame.contains(NOSE));
        assert!(frame.contains(1));
    }

    #[test]
    fn test_get_out_of_range() {
        let frame = Frame::empty().with(40, Landmark::new(0.1, 0.1));
        assert!(frame.is_empty());
        assert!(frame.get(40).is_none());
    }

    #[test]
    fn test_from_array_mediapipe_layout() {
        let data = array![[0.5, 0.2, -0.1, 0.9], [f32::NAN, 0.3, 0.0, 0.1]];
        let frame = Frame::from_array(data.view()).unwrap();
        let nose = frame.get(NOSE).unwrap();
        assert_eq!(nose.z, Some(-0.1));
        assert_eq!(nose.visibility, Some(0.9));
        assert!(!frame.contains(1));
    }

    #[test]
    fn test_from_array_keypoint_layout() {
        let data = array![[0.5, 0.2, 0.7]];
        let frame = Frame::from_array(data.view()).unwrap();
        let nose = frame.get(NOSE).unwrap();
        assert_eq!(nose.z, None);
        assert_eq!(nose.visibility, Some(0.7));
    }

    #[test]
    fn test_from_array_rejects_bad_shapes() {
        let too_many = Array2::<f32>::zeros((NUM_LANDMARKS + 1, 2));
        assert!(Frame::from_array(too_many.view()).is_err());

        let one_col = Array2::<f32>::zeros((3, 1));
        assert!(Frame::from_array(one_col.view()).is_err());
    }

    #[test]
    fn test_retain_visible() {
        let frame = Frame::empty()
            .with(LEFT_HIP, Landmark::new(0.4, 0.5).with_visibility(0.2))
            .with(RIGHT_HIP, Landmark::new(0.6, 0.5).with_visibility(0.9))
            .with(NOSE, Landmark::new(0.5, 0.1));

        let filtered = frame.retain_visible(0.5);
        assert!(!filtered.contains(LEFT_HIP));
        assert!(filtered.contains(RIGHT_HIP));
        assert!(filtered.contains(NOSE));
        // Source frame untouched
        assert!(frame.contains(LEFT_HIP));
    }

    #[test]
    fn test_json_layout() {
        let json = r#"[{"x":0.5,"y":0.1,"visibility":0.99},null,{"x":0.4,"y":0.2,"z":-0.3}]"#;
        let frame: Frame = serde_json::from_str(json).unwrap();
        assert_eq!(frame.get(NOSE).unwrap().visibility, Some(0.99));
        assert!(!frame.contains(1));
        assert_eq!(frame.get(2).unwrap().z, Some(-0.3));

        let out = serde_json::to_value(&frame).unwrap();
        assert_eq!(out.as_array().unwrap().len(), NUM_LANDMARKS);
        assert!(out[1].is_null());
    }

    #[test]
    fn test_side_indices() {
        assert_eq!(Side::Left.leg(), (23, 25, 27));
        assert_eq!(Side::Right.arm(), (12, 14, 16));
    }
}
