// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

/// Body skeleton drawn by the overlay (pairs of landmark indices)
/// Covers the torso, arms and legs; the face is drawn as joints only
pub const SKELETON: [[usize; 2]; 14] = [
    [11, 12], // left shoulder to right shoulder
    [12, 24], // right shoulder to right hip
    [24, 23], // right hip to left hip
    [23, 11], // left hip to left shoulder
    [12, 14], // right shoulder to right elbow
    [14, 16], // right elbow to right wrist
    [11, 13], // left shoulder to left elbow
    [13, 15], // left elbow to left wrist
    [24, 26], // right hip to right knee
    [26, 28], // right knee to right ankle
    [28, 32], // right ankle to right foot index
    [23, 25], // left hip to left knee
    [25, 27], // left knee to left ankle
    [27, 31], // left ankle to left foot index
];
