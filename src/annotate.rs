// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Skeleton overlay painting for offline review of evaluated frames.

use std::path::{Path, PathBuf};

use image::{DynamicImage, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut};

use crate::error::Result;
use crate::landmark::{Frame, Landmark};
use crate::visualizer::{Color, Highlights, SKELETON};

/// Canvas width used when no background image is supplied.
pub const DEFAULT_CANVAS_WIDTH: u32 = 640;
/// Canvas height used when no background image is supplied.
pub const DEFAULT_CANVAS_HEIGHT: u32 = 480;

/// Find the next available run directory (evaluate, evaluate2, evaluate3, etc.)
pub fn find_next_run_dir(base: &str, prefix: &str) -> PathBuf {
    let base_path = Path::new(base);

    let first = base_path.join(prefix);
    if !first.exists() {
        return first;
    }

    (2..)
        .map(|i| base_path.join(format!("{prefix}{i}")))
        .find(|p| !p.exists())
        .unwrap_or(first)
}

/// Black canvas of the given size.
#[must_use]
pub fn blank_canvas(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(
        width,
        height,
        Rgb(Color::BLACK.rgb()),
    ))
}

/// Load a background image.
///
/// # Errors
///
/// Returns [`CoachError::ImageError`](crate::CoachError::ImageError) if the file
/// cannot be opened or decoded.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<DynamicImage> {
    Ok(image::open(path)?)
}

/// Draw a line `width` pixels thick by stacking offsets along the normal.
fn draw_thick_line(
    img: &mut RgbImage,
    start: (f32, f32),
    end: (f32, f32),
    width: u32,
    color: Rgb<u8>,
) {
    let (dx, dy) = (end.0 - start.0, end.1 - start.1);
    let length = dx.hypot(dy);
    if length == 0.0 {
        return;
    }
    let (nx, ny) = (-dy / length, dx / length);
    let half = (width as f32 - 1.0) / 2.0;

    for t in 0..width {
        let offset = t as f32 - half;
        draw_line_segment_mut(
            img,
            (start.0 + nx * offset, start.1 + ny * offset),
            (end.0 + nx * offset, end.1 + ny * offset),
            color,
        );
    }
}

/// Paint the frame's skeleton over `image`, styled by `highlights`.
///
/// Bones with a missing endpoint are skipped. Landmark coordinates are scaled from
/// normalized space to the image size.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn annotate_frame(image: &DynamicImage, frame: &Frame, highlights: &Highlights) -> DynamicImage {
    let mut img = image.to_rgb8();
    let (width, height) = img.dimensions();
    let to_pixels = |lm: &Landmark| (lm.x * width as f32, lm.y * height as f32);

    for [a, b] in SKELETON {
        let (Some(p1), Some(p2)) = (frame.get(a), frame.get(b)) else {
            continue;
        };
        let style = highlights.connection_style(a, b);
        draw_thick_line(
            &mut img,
            to_pixels(p1),
            to_pixels(p2),
            style.width,
            Rgb(style.color.rgb()),
        );
    }

    for (index, landmark) in frame.iter() {
        let style = highlights.landmark_style(index);
        let (x, y) = to_pixels(landmark);
        draw_filled_circle_mut(
            &mut img,
            (x.round() as i32, y.round() as i32),
            style.radius as i32,
            Rgb(style.color.rgb()),
        );
    }

    DynamicImage::ImageRgb8(img)
}

/// Save an annotated frame as `frame_NNNNN.png` inside `dir`.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the image cannot be encoded.
pub fn save_annotated(dir: &Path, index: usize, image: &DynamicImage) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(format!("frame_{index:05}.png"));
    image.save(&path)?;
    Ok(path)
}
