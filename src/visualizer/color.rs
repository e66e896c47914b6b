// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use crate::results::Severity;

/// Color type for visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    /// Red color.
    pub const RED: Color = Color(255, 0, 0);
    /// Orange color.
    pub const ORANGE: Color = Color(255, 165, 0);
    /// Yellow color.
    pub const YELLOW: Color = Color(255, 255, 0);
    /// Green color.
    pub const GREEN: Color = Color(0, 128, 0);
    /// Blue color.
    pub const BLUE: Color = Color(0, 0, 255);
    /// Black color.
    pub const BLACK: Color = Color(0, 0, 0);

    /// Bone color when no issue references it.
    pub const OK_CONNECTION: Color = Self::GREEN;
    /// Joint color when no issue references it.
    pub const OK_LANDMARK: Color = Self::BLUE;

    /// Create a new color from RGB values.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b)
    }

    /// Highlight color for an issue of the given severity.
    pub const fn from_severity(severity: Severity) -> Self {
        match severity {
            Severity::High => Self::RED,
            Severity::Medium => Self::ORANGE,
            Severity::Low => Self::YELLOW,
        }
    }

    /// Color as an `[r, g, b]` array.
    pub const fn rgb(self) -> [u8; 3] {
        [self.0, self.1, self.2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_colors() {
        assert_eq!(Color::from_severity(Severity::High), Color::RED);
        assert_eq!(Color::from_severity(Severity::Medium), Color::ORANGE);
        assert_eq!(Color::from_severity(Severity::Low), Color::YELLOW);
    }

    #[test]
    fn test_rgb() {
        assert_eq!(Color::new(1, 2, 3).rgb(), [1, 2, 3]);
    }
}
