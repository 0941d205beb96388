//! Color types and the usage-percentage color table.
//!
//! Bars are colored by how close they are to the series maximum, using an
//! ordered threshold table that mimics a Tailwind "usage" palette: near-max
//! bars redden, mid bars go yellow, low bars stay green.

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(C)]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Tailwind red-500.
    pub const RED_500: Self = Self::rgb(239, 68, 68);
    /// Tailwind red-400.
    pub const RED_400: Self = Self::rgb(248, 113, 113);
    /// Tailwind red-300.
    pub const RED_300: Self = Self::rgb(252, 165, 165);
    /// Tailwind yellow-500.
    pub const YELLOW_500: Self = Self::rgb(234, 179, 8);
    /// Tailwind yellow-400.
    pub const YELLOW_400: Self = Self::rgb(250, 204, 21);
    /// Tailwind yellow-300.
    pub const YELLOW_300: Self = Self::rgb(253, 224, 71);
    /// Tailwind lime-400.
    pub const LIME_400: Self = Self::rgb(163, 230, 53);
    /// Tailwind lime-500.
    pub const LIME_500: Self = Self::rgb(132, 204, 22);
    /// Tailwind green-500.
    pub const GREEN_500: Self = Self::rgb(34, 197, 94);
    /// Tailwind green-400.
    pub const GREEN_400: Self = Self::rgb(74, 222, 128);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create from array representation.
    #[must_use]
    pub const fn from_array(arr: [u8; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Whether the color is fully transparent.
    #[must_use]
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }
}

/// One row of a [`UsagePalette`]: percentages at or above `threshold` get `color`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold {
    /// Lower bound (inclusive) in percent.
    pub threshold: f64,
    /// Color for this bucket.
    pub color: Rgba,
}

impl Threshold {
    /// Create a threshold row.
    #[must_use]
    pub const fn new(threshold: f64, color: Rgba) -> Self {
        Self { threshold, color }
    }
}

/// Ordered percentage → color lookup table.
///
/// Rows are scanned from the highest threshold down; the first row whose
/// threshold the percentage meets or exceeds wins. Percentages below every
/// threshold (including NaN) fall back to the default color.
#[derive(Debug, Clone, PartialEq)]
pub struct UsagePalette {
    rows: Vec<Threshold>,
    fallback: Rgba,
}

impl Default for UsagePalette {
    fn default() -> Self {
        Self::tailwind()
    }
}

impl UsagePalette {
    /// The red/yellow/lime/green usage palette in ten-point buckets.
    #[must_use]
    pub fn tailwind() -> Self {
        Self {
            rows: vec![
                Threshold::new(90.0, Rgba::RED_500),
                Threshold::new(80.0, Rgba::RED_400),
                Threshold::new(70.0, Rgba::RED_300),
                Threshold::new(60.0, Rgba::YELLOW_500),
                Threshold::new(50.0, Rgba::YELLOW_400),
                Threshold::new(40.0, Rgba::YELLOW_300),
                Threshold::new(30.0, Rgba::LIME_400),
                Threshold::new(20.0, Rgba::LIME_500),
                Threshold::new(10.0, Rgba::GREEN_500),
                Threshold::new(0.0, Rgba::GREEN_400),
            ],
            fallback: Rgba::GREEN_400,
        }
    }

    /// Look up the color for a percentage (0-100).
    #[must_use]
    pub fn color_for(&self, pct: f64) -> Rgba {
        self.rows
            .iter()
            .find(|row| pct >= row.threshold)
            .map_or(self.fallback, |row| row.color)
    }

    /// Color of the highest bucket (what a bar at 100% gets).
    #[must_use]
    pub fn top_color(&self) -> Rgba {
        self.rows.first().map_or(self.fallback, |row| row.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_to_array_from_array() {
        let color = Rgba::new(10, 20, 30, 40);
        let arr = color.to_array();
        assert_eq!(arr, [10, 20, 30, 40]);
        assert_eq!(Rgba::from_array(arr), color);
    }

    #[test]
    fn test_rgba_transparent() {
        assert_eq!(Rgba::TRANSPARENT, Rgba::default());
        assert!(Rgba::TRANSPARENT.is_transparent());
        assert!(!Rgba::RED_500.is_transparent());
    }

    #[test]
    fn test_palette_bucket_boundaries() {
        let palette = UsagePalette::tailwind();
        assert_eq!(palette.color_for(100.0), Rgba::RED_500);
        assert_eq!(palette.color_for(90.0), Rgba::RED_500);
        assert_eq!(palette.color_for(89.9), Rgba::RED_400);
        assert_eq!(palette.color_for(65.0), Rgba::YELLOW_500);
        assert_eq!(palette.color_for(45.0), Rgba::YELLOW_300);
        assert_eq!(palette.color_for(20.0), Rgba::LIME_500);
        assert_eq!(palette.color_for(10.0), Rgba::GREEN_500);
        assert_eq!(palette.color_for(0.0), Rgba::GREEN_400);
    }

    #[test]
    fn test_palette_below_lowest_uses_fallback() {
        let palette = UsagePalette::tailwind();
        assert_eq!(palette.color_for(-5.0), Rgba::GREEN_400);
        assert_eq!(palette.color_for(f64::NAN), Rgba::GREEN_400);
    }

    #[test]
    fn test_palette_top_color() {
        assert_eq!(UsagePalette::tailwind().top_color(), Rgba::RED_500);
    }

    #[test]
    fn test_tailwind_rows_descend() {
        let palette = UsagePalette::tailwind();
        assert!(palette
            .rows
            .windows(2)
            .all(|pair| pair[0].threshold > pair[1].threshold));
    }
}
