//! Colors, blend operations and palettes
//!
//! Colors are immutable `Copy` values; blending always produces a new color.
//! Palettes are guaranteed non-empty at construction so index arithmetic can
//! clamp instead of failing in the middle of a paint job.

use std::fmt;
use std::str::FromStr;

use num_traits::clamp;
use serde::{Deserialize, Serialize};

use crate::io::error::{PaintError, Result, degenerate, invalid_argument};

/// Three-channel 8-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Pure black
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Pure white
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Pure red
    pub const RED: Self = Self::new(255, 0, 0);
    /// Pure green
    pub const GREEN: Self = Self::new(0, 255, 0);
    /// Pure blue
    pub const BLUE: Self = Self::new(0, 0, 255);

    /// Create a color from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as an array
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Linear interpolation toward `other` by `amount` (clamped to `[0, 1]`)
    #[must_use]
    pub fn lerp(self, other: Self, amount: f32) -> Self {
        let t = clamp(amount, 0.0, 1.0);
        let mix = |from: u8, to: u8| -> u8 {
            let value = (f32::from(to) - f32::from(from)).mul_add(t, f32::from(from));
            clamp(value.round(), 0.0, 255.0) as u8
        };
        Self::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
        )
    }

    /// Blend toward white by `amount`
    ///
    /// Repeated lightening converges to white and stays there.
    #[must_use]
    pub fn lighten(self, amount: f32) -> Self {
        self.lerp(Self::WHITE, amount)
    }

    /// Blend toward black by `amount`
    #[must_use]
    pub fn darken(self, amount: f32) -> Self {
        self.lerp(Self::BLACK, amount)
    }

    /// Perceived brightness in `[0, 1]` (Rec. 601 luma)
    pub fn luminance(self) -> f32 {
        let luma = 0.114_f32.mul_add(
            f32::from(self.b),
            0.299_f32.mul_add(f32::from(self.r), 0.587 * f32::from(self.g)),
        );
        luma / 255.0
    }

    /// RGBA pixel with full opacity
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = PaintError;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid_argument(
                "color",
                &format!("expected #rrggbb, got '{s}'"),
            ));
        }
        let channel = |range: std::ops::Range<usize>| -> Result<u8> {
            hex.get(range)
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
                .ok_or_else(|| invalid_argument("color", &format!("invalid hex digits in '{s}'")))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl TryFrom<String> for Color {
    type Error = PaintError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// Non-empty ordered list of candidate colors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Color>", into = "Vec<Color>")]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Create a palette
    ///
    /// # Errors
    ///
    /// Returns `Degenerate` if `colors` is empty
    pub fn new(colors: Vec<Color>) -> Result<Self> {
        if colors.is_empty() {
            return Err(degenerate(&"palette must contain at least one color"));
        }
        Ok(Self { colors })
    }

    /// Palette holding a single color
    pub fn single(color: Color) -> Self {
        Self {
            colors: vec![color],
        }
    }

    /// Number of colors (always at least one)
    pub const fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; kept for API symmetry with collections
    pub const fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Colors in palette order
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Clamp an index into `[0, len - 1]`
    pub fn clamp_index(&self, index: usize) -> usize {
        index.min(self.colors.len().saturating_sub(1))
    }

    /// Color at `index`, clamped into range
    pub fn get_clamped(&self, index: usize) -> Color {
        self.colors
            .get(self.clamp_index(index))
            .copied()
            .unwrap_or(Color::BLACK)
    }

    /// First color
    pub fn first(&self) -> Color {
        self.get_clamped(0)
    }

    /// Last color
    pub fn last(&self) -> Color {
        self.get_clamped(usize::MAX)
    }

    /// Palette index for a fraction in `[0, 1]`
    ///
    /// Computes `floor(t * len)` clamped to the last index, which is
    /// monotonic non-decreasing in `t`. Non-finite fractions map to 0.
    pub fn index_for_fraction(&self, fraction: f64) -> usize {
        if !fraction.is_finite() {
            return 0;
        }
        let t = clamp(fraction, 0.0, 1.0);
        self.clamp_index((t * self.colors.len() as f64).floor() as usize)
    }
}

impl TryFrom<Vec<Color>> for Palette {
    type Error = PaintError;

    fn try_from(colors: Vec<Color>) -> Result<Self> {
        Self::new(colors)
    }
}

impl From<Palette> for Vec<Color> {
    fn from(palette: Palette) -> Self {
        palette.colors
    }
}
