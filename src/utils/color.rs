use nalgebra::Vector3;
use snafu::{Snafu, ensure};

#[derive(Debug, Snafu)]
#[snafu(context(suffix(Err)))]
pub enum ColorError {
    #[snafu(display("Color \"{input}\" has to start with a '#'"))]
    MissingHash { input: String },

    #[snafu(display("Color \"{input}\" needs 3 or 6 hex digits"))]
    InvalidLength { input: String },

    #[snafu(display("Color \"{input}\" contains a non-hex digit"))]
    InvalidDigit { input: String },
}

/// Linear RGB color. Components are not clamped so easing can work on them freely.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Color { r, g, b }
    }

    /// Builds a linear color from 8-bit sRGB components.
    pub fn from_srgb8(r: u8, g: u8, b: u8) -> Self {
        Color {
            r: srgb_to_linear(r as f32 / 255.0),
            g: srgb_to_linear(g as f32 / 255.0),
            b: srgb_to_linear(b as f32 / 255.0),
        }
    }

    /// Parses `#rgb` or `#rrggbb` as sRGB.
    pub fn from_hex(input: &str) -> Result<Self, ColorError> {
        let digits = input
            .strip_prefix('#')
            .ok_or_else(|| MissingHashErr { input }.build())?;
        ensure!(
            digits.chars().all(|c| c.is_ascii_hexdigit()),
            InvalidDigitErr { input }
        );

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| InvalidDigitErr { input }.build());

        match digits.len() {
            3 => {
                let expand = |i: usize| channel(&digits[i..i + 1].repeat(2));
                Ok(Self::from_srgb8(expand(0)?, expand(1)?, expand(2)?))
            }
            6 => Ok(Self::from_srgb8(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            _ => InvalidLengthErr { input }.fail(),
        }
    }

    pub fn to_srgb8(self) -> [u8; 3] {
        let encode = |c: f32| (linear_to_srgb(c.clamp(0.0, 1.0)) * 255.0).round() as u8;
        [encode(self.r), encode(self.g), encode(self.b)]
    }

    pub fn distance(&self, other: &Color) -> f32 {
        (self.as_vector() - other.as_vector()).norm()
    }

    pub fn as_vector(&self) -> Vector3<f32> {
        Vector3::new(self.r, self.g, self.b)
    }
}

impl From<Vector3<f32>> for Color {
    fn from(v: Vector3<f32>) -> Self {
        Color::new(v.x, v.y, v.z)
    }
}

impl From<Color> for Vector3<f32> {
    fn from(c: Color) -> Self {
        c.as_vector()
    }
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(c: f32) -> f32 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}
