//! Color values in `rgb()`, `hls()` and hex notation.

use std::fmt;
use std::fmt::Write;
use std::str::FromStr;

use super::ToCss;
use crate::error::{Error, Result};

/// Notation a [`ColorValue`] is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorKind {
    #[default]
    Rgb,
    Hls,
    Hex,
}

impl ColorKind {
    /// Returns the tag for this kind.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorKind::Rgb => "rgb",
            ColorKind::Hls => "hls",
            ColorKind::Hex => "hex",
        }
    }
}

impl FromStr for ColorKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "rgb" => Ok(ColorKind::Rgb),
            "hls" => Ok(ColorKind::Hls),
            "hex" => Ok(ColorKind::Hex),
            _ => Err(Error::InvalidColorKind(s.to_string())),
        }
    }
}

/// One channel of a color: a number, or hex digits written out verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Component {
    Int(u16),
    Hex(String),
}

impl Component {
    /// Channel value scaled to `0.0..=1.0`, or `None` unless the channel is
    /// a number up to 255 or exactly two hex digits.
    fn unit(&self) -> Option<f64> {
        let raw = match self {
            Component::Int(v) => u8::try_from(*v).ok()?,
            Component::Hex(digits) => {
                if digits.len() != 2 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
                    return None;
                }
                u8::from_str_radix(digits, 16).ok()?
            }
        };
        Some(f64::from(raw) / 255.0)
    }
}

impl From<u16> for Component {
    fn from(value: u16) -> Self {
        Component::Int(value)
    }
}

impl From<&str> for Component {
    fn from(value: &str) -> Self {
        Component::Hex(value.to_string())
    }
}

impl From<String> for Component {
    fn from(value: String) -> Self {
        Component::Hex(value)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Int(v) => write!(f, "{v}"),
            Component::Hex(digits) => f.write_str(digits),
        }
    }
}

impl ToCss for Component {
    fn to_css(&self, buf: &mut String) {
        let _ = write!(buf, "{self}");
    }
}

/// A color with three channels and the notation it renders in.
///
/// Channels are written as given. In particular hex colors do not convert
/// numbers to hex digits, so callers pass the digit pairs themselves:
///
/// ```
/// use darwcss::{ColorValue, render};
///
/// assert_eq!(render(&ColorValue::hex("fa", "ff", "ca")), "#faffca");
/// assert_eq!(render(&ColorValue::rgb(255, 0, 0)), "rgb(255, 0, 0)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColorValue {
    pub red: Component,
    pub green: Component,
    pub blue: Component,
    pub kind: ColorKind,
}

impl ColorValue {
    pub fn new(
        red: impl Into<Component>,
        green: impl Into<Component>,
        blue: impl Into<Component>,
        kind: ColorKind,
    ) -> Self {
        Self {
            red: red.into(),
            green: green.into(),
            blue: blue.into(),
            kind,
        }
    }

    pub fn rgb(
        red: impl Into<Component>,
        green: impl Into<Component>,
        blue: impl Into<Component>,
    ) -> Self {
        Self::new(red, green, blue, ColorKind::Rgb)
    }

    /// Hue, lightness and saturation; the last two render as percentages.
    pub fn hls(
        hue: impl Into<Component>,
        lightness: impl Into<Component>,
        saturation: impl Into<Component>,
    ) -> Self {
        Self::new(hue, lightness, saturation, ColorKind::Hls)
    }

    pub fn hex(
        red: impl Into<Component>,
        green: impl Into<Component>,
        blue: impl Into<Component>,
    ) -> Self {
        Self::new(red, green, blue, ColorKind::Hex)
    }

    /// Build a color from a textual kind tag (`"rgb"`, `"hls"` or `"hex"`).
    pub fn with_kind_tag(
        red: impl Into<Component>,
        green: impl Into<Component>,
        blue: impl Into<Component>,
        tag: &str,
    ) -> Result<Self> {
        Ok(Self::new(red, green, blue, tag.parse()?))
    }

    /// Convert an RGB color to hue, lightness and saturation.
    ///
    /// Only RGB colors with numeric (or hex-digit) channels can be converted;
    /// anything else yields [`Error::UnsupportedConversion`].
    pub fn to_hls(&self) -> Result<Hls> {
        let unsupported = || Error::UnsupportedConversion(self.kind);
        if self.kind != ColorKind::Rgb {
            return Err(unsupported());
        }
        let r = self.red.unit().ok_or_else(unsupported)?;
        let g = self.green.unit().ok_or_else(unsupported)?;
        let b = self.blue.unit().ok_or_else(unsupported)?;
        Ok(Hls::from_rgb(r, g, b))
    }
}

impl ToCss for ColorValue {
    fn to_css(&self, buf: &mut String) {
        let (r, g, b) = (&self.red, &self.green, &self.blue);
        let _ = match self.kind {
            ColorKind::Rgb => write!(buf, "rgb({r}, {g}, {b})"),
            ColorKind::Hls => write!(buf, "hls({r}, {g}%, {b}%)"),
            ColorKind::Hex => write!(buf, "#{r}{g}{b}"),
        };
    }
}

super::impl_concat!(ColorValue);

/// Hue, lightness and saturation, each in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hls {
    pub hue: f64,
    pub lightness: f64,
    pub saturation: f64,
}

impl Hls {
    /// Standard RGB to HLS conversion on unit-scaled channels.
    pub fn from_rgb(r: f64, g: f64, b: f64) -> Self {
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let sum = max + min;
        let range = max - min;
        let lightness = sum / 2.0;

        if range == 0.0 {
            return Hls {
                hue: 0.0,
                lightness,
                saturation: 0.0,
            };
        }

        let saturation = if lightness <= 0.5 {
            range / sum
        } else {
            range / (2.0 - sum)
        };

        let rc = (max - r) / range;
        let gc = (max - g) / range;
        let bc = (max - b) / range;
        let hue = if r == max {
            bc - gc
        } else if g == max {
            2.0 + rc - bc
        } else {
            4.0 + gc - rc
        };

        Hls {
            hue: (hue / 6.0).rem_euclid(1.0),
            lightness,
            saturation,
        }
    }

    /// An `hls()` color with the hue in degrees and the rest in percent.
    pub fn to_color(&self) -> ColorValue {
        let scale = |v: f64, max: f64| (v * max).round().clamp(0.0, max) as u16;
        ColorValue::hls(
            scale(self.hue, 360.0),
            scale(self.lightness, 100.0),
            scale(self.saturation, 100.0),
        )
    }
}
