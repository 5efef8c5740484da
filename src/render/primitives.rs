use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

/// 8-bit RGB triple, the color shape the structure viewer consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub fn from_rgb8(rgb: Rgb8) -> Self {
        Self::rgb(
            f64::from(rgb.r) / 255.0,
            f64::from(rgb.g) / 255.0,
            f64::from(rgb.b) / 255.0,
        )
    }

    #[must_use]
    pub fn to_rgb8(self) -> Rgb8 {
        Rgb8 {
            r: channel_to_u8(self.red),
            g: channel_to_u8(self.green),
            b: channel_to_u8(self.blue),
        }
    }

    /// Formats as `#rrggbb`, dropping alpha.
    #[must_use]
    pub fn to_hex(self) -> String {
        let rgb = self.to_rgb8();
        format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
    }

    /// Channel-wise linear interpolation; `t` is clamped to `[0, 1]`.
    #[must_use]
    pub fn lerp(self, target: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            red: self.red + (target.red - self.red) * t,
            green: self.green + (target.green - self.green) * t,
            blue: self.blue + (target.blue - self.blue) * t,
            alpha: self.alpha + (target.alpha - self.alpha) * t,
        }
    }

    pub fn validate(self) -> PlotResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(PlotError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

impl FromStr for Color {
    type Err = PlotError;

    /// Parses `#rrggbb`, `#rgb` and `rgb(r,g,b)` with 0..=255 components.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| invalid_color(input));
        }
        if let Some(body) = trimmed
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            let components: Vec<u8> = body
                .split(',')
                .map(|part| part.trim().parse::<u8>())
                .collect::<Result<_, _>>()
                .map_err(|_| invalid_color(input))?;
            if let [r, g, b] = components[..] {
                return Ok(Self::from_rgb8(Rgb8 { r, g, b }));
            }
        }
        Err(invalid_color(input))
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return None;
    }
    let component = |digits: &str| u8::from_str_radix(digits, 16).ok();
    let rgb = match hex.len() {
        6 => Rgb8 {
            r: component(&hex[0..2])?,
            g: component(&hex[2..4])?,
            b: component(&hex[4..6])?,
        },
        3 => {
            let short = |digit: &str| component(digit).map(|value| value * 17);
            Rgb8 {
                r: short(&hex[0..1])?,
                g: short(&hex[1..2])?,
                b: short(&hex[2..3])?,
            }
        }
        _ => return None,
    };
    Some(Color::from_rgb8(rgb))
}

fn invalid_color(input: &str) -> PlotError {
    PlotError::InvalidData(format!("unrecognized color `{input}`"))
}

fn channel_to_u8(channel: f64) -> u8 {
    // Clamped into 0..=255 before the cast.
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Filled circle in plot pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirclePrimitive {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub opacity: f64,
    pub fill_color: Color,
}

impl CirclePrimitive {
    #[must_use]
    pub const fn new(cx: f64, cy: f64, radius: f64, opacity: f64, fill_color: Color) -> Self {
        Self {
            cx,
            cy,
            radius,
            opacity,
            fill_color,
        }
    }

    pub fn validate(self) -> PlotResult<()> {
        if !self.cx.is_finite() || !self.cy.is_finite() {
            return Err(PlotError::InvalidData(
                "circle center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(PlotError::InvalidData(
                "circle radius must be finite and >= 0".to_owned(),
            ));
        }
        if !self.opacity.is_finite() || !(0.0..=1.0).contains(&self.opacity) {
            return Err(PlotError::InvalidData(
                "circle opacity must be finite and in [0, 1]".to_owned(),
            ));
        }
        self.fill_color.validate()
    }
}

/// Axis-aligned rectangle in plot pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_color: Color,
    pub border_width: f64,
    pub border_color: Color,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill_color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill_color,
            border_width: 0.0,
            border_color: fill_color,
        }
    }

    #[must_use]
    pub const fn with_border(mut self, border_width: f64, border_color: Color) -> Self {
        self.border_width = border_width;
        self.border_color = border_color;
        self
    }

    pub fn validate(self) -> PlotResult<()> {
        if !self.x.is_finite()
            || !self.y.is_finite()
            || !self.width.is_finite()
            || !self.height.is_finite()
        {
            return Err(PlotError::InvalidData(
                "rect geometry must be finite".to_owned(),
            ));
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(PlotError::InvalidData(
                "rect size must be >= 0".to_owned(),
            ));
        }
        if !self.border_width.is_finite() || self.border_width < 0.0 {
            return Err(PlotError::InvalidData(
                "rect border width must be finite and >= 0".to_owned(),
            ));
        }
        self.fill_color.validate()?;
        self.border_color.validate()
    }
}
