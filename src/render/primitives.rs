use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ChartError, ChartResult};
use crate::text::TextStyle;

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
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

    /// Builds a color from 8-bit channels and a normalized alpha.
    #[must_use]
    pub fn rgba8(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self::rgba(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
            alpha,
        )
    }

    /// Parses `#rgb` or `#rrggbb`.
    pub fn from_hex(hex: &str) -> ChartResult<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|ch| [ch, ch]).collect(),
            6 => digits.to_owned(),
            _ => {
                return Err(ChartError::InvalidData(format!(
                    "color `{hex}` must be #rgb or #rrggbb"
                )));
            }
        };
        let channel = |range: std::ops::Range<usize>| {
            expanded
                .get(range)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| ChartError::InvalidData(format!("color `{hex}` is not valid hex")))
        };
        Ok(Self::rgba8(channel(0..2)?, channel(2..4)?, channel(4..6)?, 1.0))
    }

    /// CSS serialization: `#rrggbb` when opaque, `rgba(r,g,b,a)` otherwise.
    #[must_use]
    pub fn to_css(self) -> String {
        let [red, green, blue] = [self.red, self.green, self.blue].map(to_channel_u8);
        if self.alpha >= 1.0 {
            format!("#{red:02x}{green:02x}{blue:02x}")
        } else {
            let mut buffer = ryu_js::Buffer::new();
            let alpha = buffer.format(self.alpha);
            format!("rgba({red},{green},{blue},{alpha})")
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

fn to_channel_u8(value: f64) -> u8 {
    // `validate` keeps channels in [0, 1]; the clamp only guards unvalidated colors.
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_css_color(&raw).map_err(serde::de::Error::custom)
    }
}

fn parse_css_color(raw: &str) -> ChartResult<Color> {
    let trimmed = raw.trim();
    let Some(body) = trimmed
        .strip_prefix("rgba(")
        .and_then(|rest| rest.strip_suffix(')'))
    else {
        return Color::from_hex(trimmed);
    };
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    let [red, green, blue, alpha] = parts.as_slice() else {
        return Err(ChartError::InvalidData(format!(
            "color `{raw}` must have four rgba components"
        )));
    };
    let parse_u8 = |part: &str| {
        part.parse::<u8>()
            .map_err(|_| ChartError::InvalidData(format!("color `{raw}` has invalid channel")))
    };
    let alpha = alpha
        .parse::<f64>()
        .map_err(|_| ChartError::InvalidData(format!("color `{raw}` has invalid alpha")))?;
    let color = Color::rgba8(parse_u8(red)?, parse_u8(green)?, parse_u8(blue)?, alpha);
    color.validate()?;
    Ok(color)
}

/// Filled rectangle, optionally with rounded corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_color: Color,
    pub corner_radius: f64,
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
            corner_radius: 0.0,
        }
    }

    #[must_use]
    pub const fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.x + self.width
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x.is_finite()
            || !self.y.is_finite()
            || !self.width.is_finite()
            || !self.height.is_finite()
        {
            return Err(ChartError::InvalidData(
                "rect geometry must be finite".to_owned(),
            ));
        }
        // Zero-width bars are legitimate (instant phases).
        if self.width < 0.0 || self.height < 0.0 {
            return Err(ChartError::InvalidData(
                "rect width and height must be >= 0".to_owned(),
            ));
        }
        if !self.corner_radius.is_finite() || self.corner_radius < 0.0 {
            return Err(ChartError::InvalidData(
                "rect corner radius must be finite and >= 0".to_owned(),
            ));
        }
        self.fill_color.validate()
    }
}

/// Stroked line segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    /// Vertical segment at `x` from `y1` to `y2`.
    #[must_use]
    pub const fn vertical(x: f64, y1: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self::new(x, y1, x, y2, stroke_width, color)
    }

    #[must_use]
    pub fn is_vertical(self) -> bool {
        self.x1 == self.x2
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextHAlign {
    #[default]
    Left,
    Right,
}

impl TextHAlign {
    /// Distance from the anchor point to the left edge of a run of `width`.
    #[must_use]
    pub fn left_offset(self, width: f64) -> f64 {
        match self {
            Self::Left => 0.0,
            Self::Right => width,
        }
    }
}

/// Label anchored at `(x, y)` and shifted vertically by `dy_ex` x-heights.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub style: TextStyle,
    pub color: Color,
    pub h_align: TextHAlign,
    pub dy_ex: f64,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(text: impl Into<String>, x: f64, y: f64, style: TextStyle, color: Color) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            style,
            color,
            h_align: TextHAlign::Left,
            dy_ex: 0.0,
        }
    }

    #[must_use]
    pub fn with_h_align(mut self, h_align: TextHAlign) -> Self {
        self.h_align = h_align;
        self
    }

    #[must_use]
    pub fn with_dy_ex(mut self, dy_ex: f64) -> Self {
        self.dy_ex = dy_ex;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() || !self.dy_ex.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        self.style.validate()?;
        self.color.validate()
    }
}
