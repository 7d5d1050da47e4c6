use serde::Serialize;

use super::numbers::{format_percentage, DEFAULT_PERCENT_DECIMALS};

const CONFIDENCE_HIGH: f64 = 0.8;
const CONFIDENCE_MEDIUM: f64 = 0.6;

/// Semantic color applied to a displayed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColorToken {
    #[serde(rename = "text-green-600")]
    Positive,
    #[serde(rename = "text-red-600")]
    Negative,
    #[serde(rename = "text-yellow-600")]
    Warning,
    #[serde(rename = "text-gray-600")]
    Neutral,
}

impl ColorToken {
    pub const fn class(self) -> &'static str {
        match self {
            Self::Positive => "text-green-600",
            Self::Negative => "text-red-600",
            Self::Warning => "text-yellow-600",
            Self::Neutral => "text-gray-600",
        }
    }
}

/// How a value should be judged when picking its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCategory {
    /// Signed change: sign decides the color.
    Change,
    /// Fraction in `[0, 1]` bucketed at 0.6 and 0.8.
    Confidence,
    Other,
}

impl From<&str> for ColorCategory {
    fn from(value: &str) -> Self {
        match value {
            "change" => Self::Change,
            "confidence" => Self::Confidence,
            _ => Self::Other,
        }
    }
}

pub fn color_for(value: f64, category: impl Into<ColorCategory>) -> ColorToken {
    match category.into() {
        ColorCategory::Change => {
            if value > 0.0 {
                ColorToken::Positive
            } else if value < 0.0 {
                ColorToken::Negative
            } else {
                ColorToken::Neutral
            }
        }
        ColorCategory::Confidence => {
            if value >= CONFIDENCE_HIGH {
                ColorToken::Positive
            } else if value >= CONFIDENCE_MEDIUM {
                ColorToken::Warning
            } else {
                ColorToken::Negative
            }
        }
        ColorCategory::Other => ColorToken::Neutral,
    }
}

/// Direction glyph for a signed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TrendIcon {
    #[serde(rename = "↑")]
    Up,
    #[serde(rename = "↓")]
    Down,
    #[serde(rename = "→")]
    Flat,
}

impl TrendIcon {
    pub fn for_value(value: f64) -> Self {
        if value > 0.0 {
            Self::Up
        } else if value < 0.0 {
            Self::Down
        } else {
            Self::Flat
        }
    }

    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Up => "↑",
            Self::Down => "↓",
            Self::Flat => "→",
        }
    }
}

/// Display bundle for a year-over-year change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearOverYearChange {
    pub text: String,
    pub color: ColorToken,
    pub icon: TrendIcon,
}

/// The sign is carried by the icon and color; `text` shows the magnitude only.
pub fn format_yoy_change(change: f64, use_arabic: bool) -> YearOverYearChange {
    let icon = TrendIcon::for_value(change);
    let color = color_for(change, ColorCategory::Change);
    let magnitude = format_percentage(change.abs(), DEFAULT_PERCENT_DECIMALS, use_arabic);

    YearOverYearChange {
        text: format!("{} {}", icon.glyph(), magnitude),
        color,
        icon,
    }
}
