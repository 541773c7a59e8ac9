//! Colour Tokens
//!
//! Closed sets of colours used by charts and badges. The UI maps them to
//! CSS classes; nothing below this layer knows about styling.

use serde::{Deserialize, Serialize};

/// Fill colour of a chart bar or pie legend dot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Red,
    Blue,
    Yellow,
    Green,
    Gray,
    Purple,
    Orange,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Red => "red",
            Tone::Blue => "blue",
            Tone::Yellow => "yellow",
            Tone::Green => "green",
            Tone::Gray => "gray",
            Tone::Purple => "purple",
            Tone::Orange => "orange",
        }
    }

    /// CSS class for a filled swatch
    pub fn fill_class(&self) -> &'static str {
        match self {
            Tone::Red => "fill-red",
            Tone::Blue => "fill-blue",
            Tone::Yellow => "fill-yellow",
            Tone::Green => "fill-green",
            Tone::Gray => "fill-gray",
            Tone::Purple => "fill-purple",
            Tone::Orange => "fill-orange",
        }
    }
}

/// Badge styling variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTone {
    #[default]
    Default,
    Destructive,
    Outline,
    Secondary,
    Success,
    Warning,
}

impl BadgeTone {
    pub fn class(&self) -> &'static str {
        match self {
            BadgeTone::Default => "badge badge-default",
            BadgeTone::Destructive => "badge badge-destructive",
            BadgeTone::Outline => "badge badge-outline",
            BadgeTone::Secondary => "badge badge-secondary",
            BadgeTone::Success => "badge badge-success",
            BadgeTone::Warning => "badge badge-warning",
        }
    }
}
