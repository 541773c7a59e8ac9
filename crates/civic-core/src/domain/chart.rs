//! Chart Datum
//!
//! One labelled value in a bar or pie chart. Identity is its position.

use serde::{Deserialize, Serialize};

use super::tone::Tone;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDatum {
    pub name: String,
    pub value: f64,
    pub tone: Tone,
}

impl ChartDatum {
    pub fn new(name: impl Into<String>, value: f64, tone: Tone) -> Self {
        Self {
            name: name.into(),
            value,
            tone,
        }
    }

    /// Value as shown next to a bar; whole numbers drop the fraction
    pub fn display_value(&self) -> String {
        if self.value.fract() == 0.0 {
            format!("{}", self.value as i64)
        } else {
            format!("{}", self.value)
        }
    }
}

/// Direction of the change noted under a stat tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Flat,
    #[default]
    None,
}

impl Trend {
    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Up => "↑ ",
            Trend::Down => "↓ ",
            Trend::Flat => "→ ",
            Trend::None => "",
        }
    }
}

/// Headline figure at the top of a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatTile {
    pub label: String,
    pub value: String,
    pub note: String,
    pub trend: Trend,
    pub tone: Tone,
}

impl StatTile {
    pub fn new(label: &str, value: impl Into<String>, note: &str, trend: Trend, tone: Tone) -> Self {
        Self {
            label: label.to_string(),
            value: value.into(),
            note: note.to_string(),
            trend,
            tone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_value() {
        assert_eq!(ChartDatum::new("Q1", 2500000.0, Tone::Blue).display_value(), "2500000");
        assert_eq!(ChartDatum::new("pH", 7.2, Tone::Green).display_value(), "7.2");
    }
}
