//! Descriptive guidance for scored severity bands.
//!
//! Scoring itself happens in the remote service; this table only turns a
//! returned (dimension, band) pair into advice text.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A scored DASS dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Depression,
    Anxiety,
    Stress,
}

impl Dimension {
    /// All dimensions in reporting order.
    pub const ALL: [Dimension; 3] = [Dimension::Depression, Dimension::Anxiety, Dimension::Stress];

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Depression => "Depression",
            Dimension::Anxiety => "Anxiety",
            Dimension::Stress => "Stress",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordinal severity label returned by the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SeverityBand {
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "mild")]
    Mild,
    #[serde(rename = "moderate")]
    Moderate,
    #[serde(rename = "severe")]
    Severe,
    #[serde(rename = "extremely severe")]
    ExtremelySevere,
}

impl SeverityBand {
    /// Parses a scorer label, case-insensitively.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "normal" => Some(SeverityBand::Normal),
            "mild" => Some(SeverityBand::Mild),
            "moderate" => Some(SeverityBand::Moderate),
            "severe" => Some(SeverityBand::Severe),
            "extremely severe" => Some(SeverityBand::ExtremelySevere),
            _ => None,
        }
    }

    /// The label as the scorer spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityBand::Normal => "normal",
            SeverityBand::Mild => "mild",
            SeverityBand::Moderate => "moderate",
            SeverityBand::Severe => "severe",
            SeverityBand::ExtremelySevere => "extremely severe",
        }
    }
}

impl fmt::Display for SeverityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the guidance text for a dimension and band.
pub fn guidance(dimension: Dimension, band: SeverityBand) -> &'static str {
    use Dimension::*;
    use SeverityBand::*;

    match (dimension, band) {
        (Depression, Normal) => "No or minimal symptoms of depression.",
        (Depression, Mild) => "Mild depressive symptoms, may resolve on their own.",
        (Depression, Moderate) => {
            "Moderate level of depression, consider talking to someone or self-care activities."
        }
        (Depression, Severe) => "Severe symptoms, professional help is strongly recommended.",
        (Depression, ExtremelySevere) => {
            "Very severe symptoms, immediate mental health support is advised."
        }

        (Anxiety, Normal) => "No or minimal symptoms of anxiety.",
        (Anxiety, Mild) => "Mild anxiety, manageable with lifestyle adjustment.",
        (Anxiety, Moderate) => "Moderate anxiety level, could benefit from mental health strategies.",
        (Anxiety, Severe) => "Severe anxiety, consider consulting a professional.",
        (Anxiety, ExtremelySevere) => "Very high anxiety level, professional support is recommended.",

        (Stress, Normal) => "No or minimal stress symptoms.",
        (Stress, Mild) => "Mild stress, may be situational.",
        (Stress, Moderate) => "Moderate stress, consider stress management techniques.",
        (Stress, Severe) => "High stress, could affect daily functioning.",
        (Stress, ExtremelySevere) => "Extreme stress, seek professional advice.",
    }
}
