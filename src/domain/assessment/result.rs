//! Assessment result as reported by the remote scorer.

use serde::{Deserialize, Serialize};

use super::interpretation::{guidance, Dimension, SeverityBand};

/// Severity labels per dimension.
///
/// Labels are kept verbatim so the summary shows exactly what the scorer
/// returned, even if a label falls outside the known bands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub depression: String,
    pub anxiety: String,
    pub stress: String,
}

impl AssessmentResult {
    /// Creates a result from three labels.
    pub fn new(
        depression: impl Into<String>,
        anxiety: impl Into<String>,
        stress: impl Into<String>,
    ) -> Self {
        Self {
            depression: depression.into(),
            anxiety: anxiety.into(),
            stress: stress.into(),
        }
    }

    /// Returns the raw label for a dimension.
    pub fn label(&self, dimension: Dimension) -> &str {
        match dimension {
            Dimension::Depression => &self.depression,
            Dimension::Anxiety => &self.anxiety,
            Dimension::Stress => &self.stress,
        }
    }

    /// Returns the parsed band for a dimension, if the label is recognised.
    pub fn band(&self, dimension: Dimension) -> Option<SeverityBand> {
        SeverityBand::parse(self.label(dimension))
    }

    /// Guidance text for every dimension whose label is recognised.
    pub fn guidance(&self) -> Vec<(Dimension, &'static str)> {
        Dimension::ALL
            .iter()
            .filter_map(|dimension| {
                self.band(*dimension)
                    .map(|band| (*dimension, guidance(*dimension, band)))
            })
            .collect()
    }

    /// The assistant-facing summary: a heading and one line per dimension.
    pub fn summary(&self) -> String {
        format!(
            "**Assessment Result**\n- Depression: {}\n- Anxiety: {}\n- Stress: {}",
            self.depression, self.anxiety, self.stress
        )
    }
}
