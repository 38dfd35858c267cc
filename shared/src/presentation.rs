//! What the result panel shows, computed from its inputs.

use crate::models::{DetectionResult, FlatDetection, VideoDetectionResult};
use std::fmt;

/// A 0-100 value rendered with one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Percentage(pub f64);

impl fmt::Display for Percentage {
    // Ties round away from zero, so 6.25 shows as 6.3.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = (self.0 * 10.0).round() / 10.0;
        write!(f, "{:.1}%", rounded)
    }
}

impl Percentage {
    pub fn from_probability(probability: f64) -> Self {
        Percentage(probability * 100.0)
    }

    pub fn width_style(&self) -> String {
        format!("width: {}%", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Authentic,
    Generated,
}

impl Tone {
    pub fn css_class(self) -> &'static str {
        match self {
            Tone::Authentic => "tone-authentic",
            Tone::Generated => "tone-generated",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityBar {
    pub label: String,
    pub percentage: Percentage,
    pub tone: Tone,
    pub predicted: bool,
}

impl ProbabilityBar {
    /// Bar caption, with an arrow on the predicted class.
    pub fn caption(&self) -> String {
        if self.predicted {
            format!("→ {}", self.label)
        } else {
            self.label.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub label: String,
    pub confidence: Percentage,
    pub is_ai: bool,
    pub conflicting_signals: bool,
    pub bars: Vec<ProbabilityBar>,
}

impl Summary {
    pub fn from_result(result: &DetectionResult) -> Self {
        let bars = match result {
            DetectionResult::Text(flat) | DetectionResult::Image(flat) => flat_bars(flat),
            DetectionResult::Video(video) => video_bars(video),
        };
        let conflicting_signals = match result {
            DetectionResult::Text(flat) | DetectionResult::Image(flat) => {
                flat.has_conflicting_signals()
            }
            DetectionResult::Video(_) => false,
        };

        Summary {
            label: result.label(),
            confidence: Percentage::from_probability(result.confidence()),
            is_ai: result.is_ai(),
            conflicting_signals,
            bars,
        }
    }

    /// Badge text such as `Fake (90.0%)`.
    pub fn badge(&self) -> String {
        format!("{} ({})", self.label, self.confidence)
    }

    pub fn tone(&self) -> Tone {
        if self.is_ai { Tone::Generated } else { Tone::Authentic }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Presentation {
    Loading,
    Failed(String),
    Empty,
    Summary(Summary),
}

impl Presentation {
    /// Loading wins over an error, and an error wins over a result.
    pub fn build(result: Option<&DetectionResult>, loading: bool, error: Option<&str>) -> Self {
        if loading {
            return Presentation::Loading;
        }
        if let Some(message) = error.filter(|message| !message.is_empty()) {
            return Presentation::Failed(message.to_string());
        }
        match result {
            Some(result) => Presentation::Summary(Summary::from_result(result)),
            None => Presentation::Empty,
        }
    }
}

fn flat_bars(flat: &FlatDetection) -> Vec<ProbabilityBar> {
    flat.probabilities
        .iter()
        .enumerate()
        .map(|(idx, &probability)| {
            let (label, tone) = if idx == 0 {
                ("Human", Tone::Authentic)
            } else {
                ("AI", Tone::Generated)
            };
            ProbabilityBar {
                label: label.to_string(),
                percentage: Percentage::from_probability(probability),
                tone,
                predicted: i64::try_from(idx).is_ok_and(|idx| idx == flat.predicted_class),
            }
        })
        .collect()
}

fn video_bars(video: &VideoDetectionResult) -> Vec<ProbabilityBar> {
    let probabilities = &video.result.probabilities;
    vec![
        ProbabilityBar {
            label: "Real".to_string(),
            percentage: Percentage::from_probability(probabilities.real),
            tone: Tone::Authentic,
            predicted: false,
        },
        ProbabilityBar {
            label: "Fake".to_string(),
            percentage: Percentage::from_probability(probabilities.fake),
            tone: Tone::Generated,
            predicted: false,
        },
    ]
}
