use crate::file_kind::FileKind;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Flat classifier output returned by the text and image endpoints.
///
/// `probabilities[0]` is the human class and `probabilities[1]` the AI class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatDetection {
    pub predicted_class: i64,
    pub predicted_label: String,
    pub confidence: f64,
    pub probabilities: Vec<f64>,
}

pub type TextDetectionResult = FlatDetection;
pub type ImageDetectionResult = FlatDetection;

impl FlatDetection {
    /// Label-based rule: the label mentions "ai" anywhere, ignoring case.
    pub fn label_signals_ai(&self) -> bool {
        self.predicted_label.to_lowercase().contains("ai")
    }

    /// Index-based rule: class 1 is the AI class.
    pub fn class_signals_ai(&self) -> bool {
        self.predicted_class == 1
    }

    pub fn is_ai(&self) -> bool {
        self.label_signals_ai() || self.class_signals_ai()
    }

    /// True when the label rule and the index rule disagree.
    pub fn has_conflicting_signals(&self) -> bool {
        self.label_signals_ai() != self.class_signals_ai()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum VideoPrediction {
    Real,
    Fake,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VideoProbabilities {
    pub real: f64,
    pub fake: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoVerdict {
    pub prediction: VideoPrediction,
    pub confidence: f64,
    pub probabilities: VideoProbabilities,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoDetectionResult {
    pub result: VideoVerdict,
}

impl VideoDetectionResult {
    pub fn is_fake(&self) -> bool {
        self.result.prediction == VideoPrediction::Fake
    }
}

/// A decoded response, tagged by the endpoint that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum DetectionResult {
    Text(TextDetectionResult),
    Image(ImageDetectionResult),
    Video(VideoDetectionResult),
}

impl DetectionResult {
    pub fn kind(&self) -> FileKind {
        match self {
            DetectionResult::Text(_) => FileKind::Text,
            DetectionResult::Image(_) => FileKind::Image,
            DetectionResult::Video(_) => FileKind::Video,
        }
    }

    pub fn label(&self) -> String {
        match self {
            DetectionResult::Text(flat) | DetectionResult::Image(flat) => {
                flat.predicted_label.clone()
            }
            DetectionResult::Video(video) => video.result.prediction.to_string(),
        }
    }

    pub fn confidence(&self) -> f64 {
        match self {
            DetectionResult::Text(flat) | DetectionResult::Image(flat) => flat.confidence,
            DetectionResult::Video(video) => video.result.confidence,
        }
    }

    pub fn is_ai(&self) -> bool {
        match self {
            DetectionResult::Text(flat) | DetectionResult::Image(flat) => flat.is_ai(),
            DetectionResult::Video(video) => video.is_fake(),
        }
    }
}

/// JSON body of the text endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextDetectionRequest {
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(class: i64, label: &str) -> FlatDetection {
        FlatDetection {
            predicted_class: class,
            predicted_label: label.to_string(),
            confidence: 0.8,
            probabilities: vec![0.2, 0.8],
        }
    }

    #[test]
    fn test_class_one_is_ai_without_label_hint() {
        let detection = flat(1, "Machine");
        assert!(!detection.label_signals_ai());
        assert!(detection.class_signals_ai());
        assert!(detection.is_ai());
        assert!(detection.has_conflicting_signals());
    }

    #[test]
    fn test_label_substring_is_case_insensitive() {
        assert!(flat(0, "AI-Generated").is_ai());
        assert!(flat(0, "likely ai").is_ai());
        assert!(!flat(0, "Human").is_ai());
    }

    #[test]
    fn test_label_rule_matches_inside_words() {
        // "Certain human" contains "ai" and flips the verdict.
        let detection = flat(0, "Certain human");
        assert!(detection.is_ai());
        assert!(detection.has_conflicting_signals());
    }

    #[test]
    fn test_video_accessors() {
        let result = DetectionResult::Video(VideoDetectionResult {
            result: VideoVerdict {
                prediction: VideoPrediction::Real,
                confidence: 0.75,
                probabilities: VideoProbabilities { real: 0.75, fake: 0.25 },
            },
        });
        assert_eq!(result.kind(), FileKind::Video);
        assert_eq!(result.label(), "Real");
        assert_eq!(result.confidence(), 0.75);
        assert!(!result.is_ai());
    }

    #[test]
    fn test_text_request_body() {
        let body = serde_json::to_string(&TextDetectionRequest { text: "hello".into() }).unwrap();
        assert_eq!(body, r#"{"text":"hello"}"#);
    }

    #[test]
    fn test_unexpected_video_prediction_is_rejected() {
        let body = r#"{"result":{"prediction":"Maybe","confidence":0.5,"probabilities":{"real":0.5,"fake":0.5}}}"#;
        assert!(serde_json::from_str::<VideoDetectionResult>(body).is_err());
    }
}
