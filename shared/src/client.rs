//! Request descriptors and response decoding for the detection service.
//!
//! The browser side only moves bytes; everything that decides what a response
//! means lives here so it can be exercised without a browser.

use crate::error::DetectionError;
use crate::file_kind::FileKind;
use crate::models::TextDetectionRequest;
use serde::de::DeserializeOwned;

/// How the request body is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payload {
    Json,
    Multipart { field: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub kind: FileKind,
    pub path: &'static str,
    pub payload: Payload,
}

pub const TEXT_ENDPOINT: Endpoint = Endpoint {
    kind: FileKind::Text,
    path: "/api_text/detect-text/",
    payload: Payload::Json,
};

pub const IMAGE_ENDPOINT: Endpoint = Endpoint {
    kind: FileKind::Image,
    path: "/api_image/classify-image/",
    payload: Payload::Multipart { field: "image" },
};

pub const VIDEO_ENDPOINT: Endpoint = Endpoint {
    kind: FileKind::Video,
    path: "/api_video/classify-video/",
    payload: Payload::Multipart { field: "video" },
};

impl Endpoint {
    pub fn for_kind(kind: FileKind) -> Option<Endpoint> {
        match kind {
            FileKind::Text => Some(TEXT_ENDPOINT),
            FileKind::Image => Some(IMAGE_ENDPOINT),
            FileKind::Video => Some(VIDEO_ENDPOINT),
            FileKind::Unknown => None,
        }
    }

    pub fn multipart_field(&self) -> Option<&'static str> {
        match self.payload {
            Payload::Multipart { field } => Some(field),
            Payload::Json => None,
        }
    }
}

/// Picks the endpoint for an uploaded file. Unsupported files never reach the network.
pub fn route(file_name: &str) -> Result<Endpoint, DetectionError> {
    Endpoint::for_kind(FileKind::from_file_name(file_name))
        .ok_or_else(|| DetectionError::UnsupportedFile(file_name.to_string()))
}

pub fn encode_text_request(text: &str) -> Result<String, DetectionError> {
    let request = TextDetectionRequest {
        text: text.to_string(),
    };
    Ok(serde_json::to_string(&request)?)
}

/// Turns a finished HTTP exchange into the endpoint's typed result.
///
/// A non-success status always yields `Rejected` with the raw body, whatever it contains.
pub fn decode_as<T: DeserializeOwned>(
    endpoint: &Endpoint,
    ok: bool,
    body: &str,
) -> Result<T, DetectionError> {
    if !ok {
        return Err(DetectionError::Rejected {
            kind: endpoint.kind,
            body: body.to_string(),
        });
    }
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FlatDetection, VideoDetectionResult, VideoPrediction};
    use strum::IntoEnumIterator;

    const FLAT_BODY: &str = r#"{
        "predicted_class": 1,
        "predicted_label": "AI",
        "confidence": 0.93,
        "probabilities": [0.07, 0.93]
    }"#;

    const VIDEO_BODY: &str = r#"{
        "result": {
            "prediction": "Fake",
            "confidence": 0.9,
            "probabilities": {"real": 0.1, "fake": 0.9}
        }
    }"#;

    #[test]
    fn test_endpoint_table() {
        assert_eq!(Endpoint::for_kind(FileKind::Text), Some(TEXT_ENDPOINT));
        assert_eq!(Endpoint::for_kind(FileKind::Unknown), None);
        assert_eq!(TEXT_ENDPOINT.multipart_field(), None);
        assert_eq!(IMAGE_ENDPOINT.multipart_field(), Some("image"));
        assert_eq!(VIDEO_ENDPOINT.multipart_field(), Some("video"));
    }

    #[test]
    fn test_every_supported_kind_has_an_endpoint() {
        for kind in FileKind::iter() {
            match Endpoint::for_kind(kind) {
                Some(endpoint) => {
                    assert!(kind.is_supported());
                    assert_eq!(endpoint.kind, kind);
                }
                None => assert_eq!(kind, FileKind::Unknown),
            }
        }
    }

    #[test]
    fn test_route_by_file_name() {
        assert_eq!(route("essay.TXT").unwrap(), TEXT_ENDPOINT);
        assert_eq!(route("essay.docx").unwrap().payload, Payload::Json);
        assert_eq!(route("cat.webp").unwrap(), IMAGE_ENDPOINT);
        assert_eq!(route("clip.mkv").unwrap(), VIDEO_ENDPOINT);
    }

    #[test]
    fn test_route_rejects_unknown_files() {
        let err = route("archive.zip").unwrap_err();
        assert_eq!(err, DetectionError::UnsupportedFile("archive.zip".into()));
        assert_eq!(err.to_string(), "Unsupported file type: archive.zip");
    }

    #[test]
    fn test_decode_text_success() {
        let flat: FlatDetection = decode_as(&TEXT_ENDPOINT, true, FLAT_BODY).unwrap();
        assert_eq!(flat.predicted_class, 1);
        assert_eq!(flat.predicted_label, "AI");
        assert!((0.0..=1.0).contains(&flat.confidence));
        assert_eq!(flat.probabilities, vec![0.07, 0.93]);
    }

    #[test]
    fn test_decode_video_success() {
        let video: VideoDetectionResult = decode_as(&VIDEO_ENDPOINT, true, VIDEO_BODY).unwrap();
        assert!(video.is_fake());
        assert_eq!(video.result.prediction, VideoPrediction::Fake);
        assert_eq!(video.result.confidence, 0.9);
        assert_eq!(video.result.probabilities.real, 0.1);
        assert_eq!(video.result.probabilities.fake, 0.9);
    }

    #[test]
    fn test_non_success_carries_body() {
        let err = decode_as::<FlatDetection>(&IMAGE_ENDPOINT, false, "model not loaded")
            .unwrap_err();
        assert!(err.to_string().contains("model not loaded"));
        assert_eq!(err.to_string(), "Image detection failed: model not loaded");
    }

    #[test]
    fn test_non_success_ignores_json_shape() {
        // Even a body that would decode fine is an error on a failed status.
        let err = decode_as::<FlatDetection>(&TEXT_ENDPOINT, false, FLAT_BODY).unwrap_err();
        assert!(matches!(err, DetectionError::Rejected { kind: FileKind::Text, .. }));
    }

    #[test]
    fn test_malformed_json_is_a_decode_error() {
        let err = decode_as::<FlatDetection>(&TEXT_ENDPOINT, true, "<html>502</html>")
            .unwrap_err();
        assert!(matches!(err, DetectionError::Decode(_)));
    }

    #[test]
    fn test_video_shape_on_flat_endpoint_fails() {
        assert!(decode_as::<FlatDetection>(&TEXT_ENDPOINT, true, VIDEO_BODY).is_err());
    }

    #[test]
    fn test_encode_text_request_escapes() {
        let body = encode_text_request("line \"one\"\nline two").unwrap();
        assert_eq!(body, r#"{"text":"line \"one\"\nline two"}"#);
    }
}
