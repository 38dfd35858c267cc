use crate::file_kind::FileKind;
use thiserror::Error;

pub const PDF_NOT_SUPPORTED: &str =
    "PDF text extraction not implemented. Please use .txt or .docx files.";

/// Everything that can go wrong during one analysis attempt.
///
/// The UI only ever shows the `Display` text, so the messages are part of the contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetectionError {
    #[error("{} detection failed: {body}", .kind.title())]
    Rejected { kind: FileKind, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Failed to read file")]
    FileRead,

    #[error("{}", PDF_NOT_SUPPORTED)]
    PdfNotSupported,

    #[error("Unsupported file type: {0}")]
    UnsupportedFile(String),

    #[error("Failed to build request: {0}")]
    Request(String),
}

impl From<serde_json::Error> for DetectionError {
    fn from(err: serde_json::Error) -> Self {
        DetectionError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_message_carries_body() {
        let err = DetectionError::Rejected {
            kind: FileKind::Video,
            body: "{\"detail\":\"corrupt container\"}".into(),
        };
        assert_eq!(
            err.to_string(),
            "Video detection failed: {\"detail\":\"corrupt container\"}"
        );
    }

    #[test]
    fn test_fixed_messages() {
        assert_eq!(DetectionError::FileRead.to_string(), "Failed to read file");
        assert_eq!(DetectionError::PdfNotSupported.to_string(), PDF_NOT_SUPPORTED);
        assert_eq!(
            DetectionError::UnsupportedFile("a.zip".into()).to_string(),
            "Unsupported file type: a.zip"
        );
    }
}
