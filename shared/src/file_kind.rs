use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

const TEXT_EXTENSIONS: &[&str] = &["txt", "pdf", "docx", "doc"];
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "avi", "mkv", "webm"];

/// Media category of an uploaded file, decided purely by its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Text,
    Image,
    Video,
    Unknown,
}

impl FileKind {
    pub fn from_file_name(file_name: &str) -> Self {
        match extension(file_name) {
            Some(ext) => Self::from_extension(&ext),
            None => FileKind::Unknown,
        }
    }

    pub fn from_extension(ext: &str) -> Self {
        let ext = ext.to_lowercase();
        let ext = ext.as_str();

        if TEXT_EXTENSIONS.contains(&ext) {
            FileKind::Text
        } else if IMAGE_EXTENSIONS.contains(&ext) {
            FileKind::Image
        } else if VIDEO_EXTENSIONS.contains(&ext) {
            FileKind::Video
        } else {
            FileKind::Unknown
        }
    }

    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            FileKind::Text => TEXT_EXTENSIONS,
            FileKind::Image => IMAGE_EXTENSIONS,
            FileKind::Video => VIDEO_EXTENSIONS,
            FileKind::Unknown => &[],
        }
    }

    /// Capitalised name used in error messages ("Image detection failed").
    pub fn title(self) -> &'static str {
        match self {
            FileKind::Text => "Text",
            FileKind::Image => "Image",
            FileKind::Video => "Video",
            FileKind::Unknown => "Unknown",
        }
    }

    pub fn is_supported(self) -> bool {
        self != FileKind::Unknown
    }
}

/// Value for an `<input type="file" accept=...>` covering every supported extension.
pub fn accept_attribute() -> String {
    [FileKind::Text, FileKind::Image, FileKind::Video]
        .iter()
        .flat_map(|kind| kind.extensions())
        .map(|ext| format!(".{}", ext))
        .collect::<Vec<_>>()
        .join(",")
}

/// PDF detection for client-side text extraction. The MIME type wins; the
/// extension is only consulted when the browser reports none.
pub fn is_pdf(mime_type: &str, file_name: &str) -> bool {
    if mime_type.is_empty() {
        extension(file_name).as_deref() == Some("pdf")
    } else {
        mime_type.eq_ignore_ascii_case("application/pdf")
    }
}

// Text after the final dot. A name without any dot is its own extension.
fn extension(file_name: &str) -> Option<String> {
    let ext = match file_name.rsplit_once('.') {
        Some((_, ext)) => ext,
        None => file_name,
    };
    Some(ext.to_lowercase()).filter(|ext| !ext.is_empty())
}
