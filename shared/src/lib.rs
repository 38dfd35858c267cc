pub mod client;
pub mod config;
pub mod error;
pub mod file_kind;
pub mod models;
pub mod presentation;

pub use client::Endpoint;
pub use config::ApiConfig;
pub use error::DetectionError;
pub use file_kind::FileKind;
pub use models::{
    DetectionResult, FlatDetection, ImageDetectionResult, TextDetectionResult,
    VideoDetectionResult, VideoPrediction,
};
pub use presentation::{Presentation, Summary};
