use crate::client::Endpoint;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Where the detection service lives. Baked in at build time from `API_BASE_URL`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() {
            DEFAULT_API_BASE_URL.to_string()
        } else {
            trimmed.to_string()
        };
        Self { base_url }
    }

    pub fn from_env() -> Self {
        Self::new(option_env!("API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, endpoint: &Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{IMAGE_ENDPOINT, TEXT_ENDPOINT};

    #[test]
    fn test_default_base_url() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url(), "http://localhost:8000");
        assert_eq!(
            config.url_for(&TEXT_ENDPOINT),
            "http://localhost:8000/api_text/detect-text/"
        );
    }

    #[test]
    fn test_trailing_slash_is_dropped() {
        let config = ApiConfig::new("https://detect.example.org/");
        assert_eq!(
            config.url_for(&IMAGE_ENDPOINT),
            "https://detect.example.org/api_image/classify-image/"
        );
    }

    #[test]
    fn test_blank_override_falls_back() {
        assert_eq!(ApiConfig::new("   ").base_url(), DEFAULT_API_BASE_URL);
    }
}
