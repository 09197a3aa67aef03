pub const DEFAULT_API_ORIGIN: &str = "http://localhost:5000";

/// Where the inference service lives. The origin is fixed per build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    origin: String,
}

impl ApiConfig {
    pub fn new(origin: &str) -> Self {
        let origin = origin.trim().trim_end_matches('/');
        let origin = if origin.is_empty() { DEFAULT_API_ORIGIN } else { origin };
        Self { origin: origin.to_string() }
    }

    /// Origin baked in at compile time through `FLAMESCOPE_API_ORIGIN`.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("FLAMESCOPE_API_ORIGIN").unwrap_or(DEFAULT_API_ORIGIN))
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn predict_url(&self) -> String {
        format!("{}/predict", self.origin)
    }

    pub fn health_url(&self) -> String {
        format!("{}/health", self.origin)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_ORIGIN)
    }
}
