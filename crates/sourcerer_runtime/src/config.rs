//! Runtime configuration.

/// Default quiescent period before a completion request goes out.
pub const DEFAULT_DEBOUNCE_MS: i64 = 300;

/// Configuration for the assistant runtime.
#[derive(Debug, Clone)]
pub struct SourcererConfig {
    /// Model identifier sent with each request.
    pub model: String,
    /// Chat completions base URL.
    pub api_url: String,
    /// Debounce delay for inline completion triggers, in milliseconds.
    pub debounce_ms: i64,
}

impl SourcererConfig {
    pub fn new() -> Self {
        Self {
            model: "google/gemma-3-27b-it:free".to_string(),
            api_url: "https://openrouter.ai/api/v1/".to_string(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_debounce_ms(mut self, debounce_ms: i64) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    /// Load configuration from environment variables, falling back to the
    /// defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let mut config = Self::new();

        if let Ok(model) = std::env::var("SOURCERER_MODEL") {
            config.model = model;
        }
        if let Ok(api_url) = std::env::var("SOURCERER_API_URL") {
            config.api_url = api_url;
        }
        if let Ok(debounce) = std::env::var("SOURCERER_DEBOUNCE_MS") {
            if let Ok(ms) = debounce.parse() {
                config.debounce_ms = ms;
            }
        }

        config
    }
}

impl Default for SourcererConfig {
    fn default() -> Self {
        Self::new()
    }
}
