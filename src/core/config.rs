//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use super::content::LandingContent;

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Waitlist form destination
    /// Example: https://formspree.io/f/abcd1234
    pub form_endpoint: Option<String>,

    /// URL of the ambient audio track
    pub audio_src: Option<String>,

    /// `tracing` filter directive
    pub log_filter: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            form_endpoint: get("FORM_ENDPOINT"),
            audio_src: get("AMBIENT_AUDIO_SRC"),
            log_filter: get("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }

    /// Check if a custom form endpoint is configured
    pub fn has_form_endpoint(&self) -> bool {
        self.form_endpoint.is_some()
    }

    /// Landing content with configured overrides applied
    pub fn landing_content(&self) -> LandingContent {
        let mut content = LandingContent::default();
        if let Some(endpoint) = &self.form_endpoint {
            content.form_endpoint = endpoint.clone();
        }
        if let Some(src) = &self.audio_src {
            content.audio_src = src.clone();
        }
        content
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
