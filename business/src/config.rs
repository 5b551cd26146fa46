use ustr::Ustr;

/// Connection settings shared by every surface.
#[derive(Debug, Clone)]
pub struct BusinessConfig {
    pub api_base_url: String,
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
        }
    }

    /// Build the config from the environment.
    ///
    /// `BPA_API_URL` overrides the default console endpoint, which is what
    /// local development and the mock-server tests rely on.
    pub fn from_env() -> Self {
        match std::env::var("BPA_API_URL") {
            Ok(url) if !url.is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    /// The `/api` root every route hangs off.
    pub fn api_url(&self) -> Ustr {
        let trimmed = self.api_base_url.trim_end_matches('/');
        if trimmed.is_empty() {
            Ustr::from("/api")
        } else {
            Ustr::from(&format!("{trimmed}/api"))
        }
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://console.bpanalyser.app".to_string(),
        }
    }
}
