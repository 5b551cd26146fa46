//! Version information shared by the UI status bar and the CLI.

/// The package version.
pub fn build_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Display string for the UI tooltip and CLI header, e.g. `bpa:0.1.0`.
pub fn format_env_version() -> String {
    format!("bpa:{}", build_version())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_env_version() {
        let formatted = format_env_version();
        assert!(formatted.starts_with("bpa:"));
        assert!(formatted.len() > "bpa:".len());
    }
}
