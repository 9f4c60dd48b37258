//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Compress responses (brotli + gzip)
    /// Env: THUMBLY_COMPRESSION, default on
    pub compression: bool,

    /// Serve precompressed `.br` / `.gz` variants of `/pkg` assets
    /// Env: THUMBLY_PRECOMPRESSED, default on
    pub precompressed_assets: bool,

    /// Public URL the site is reachable at, only used for logging
    /// Example: https://thumbly.com
    pub public_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            compression: parse_flag(lookup("THUMBLY_COMPRESSION").as_deref(), true),
            precompressed_assets: parse_flag(lookup("THUMBLY_PRECOMPRESSED").as_deref(), true),
            public_url: lookup("THUMBLY_PUBLIC_URL")
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            compression: true,
            precompressed_assets: true,
            public_url: None,
        }
    }
}

/// Parse a boolean flag, falling back to `default` for missing or unknown values
fn parse_flag(value: Option<&str>, default: bool) -> bool {
    match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        Some("1" | "true" | "yes" | "on") => true,
        Some("0" | "false" | "no" | "off") => false,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = config_from(&[]);
        assert_eq!(config, Config::default());
        assert!(config.compression);
        assert!(config.precompressed_assets);
        assert!(config.public_url.is_none());
    }

    #[test]
    fn test_flags_can_be_disabled() {
        let config = config_from(&[
            ("THUMBLY_COMPRESSION", "off"),
            ("THUMBLY_PRECOMPRESSED", "FALSE"),
        ]);
        assert!(!config.compression);
        assert!(!config.precompressed_assets);
    }

    #[test]
    fn test_unknown_flag_value_uses_default() {
        let config = config_from(&[("THUMBLY_COMPRESSION", "maybe")]);
        assert!(config.compression);
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag(Some(" Yes "), false));
        assert!(parse_flag(Some("1"), false));
        assert!(!parse_flag(Some("no"), true));
        assert!(!parse_flag(None, false));
        assert!(parse_flag(Some(""), true));
    }

    #[test]
    fn test_public_url_is_trimmed() {
        let config = config_from(&[("THUMBLY_PUBLIC_URL", " https://thumbly.com/ ")]);
        assert_eq!(config.public_url.as_deref(), Some("https://thumbly.com"));

        let blank = config_from(&[("THUMBLY_PUBLIC_URL", "  ")]);
        assert!(blank.public_url.is_none());
    }
}
