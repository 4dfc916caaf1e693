use serde::{Deserialize, Serialize};

/// Configuration for the embedding-detection and session layer.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmbeddingConfig {
    /// How long to wait for a host API that has not attached at mount before
    /// declaring the session ready without a host context, in milliseconds.
    /// The wait happens once; there is no polling.
    pub host_ready_fallback_ms: u64,
    /// Additional referrer domains treated as embedding hosts, on top of the
    /// built-in list.
    pub extra_host_domains: Vec<String>,
    /// Additional URL query parameters treated as embedding markers, on top
    /// of the built-in list.
    pub extra_marker_params: Vec<String>,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            host_ready_fallback_ms: 1000,
            extra_host_domains: Vec::new(),
            extra_marker_params: Vec::new(),
        }
    }
}

/// Configuration for composing share announcements.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ShareConfig {
    /// Base URL of the public token page; the token contract address is
    /// appended to build the embed link of a creation announcement.
    pub token_page_base_url: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            token_page_base_url: "https://memekit.app/token/".to_string(),
        }
    }
}

/// Configuration for the metadata pinning service endpoints.
///
/// Credentials are intentionally not part of this struct; they are read from
/// environment variables by the backend so they never land in the config file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PinningConfig {
    /// Base URL of the pinning API.
    pub api_base_url: String,
    /// Gateway used first when fetching pinned content back.
    pub dedicated_gateway_url: String,
    /// Public gateway used as a fallback when the dedicated one fails.
    pub public_gateway_url: String,
}

impl Default for PinningConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.pinata.cloud".to_string(),
            dedicated_gateway_url: "https://gateway.pinata.cloud/ipfs/".to_string(),
            public_gateway_url: "https://ipfs.io/ipfs/".to_string(),
        }
    }
}

/// Global application configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Configuration for the embedding session layer.
    pub embedding: EmbeddingConfig,
    /// Configuration for share announcement composition.
    pub share: ShareConfig,
    /// Configuration for the pinning service client.
    pub pinning: PinningConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_survives_a_toml_round_trip() {
        let config = Config::default();
        let rendered = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed.embedding.host_ready_fallback_ms, 1000);
        assert_eq!(parsed.share.token_page_base_url, "https://memekit.app/token/");
        assert_eq!(parsed.pinning.api_base_url, "https://api.pinata.cloud");
    }
}
