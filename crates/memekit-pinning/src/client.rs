//! Request/response shapes and the client for the pinning API.

use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

use memekit_bridge::config::PinningConfig;
use memekit_bridge::metadata::{TokenMetadata, TokenRegistryEntry, UserProfile};
use serde::{Deserialize, Serialize};

const API_KEY_HEADER: &str = "pinata_api_key";
const SECRET_KEY_HEADER: &str = "pinata_secret_api_key";

/// Errors that can occur while talking to the pinning service.
#[derive(Debug, thiserror::Error)]
pub enum PinningError {
    /// No API credentials were configured; nothing was sent.
    #[error("pinning credentials are not configured")]
    CredentialsMissing,
    /// The request never completed (connection, TLS, or protocol failure).
    #[error("failed to reach the pinning service: {0}")]
    Transport(#[from] reqwest::Error),
    /// The service answered the upload with a non-success status.
    #[error("the pinning service rejected the upload with status {status}")]
    UploadRejected { status: reqwest::StatusCode },
    /// Neither the dedicated nor the public gateway could serve the content.
    #[error("no gateway could serve content {content_id} (last status {status})")]
    FetchFailed {
        content_id: String,
        status: reqwest::StatusCode,
    },
    /// A payload could not be encoded for the wire.
    #[error("failed to encode the pinning payload: {0}")]
    Encode(#[from] serde_json::Error),
}

/// API key pair identifying the pinning service account.
#[derive(Debug, Clone)]
pub struct PinningCredentials {
    pub api_key: String,
    pub secret_api_key: String,
}

/// Envelope for pinning a JSON document.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PinJsonRequest<T> {
    pinata_content: T,
    pinata_metadata: PinMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    pinata_options: Option<PinOptions>,
}

/// Service-side bookkeeping attached to a pinned document.
#[derive(Debug, Serialize)]
struct PinMetadata {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    keyvalues: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PinOptions {
    cid_version: u8,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PinByHashRequest {
    hash_to_pin: String,
    pinata_metadata: PinMetadata,
}

#[derive(Debug, Deserialize)]
struct PinResponse {
    #[serde(rename = "IpfsHash")]
    ipfs_hash: String,
}

/// Versioned index of every deployed token, pinned as one document.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TokenRegistryDocument<'a> {
    version: &'static str,
    timestamp: u64,
    total_tokens: usize,
    tokens: &'a [TokenRegistryEntry],
}

/// Client for a Pinata-style pinning API.
///
/// Cheap to clone; shares the pooled [`reqwest::Client`] it was built with.
/// Upload operations require credentials and fail with
/// [`PinningError::CredentialsMissing`] before any network traffic when they
/// are absent; fetching pinned content goes through public gateways and needs
/// none.
#[derive(Debug, Clone)]
pub struct PinningClient {
    http: reqwest::Client,
    config: PinningConfig,
    credentials: Option<PinningCredentials>,
}

impl PinningClient {
    pub fn new(
        http: reqwest::Client,
        config: PinningConfig,
        credentials: Option<PinningCredentials>,
    ) -> Self {
        Self {
            http,
            config,
            credentials,
        }
    }

    fn credentials(&self) -> Result<&PinningCredentials, PinningError> {
        self.credentials
            .as_ref()
            .ok_or(PinningError::CredentialsMissing)
    }

    fn api_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn pin_json<T: Serialize>(
        &self,
        request: &PinJsonRequest<T>,
    ) -> Result<String, PinningError> {
        let credentials = self.credentials()?;
        let response = self
            .http
            .post(self.api_url("pinning/pinJSONToIPFS"))
            .header(API_KEY_HEADER, &credentials.api_key)
            .header(SECRET_KEY_HEADER, &credentials.secret_api_key)
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PinningError::UploadRejected {
                status: response.status(),
            });
        }

        let parsed: PinResponse = response.json().await?;
        Ok(parsed.ipfs_hash)
    }

    /// Pins a token metadata document and returns its content identifier.
    pub async fn upload_token_metadata(
        &self,
        metadata: &TokenMetadata,
    ) -> Result<String, PinningError> {
        let keyvalues = BTreeMap::from([
            ("type".to_string(), "token-metadata".to_string()),
            ("creator".to_string(), metadata.creator.clone()),
            ("symbol".to_string(), metadata.symbol.clone()),
        ]);
        let request = PinJsonRequest {
            pinata_content: metadata,
            pinata_metadata: PinMetadata {
                name: format!("Token-{}-{}", metadata.name, unix_timestamp()),
                keyvalues: Some(keyvalues),
            },
            pinata_options: Some(PinOptions { cid_version: 1 }),
        };

        let content_id = self.pin_json(&request).await?;
        log::info!("Token metadata for {} pinned as {content_id}", metadata.symbol);
        Ok(content_id)
    }

    /// Pins a user profile document and returns its content identifier.
    pub async fn upload_user_profile(
        &self,
        profile: &UserProfile,
    ) -> Result<String, PinningError> {
        let keyvalues = BTreeMap::from([
            ("type".to_string(), "user-profile".to_string()),
            ("address".to_string(), profile.address.clone()),
        ]);
        let request = PinJsonRequest {
            pinata_content: profile,
            pinata_metadata: PinMetadata {
                name: format!("Profile-{}-{}", profile.address, unix_timestamp()),
                keyvalues: Some(keyvalues),
            },
            pinata_options: None,
        };

        let content_id = self.pin_json(&request).await?;
        log::info!("Profile for {} pinned as {content_id}", profile.address);
        Ok(content_id)
    }

    /// Pins a raw file (typically a token logo) and returns its URL on the
    /// dedicated gateway.
    pub async fn upload_image(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        mime: &str,
    ) -> Result<String, PinningError> {
        let credentials = self.credentials()?;
        let metadata = PinMetadata {
            name: format!("Image-{}", unix_timestamp()),
            keyvalues: Some(BTreeMap::from([(
                "type".to_string(),
                "token-logo".to_string(),
            )])),
        };

        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime)?;
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("pinataMetadata", serde_json::to_string(&metadata)?)
            .text(
                "pinataOptions",
                serde_json::to_string(&PinOptions { cid_version: 1 })?,
            );

        let response = self
            .http
            .post(self.api_url("pinning/pinFileToIPFS"))
            .header(API_KEY_HEADER, &credentials.api_key)
            .header(SECRET_KEY_HEADER, &credentials.secret_api_key)
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PinningError::UploadRejected {
                status: response.status(),
            });
        }

        let parsed: PinResponse = response.json().await?;
        Ok(format!(
            "{}{}",
            self.config.dedicated_gateway_url, parsed.ipfs_hash
        ))
    }

    /// Fetches a pinned JSON document, preferring the dedicated gateway and
    /// falling back to the public one.
    pub async fn get_data(&self, content_id: &str) -> Result<serde_json::Value, PinningError> {
        let dedicated = format!("{}{}", self.config.dedicated_gateway_url, content_id);
        let response = self.http.get(&dedicated).send().await?;

        let response = if response.status().is_success() {
            response
        } else {
            log::info!(
                "Dedicated gateway answered {} for {content_id}, retrying through the public gateway",
                response.status()
            );
            let public = format!("{}{}", self.config.public_gateway_url, content_id);
            let fallback = self.http.get(&public).send().await?;
            if !fallback.status().is_success() {
                return Err(PinningError::FetchFailed {
                    content_id: content_id.to_string(),
                    status: fallback.status(),
                });
            }
            fallback
        };

        Ok(response.json().await?)
    }

    /// Asks the service to keep an already-addressed document pinned.
    ///
    /// Best effort: a refusal is logged as a warning and not treated as an
    /// error, since the content stays reachable either way.
    pub async fn pin_by_hash(&self, content_id: &str) -> Result<(), PinningError> {
        let credentials = self.credentials()?;
        let request = PinByHashRequest {
            hash_to_pin: content_id.to_string(),
            pinata_metadata: PinMetadata {
                name: format!("Pinned-{}", unix_timestamp()),
                keyvalues: None,
            },
        };

        let response = self
            .http
            .post(self.api_url("pinning/pinByHash"))
            .header(API_KEY_HEADER, &credentials.api_key)
            .header(SECRET_KEY_HEADER, &credentials.secret_api_key)
            .json(&request)
            .send()
            .await?;

        if response.status().is_success() {
            log::info!("Content {content_id} re-pinned");
        } else {
            log::warn!(
                "Re-pin of {content_id} was refused with status {}",
                response.status()
            );
        }

        Ok(())
    }

    /// Pins a fresh registry document indexing every deployed token, and
    /// returns its content identifier.
    pub async fn create_token_registry(
        &self,
        tokens: &[TokenRegistryEntry],
    ) -> Result<String, PinningError> {
        let document = TokenRegistryDocument {
            version: "1.0.0",
            timestamp: unix_timestamp(),
            total_tokens: tokens.len(),
            tokens,
        };
        let keyvalues = BTreeMap::from([
            ("type".to_string(), "token-registry".to_string()),
            ("count".to_string(), tokens.len().to_string()),
        ]);
        let request = PinJsonRequest {
            pinata_content: &document,
            pinata_metadata: PinMetadata {
                name: format!("TokenRegistry-{}", unix_timestamp()),
                keyvalues: Some(keyvalues),
            },
            pinata_options: None,
        };

        self.pin_json(&request).await
    }
}

fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_with(api_base_url: &str, credentials: Option<PinningCredentials>) -> PinningClient {
        let config = PinningConfig {
            api_base_url: api_base_url.to_string(),
            ..PinningConfig::default()
        };
        PinningClient::new(reqwest::Client::new(), config, credentials)
    }

    #[test]
    fn api_urls_join_regardless_of_trailing_slashes() {
        let plain = client_with("https://api.pinata.cloud", None);
        let slashed = client_with("https://api.pinata.cloud/", None);

        assert_eq!(
            plain.api_url("pinning/pinJSONToIPFS"),
            "https://api.pinata.cloud/pinning/pinJSONToIPFS"
        );
        assert_eq!(plain.api_url("pinning/pinJSONToIPFS"), slashed.api_url("/pinning/pinJSONToIPFS"));
    }

    #[test]
    fn pin_envelope_uses_the_service_field_names() {
        let request = PinJsonRequest {
            pinata_content: serde_json::json!({"hello": "world"}),
            pinata_metadata: PinMetadata {
                name: "Token-Doge2-1700000000".to_string(),
                keyvalues: Some(BTreeMap::from([(
                    "type".to_string(),
                    "token-metadata".to_string(),
                )])),
            },
            pinata_options: Some(PinOptions { cid_version: 1 }),
        };

        let document = serde_json::to_value(&request).unwrap();
        assert_eq!(document["pinataContent"]["hello"], "world");
        assert_eq!(document["pinataMetadata"]["name"], "Token-Doge2-1700000000");
        assert_eq!(document["pinataMetadata"]["keyvalues"]["type"], "token-metadata");
        assert_eq!(document["pinataOptions"]["cidVersion"], 1);
    }

    #[test]
    fn registry_document_counts_its_entries() {
        let tokens = vec![
            TokenRegistryEntry {
                address: "0xabc".to_string(),
                metadata_hash: "bafy1".to_string(),
            },
            TokenRegistryEntry {
                address: "0xdef".to_string(),
                metadata_hash: "bafy2".to_string(),
            },
        ];
        let registry = TokenRegistryDocument {
            version: "1.0.0",
            timestamp: 1_700_000_000,
            total_tokens: tokens.len(),
            tokens: &tokens,
        };

        let document = serde_json::to_value(&registry).unwrap();
        assert_eq!(document["version"], "1.0.0");
        assert_eq!(document["totalTokens"], 2);
        assert_eq!(document["tokens"][1]["metadataHash"], "bafy2");
    }

    #[tokio::test]
    async fn uploads_are_refused_locally_without_credentials() {
        let client = client_with("https://api.pinata.cloud", None);
        let profile = UserProfile {
            address: "0xcafe".to_string(),
            username: None,
            avatar: None,
            bio: None,
            social: Default::default(),
            stats: Default::default(),
            created_at: 0,
        };

        let result = client.upload_user_profile(&profile).await;
        assert!(matches!(result, Err(PinningError::CredentialsMissing)));
    }
}
