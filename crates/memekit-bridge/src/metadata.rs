//! Payload vocabulary for documents pinned to the content network.
//!
//! Field names follow the JSON documents as they appear on the network, so
//! existing pinned data keeps parsing across versions.

use serde::{Deserialize, Serialize};

use crate::token::TokenDeployment;

/// The liquidity model a token was launched under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LiquidityModel {
    /// Liquidity bootstrapped from the creation fee and social traction.
    #[default]
    HybridSocial,
}

/// Aggregated social/trading metrics stored alongside token metadata.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMetrics {
    /// Number of unique holder addresses.
    pub holders: u64,
    /// Trading volume over the last 24 hours, as a decimal string.
    pub volume_24h: String,
    /// Market capitalization, as a decimal string.
    pub market_cap: String,
    /// Composite social traction score.
    pub social_score: u32,
}

/// Token metadata document pinned once per deployed token.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenMetadata {
    /// Display name of the token.
    pub name: String,
    /// Ticker symbol, without any `$` prefix.
    pub symbol: String,
    /// Free-form description shown on the token page.
    pub description: String,
    /// URL of the token logo image (typically a gateway URL of a pinned file).
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discord: Option<String>,
    /// Total token supply, as a decimal string.
    pub total_supply: String,
    /// Initial liquidity in ETH, as a decimal string.
    pub initial_liquidity: String,
    /// Liquidity lock period in days, as a decimal string.
    pub lock_period: String,
    /// Unix timestamp (seconds) of token creation.
    pub created_at: u64,
    /// Address of the creator wallet.
    pub creator: String,
    /// The liquidity model the token was launched under.
    pub liquidity_model: LiquidityModel,
    /// Aggregated social/trading metrics at pin time.
    pub social_metrics: SocialMetrics,
}

impl TokenMetadata {
    /// Builds the metadata document for a token deployed from the given form
    /// payload. Metrics start at zero; they are refreshed by later re-pins.
    pub fn for_deployment(
        deployment: &TokenDeployment,
        creator: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
        created_at: u64,
    ) -> Self {
        Self {
            name: deployment.name.clone(),
            symbol: deployment.symbol.clone(),
            description: description.into(),
            image: image.into(),
            website: None,
            twitter: None,
            telegram: None,
            discord: None,
            total_supply: deployment.total_supply.clone(),
            initial_liquidity: deployment.initial_liquidity.clone(),
            lock_period: deployment.lock_period_days.to_string(),
            created_at,
            creator: creator.into(),
            liquidity_model: LiquidityModel::default(),
            social_metrics: SocialMetrics::default(),
        }
    }
}

/// Social profile links attached to a user profile document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discord: Option<String>,
}

/// Lifetime statistics attached to a user profile document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    /// Number of tokens this user has created.
    pub tokens_created: u32,
    /// Cumulative trading volume across the user's tokens, as a decimal string.
    pub total_volume: String,
    /// Identifiers of badges the user has earned.
    pub badges_earned: Vec<String>,
    /// Composite reputation score.
    pub reputation: u32,
}

/// User profile document pinned per creator wallet.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Wallet address the profile belongs to.
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Social profile links.
    pub social: SocialLinks,
    /// Lifetime statistics for the profile.
    pub stats: UserStats,
    /// Unix timestamp (seconds) of profile creation.
    pub created_at: u64,
}

/// Progress of a single badge for a single wallet.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeProgress {
    /// Wallet address the progress belongs to.
    pub address: String,
    /// Identifier of the badge type.
    pub badge_type: String,
    /// Current progress toward the requirement.
    pub progress: u32,
    /// Threshold at which the badge is awarded.
    pub requirement: u32,
    /// Whether the badge has been awarded.
    pub achieved: bool,
    /// Unix timestamp (seconds) of the award, when achieved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub achieved_at: Option<u64>,
    /// Token that triggered the award, when tied to a specific token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_address: Option<String>,
}

/// One entry of the pinned token registry document.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRegistryEntry {
    /// Contract address of the token.
    pub address: String,
    /// Content identifier of the token's pinned metadata document.
    pub metadata_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_metadata_serializes_with_network_field_names() {
        let deployment = TokenDeployment {
            name: "Doge2".to_string(),
            symbol: "DOGE2".to_string(),
            ..TokenDeployment::default()
        };
        let metadata =
            TokenMetadata::for_deployment(&deployment, "0xcafe", "much coin", "ipfs://logo", 1_700_000_000);

        let document = serde_json::to_value(&metadata).unwrap();
        assert_eq!(document["totalSupply"], "1000000000");
        assert_eq!(document["lockPeriod"], "365");
        assert_eq!(document["liquidityModel"], "hybrid-social");
        assert_eq!(document["socialMetrics"]["socialScore"], 0);
        // absent socials are left off the document entirely
        assert!(document.get("website").is_none());
    }

    #[test]
    fn badge_progress_keeps_award_fields_optional() {
        let pending = BadgeProgress {
            address: "0xcafe".to_string(),
            badge_type: "serial-launcher".to_string(),
            progress: 3,
            requirement: 5,
            achieved: false,
            achieved_at: None,
            token_address: None,
        };

        let document = serde_json::to_value(&pending).unwrap();
        assert_eq!(document["badgeType"], "serial-launcher");
        assert!(document.get("achievedAt").is_none());
        assert!(document.get("tokenAddress").is_none());
    }

    #[test]
    fn user_profile_round_trips() {
        let profile = UserProfile {
            address: "0xcafe".to_string(),
            username: Some("wowsuchdev".to_string()),
            avatar: None,
            bio: None,
            social: SocialLinks::default(),
            stats: UserStats {
                tokens_created: 2,
                total_volume: "1337".to_string(),
                badges_earned: vec!["first-launch".to_string()],
                reputation: 40,
            },
            created_at: 1_700_000_000,
        };

        let rendered = serde_json::to_string(&profile).unwrap();
        let parsed: UserProfile = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, profile);
    }
}
