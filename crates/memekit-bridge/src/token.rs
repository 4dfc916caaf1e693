use serde::{Deserialize, Serialize};

/// Parameters for announcing a newly deployed token through the host.
///
/// Ephemeral: constructed per share action, turned into an announcement text
/// and a single token-page embed link, and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenShareRequest {
    /// Display name of the token.
    pub name: String,
    /// Ticker symbol, without any `$` prefix.
    pub symbol: String,
    /// Contract address of the deployed token.
    pub address: String,
}

/// Token creation form payload handed to the external token factory.
///
/// The factory binding itself lives outside this workspace; the payload type
/// is shared here so the form, the factory call, and the pinned metadata all
/// agree on the field vocabulary.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenDeployment {
    /// Display name of the token.
    pub name: String,
    /// Ticker symbol, without any `$` prefix.
    pub symbol: String,
    /// Total token supply, as a decimal string.
    pub total_supply: String,
    /// Initial liquidity in ETH, as a decimal string.
    pub initial_liquidity: String,
    /// Liquidity lock period in days.
    pub lock_period_days: u32,
}

impl Default for TokenDeployment {
    fn default() -> Self {
        Self {
            name: String::new(),
            symbol: String::new(),
            total_supply: "1000000000".to_string(),
            initial_liquidity: "0.001".to_string(),
            lock_period_days: 365,
        }
    }
}
