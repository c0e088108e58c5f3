use crate::{common::null_as_default, gateway::GatewayResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct BanksResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub data: Vec<Bank>,
}

impl GatewayResponse for BanksResponse {
    fn status(&self) -> &str {
        &self.status
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Bank or mobile wallet supported for transfers.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Bank {
    /// Identifier to use as `bank_code` in transfers.
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub swift: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Number of digits of an account number at this bank.
    #[serde(deserialize_with = "null_as_default")]
    pub acct_length: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub country_id: i64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub is_rtgs: Option<i64>,
    pub is_mobilemoney: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,
}

impl Bank {
    /// Returns `true` if transfers to this bank are settled through RTGS.
    pub fn supports_rtgs(&self) -> bool {
        self.is_rtgs.map_or(false, |flag| flag != 0)
    }

    /// Returns `true` if this is a mobile money wallet rather than a bank.
    pub fn is_mobile_money(&self) -> bool {
        self.is_mobilemoney.map_or(false, |flag| flag != 0)
    }
}
