use crate::{common::null_as_default, gateway::GatewayResponse};
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Transfer from the merchant balance to a bank account or mobile wallet.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Builder, Validate)]
#[builder(setter(into))]
pub struct BankTransfer {
    #[validate(length(min = 1, message = "account name is required"))]
    pub account_name: String,
    #[validate(length(min = 1, message = "account number is required"))]
    pub account_number: String,
    #[validate(length(min = 1, message = "amount is required"))]
    pub amount: String,
    #[builder(default, setter(into, strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beneficiary_name: Option<String>,
    #[validate(length(min = 1, message = "currency is required"))]
    pub currency: String,
    #[validate(length(min = 1, message = "reference is required"))]
    pub reference: String,
    /// Identifier of the destination bank, as returned by [`BanksApi::list`](crate::apis::banks::BanksApi::list).
    #[validate(range(min = 1, message = "bank code is required"))]
    pub bank_code: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct BankTransferResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub data: String,
}

impl GatewayResponse for BankTransferResponse {
    fn status(&self) -> &str {
        &self.status
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Batch of transfers executed together.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Builder, Validate)]
#[builder(setter(into))]
pub struct BulkTransferRequest {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "currency is required"))]
    pub currency: String,
    /// Transfers in the batch, in the order they should be executed.
    #[validate(length(min = 1, message = "bulk data must contain at least one transfer"))]
    pub bulk_data: Vec<BulkData>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct BulkData {
    pub account_name: String,
    pub account_number: String,
    pub amount: String,
    pub reference: String,
    pub bank_code: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct BulkTransferResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub data: BulkTransferData,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct BulkTransferData {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    pub created_at: Option<DateTime<Utc>>,
}

impl GatewayResponse for BulkTransferResponse {
    fn status(&self) -> &str {
        &self.status
    }

    fn message(&self) -> &str {
        &self.message
    }
}
