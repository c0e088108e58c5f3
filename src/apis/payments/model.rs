use crate::{
    common::{null_as_default, object_or_none},
    gateway::GatewayResponse,
};
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use validator::{Validate, ValidationError};

/// Request to accept a payment through the Chapa hosted checkout.
///
/// Only the amount, the currency and the transaction reference are mandatory.
/// Email and URLs are format-checked when present.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Builder, Validate)]
pub struct PaymentRequest {
    #[validate(
        range(exclusive_min = 0.0, message = "amount is required"),
        custom(function = "finite_amount")
    )]
    pub amount: f64,
    #[builder(setter(into))]
    #[validate(length(min = 1, message = "currency is required"))]
    pub currency: String,
    #[builder(default, setter(into, strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "email must be a valid email address"))]
    pub email: Option<String>,
    #[builder(default, setter(into, strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[builder(default, setter(into, strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[builder(default, setter(into, strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[builder(default, setter(into, strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "callback url must be a valid URL"))]
    pub callback_url: Option<String>,
    #[builder(default, setter(into, strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "return url must be a valid URL"))]
    pub return_url: Option<String>,
    #[builder(setter(into))]
    #[validate(length(min = 1, message = "transaction reference is required"))]
    pub tx_ref: String,
    /// Free-form settings for the hosted checkout page (`title`, `description`, `logo`, ...),
    /// forwarded to Chapa as-is.
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customization: Option<HashMap<String, Value>>,
}

// Infinite amounts are serialized as `null`.
fn finite_amount(amount: f64) -> Result<(), ValidationError> {
    if amount.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("finite").with_message("amount must be a finite number".into()))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct PaymentResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub data: CheckoutData,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CheckoutData {
    /// Link to the hosted checkout page the customer should be redirected to.
    #[serde(deserialize_with = "null_as_default")]
    pub checkout_url: String,
}

impl GatewayResponse for PaymentResponse {
    fn status(&self) -> &str {
        &self.status
    }

    fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct VerifyResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub data: VerifyData,
}

/// Details of a verified payment.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct VerifyData {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub currency: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub amount: f64,
    /// Fee Chapa charged on the payment.
    #[serde(rename = "charge", deserialize_with = "null_as_default")]
    pub transaction_fee: f64,
    pub mode: Option<String>,
    pub method: Option<String>,
    #[serde(rename = "type")]
    pub r#type: Option<String>,
    pub status: Option<String>,
    pub reference: Option<String>,
    pub tx_ref: Option<String>,
    /// `None` unless Chapa sends a JSON object.
    #[serde(deserialize_with = "object_or_none")]
    pub customization: Option<HashMap<String, Value>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl GatewayResponse for VerifyResponse {
    fn status(&self) -> &str {
        &self.status
    }

    fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct TransactionsResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub data: TransactionList,
}

impl GatewayResponse for TransactionsResponse {
    fn status(&self) -> &str {
        &self.status
    }

    fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct TransactionList {
    #[serde(deserialize_with = "null_as_default")]
    pub transactions: Vec<Transaction>,
    pub pagination: Option<Pagination>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Transaction {
    #[serde(deserialize_with = "null_as_default")]
    pub status: TransactionStatus,
    #[serde(deserialize_with = "null_as_default")]
    pub ref_id: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub r#type: String,
    pub created_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,
    #[serde(deserialize_with = "null_as_default")]
    pub amount: String,
    #[serde(deserialize_with = "null_as_default")]
    pub charge: String,
    #[serde(deserialize_with = "null_as_default")]
    pub trans_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub payment_method: String,
    pub customer: Option<Customer>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Success,
    Failed,
    /// Any status this client does not know about.
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Customer {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub mobile: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Pagination {
    #[serde(deserialize_with = "null_as_default")]
    pub per_page: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub current_page: u32,
    pub first_page_url: Option<String>,
    pub next_page_url: Option<String>,
    pub prev_page_url: Option<String>,
}
