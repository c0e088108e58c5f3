//! A small checkout flow built on top of a [`PaymentGateway`](crate::PaymentGateway).
//!
//! Registered customers are looked up in an [`InMemoryStore`], charged through the gateway and
//! the resulting transactions are recorded as pending until Chapa calls back.

mod service;
mod store;

use crate::Error;
use serde::{Deserialize, Serialize};

pub use service::CheckoutService;
pub use store::{random_reference, InMemoryStore};

/// What a customer wants to pay.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CheckoutForm {
    pub amount: f64,
    pub currency: String,
}

/// Failures of [`CheckoutService::checkout`].
#[derive(thiserror::Error, Debug)]
pub enum CheckoutError {
    /// No customer is registered with the given id.
    #[error("customer {0} not found")]
    CustomerNotFound(i64),
    /// Chapa refused to initialize the payment.
    #[error("failed to checkout: {message}")]
    Rejected { message: String },
    /// The gateway call itself failed.
    #[error(transparent)]
    Gateway(#[from] Error),
}
