//! Unofficial Rust client for the [Chapa](https://chapa.co) payment gateway.
//!
//! Check out also the official Chapa [API documentation](https://developer.chapa.co/docs).
//!
//! # Usage
//!
//! ## Prerequisites
//!
//! [Sign up](https://dashboard.chapa.co/register) for a Chapa account and grab your secret key
//! from the dashboard. Test keys (`CHASECK_TEST-...`) hit the same API as live keys, but no real
//! money is moved.
//!
//! ## Initialize a new `ChapaClient`
//!
//! ```rust,no_run
//! # use chapa_rust::{ChapaClient, Error};
//! # fn main() -> Result<(), Error> {
//! let chapa = ChapaClient::new("CHASECK_TEST-some-secret-key")?;
//! # Ok(())
//! # }
//! ```
//!
//! Every request is sent with a 60 seconds timeout and a fresh connection. Both can be changed
//! through [`ChapaClient::builder`](crate::client::ChapaClient::builder).
//!
//! ## Accept a payment
//!
//! ```rust,no_run
//! # use chapa_rust::{ChapaClient, Error, GatewayResponse, apis::payments::*};
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let chapa: ChapaClient = unreachable!();
//! #
//! let request = PaymentRequestBuilder::default()
//!     .amount(100.0)
//!     .currency("ETB")
//!     .email("abebe@bikila.com")
//!     .first_name("Abebe")
//!     .last_name("Bikila")
//!     .callback_url("https://example.com/callback")
//!     .tx_ref("my-unique-reference")
//!     .build()
//!     .unwrap();
//!
//! let res = chapa.payments.initiate(&request).await?;
//! if res.is_success() {
//!     println!("Redirect the customer to {}", res.data.checkout_url);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Chapa reports most business failures with a `200 OK` and a `status` other than `"success"`,
//! so a successful call does not mean the payment was accepted: always check
//! [`GatewayResponse::is_success`](crate::gateway::GatewayResponse::is_success), or turn the
//! failure into an error with
//! [`GatewayResponse::ensure_success`](crate::gateway::GatewayResponse::ensure_success).
//!
//! ## Verify a payment
//!
//! ```rust,no_run
//! # use chapa_rust::{ChapaClient, Error, GatewayResponse};
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let chapa: ChapaClient = unreachable!();
//! #
//! let res = chapa.payments.verify("my-unique-reference").await?.ensure_success()?;
//! let currency = res.data.currency.unwrap_or_default();
//! println!("Paid {} {} (fee {})", res.data.amount, currency, res.data.transaction_fee);
//! # Ok(())
//! # }
//! ```
//!
//! ## More examples
//!
//! Look into the [`demos`](../demos) for more example usages of this library.
//!
//! To run a demo, use `cargo run` like this:
//!
//! ```shell
//! CHAPA_API_KEY=CHASECK_TEST-... CHAPA_CALLBACK_URL=https://example.com/callback \
//!     cargo run --example initiate_payment
//! ```

#![deny(missing_debug_implementations)]
#![forbid(unsafe_code)]

pub mod apis;
pub mod checkout;
pub mod client;
mod common;
pub mod error;
pub mod gateway;
mod middlewares;

pub use client::ChapaClient;
pub use error::Error;
pub use gateway::{GatewayResponse, PaymentGateway};
