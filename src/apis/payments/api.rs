use crate::{
    apis::{
        payments::{PaymentRequest, PaymentResponse, TransactionsResponse, VerifyResponse},
        ChapaClientInner,
    },
    common::{INITIALIZE_PAYMENT_PATH, TRANSACTIONS_PATH, VERIFY_PAYMENT_PATH},
    Error,
};
use std::sync::Arc;
use urlencoding::encode;
use validator::Validate;

/// Chapa payments APIs client.
#[derive(Clone, Debug)]
pub struct PaymentsApi {
    inner: Arc<ChapaClientInner>,
}

impl PaymentsApi {
    pub(crate) fn new(inner: Arc<ChapaClientInner>) -> Self {
        Self { inner }
    }

    /// Initializes a new payment and returns the link to the hosted checkout page.
    ///
    /// The request is validated first; an invalid request is never sent.
    #[tracing::instrument(
        name = "Initiate Payment",
        skip(self, request),
        fields(
            tx_ref = %request.tx_ref,
            amount = request.amount,
            currency = %request.currency,
        )
    )]
    pub async fn initiate(&self, request: &PaymentRequest) -> Result<PaymentResponse, Error> {
        if let Err(errors) = request.validate() {
            tracing::warn!("Refusing to send invalid payment request: {}", errors);
            return Err(errors.into());
        }

        self.inner
            .post(self.inner.endpoint(INITIALIZE_PAYMENT_PATH)?, request)
            .await
    }

    /// Verifies the payment identified by the given transaction reference.
    ///
    /// An unknown reference is not an error: Chapa answers with a failed status and a message
    /// explaining why.
    #[tracing::instrument(name = "Verify Transaction", skip(self))]
    pub async fn verify(&self, tx_ref: &str) -> Result<VerifyResponse, Error> {
        let url = self
            .inner
            .endpoint(&format!("{}/{}", VERIFY_PAYMENT_PATH, encode(tx_ref)))?;

        self.inner.get(url).await
    }

    /// Lists the transactions of the merchant account.
    #[tracing::instrument(name = "List Transactions", skip(self))]
    pub async fn list_transactions(&self) -> Result<TransactionsResponse, Error> {
        self.inner
            .get(self.inner.endpoint(TRANSACTIONS_PATH)?)
            .await
    }
}
