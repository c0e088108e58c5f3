use crate::{
    apis::payments::{PaymentRequest, Transaction, TransactionList, TransactionStatus},
    checkout::{random_reference, CheckoutError, CheckoutForm, InMemoryStore},
    GatewayResponse, PaymentGateway,
};
use chrono::Utc;
use std::sync::Arc;

/// Length of the transaction references generated for each checkout.
const TX_REF_LENGTH: usize = 10;

/// Checks out registered customers through a [`PaymentGateway`](crate::PaymentGateway) and
/// keeps track of the resulting transactions.
#[derive(Debug, Clone)]
pub struct CheckoutService<G> {
    gateway: G,
    store: Arc<InMemoryStore>,
    callback_url: String,
}

impl<G: PaymentGateway> CheckoutService<G> {
    /// Creates a new service. Chapa will notify `callback_url` once each payment completes.
    pub fn new(gateway: G, store: Arc<InMemoryStore>, callback_url: impl Into<String>) -> Self {
        Self {
            gateway,
            store,
            callback_url: callback_url.into(),
        }
    }

    /// Starts a payment for the given customer and records it as a pending transaction.
    #[tracing::instrument(
        name = "Checkout",
        skip(self, form),
        fields(amount = form.amount, currency = %form.currency)
    )]
    pub async fn checkout(
        &self,
        customer_id: i64,
        form: &CheckoutForm,
    ) -> Result<Transaction, CheckoutError> {
        let customer = self
            .store
            .customer_by_id(customer_id)
            .cloned()
            .ok_or(CheckoutError::CustomerNotFound(customer_id))?;

        let invoice = PaymentRequest {
            amount: form.amount,
            currency: form.currency.clone(),
            email: customer.email.clone(),
            first_name: customer.first_name.clone(),
            last_name: customer.last_name.clone(),
            phone_number: customer.mobile.clone(),
            callback_url: Some(self.callback_url.clone()),
            return_url: None,
            tx_ref: random_reference(TX_REF_LENGTH),
            customization: None,
        };

        let response = self.gateway.initiate_payment(&invoice).await?;
        if !response.is_success() {
            tracing::error!(
                status = %response.status,
                message = %response.message,
                "Failed to checkout customer"
            );
            return Err(CheckoutError::Rejected {
                message: response.message,
            });
        }

        let transaction = Transaction {
            status: TransactionStatus::Pending,
            trans_id: invoice.tx_ref,
            amount: format!("{:.2}", form.amount),
            currency: form.currency.clone(),
            created_at: Some(Utc::now()),
            customer: Some(customer),
            ..Default::default()
        };
        self.store.save_transaction(transaction.clone()).await;

        tracing::info!(trans_id = %transaction.trans_id, "Checkout started");

        Ok(transaction)
    }

    /// Lists every transaction recorded so far, newest first.
    pub async fn list_transactions(&self) -> TransactionList {
        TransactionList {
            transactions: self.store.transactions().await,
            pagination: None,
        }
    }
}
