//! Traits shared by every Chapa API.

use crate::{
    apis::{
        banks::BanksResponse,
        payments::{PaymentRequest, PaymentResponse, TransactionsResponse, VerifyResponse},
        transfers::{BankTransfer, BankTransferResponse, BulkTransferRequest, BulkTransferResponse},
    },
    common::SUCCESS_STATUS,
    ChapaClient, Error,
};
use async_trait::async_trait;

/// The operations offered by a payment gateway.
///
/// [`ChapaClient`](crate::ChapaClient) is the production implementation; code depending on this
/// trait instead of the concrete client can be exercised against an in-process fake.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// See [`PaymentsApi::initiate`](crate::apis::payments::PaymentsApi::initiate).
    async fn initiate_payment(&self, request: &PaymentRequest) -> Result<PaymentResponse, Error>;

    /// See [`PaymentsApi::verify`](crate::apis::payments::PaymentsApi::verify).
    async fn verify_transaction(&self, tx_ref: &str) -> Result<VerifyResponse, Error>;

    /// See [`TransfersApi::transfer_to_bank`](crate::apis::transfers::TransfersApi::transfer_to_bank).
    async fn transfer_to_bank(&self, request: &BankTransfer)
        -> Result<BankTransferResponse, Error>;

    /// See [`TransfersApi::bulk_transfer`](crate::apis::transfers::TransfersApi::bulk_transfer).
    async fn bulk_transfer(
        &self,
        request: &BulkTransferRequest,
    ) -> Result<BulkTransferResponse, Error>;

    /// See [`PaymentsApi::list_transactions`](crate::apis::payments::PaymentsApi::list_transactions).
    async fn list_transactions(&self) -> Result<TransactionsResponse, Error>;

    /// See [`BanksApi::list`](crate::apis::banks::BanksApi::list).
    async fn list_banks(&self) -> Result<BanksResponse, Error>;
}

#[async_trait]
impl PaymentGateway for ChapaClient {
    async fn initiate_payment(&self, request: &PaymentRequest) -> Result<PaymentResponse, Error> {
        self.payments.initiate(request).await
    }

    async fn verify_transaction(&self, tx_ref: &str) -> Result<VerifyResponse, Error> {
        self.payments.verify(tx_ref).await
    }

    async fn transfer_to_bank(
        &self,
        request: &BankTransfer,
    ) -> Result<BankTransferResponse, Error> {
        self.transfers.transfer_to_bank(request).await
    }

    async fn bulk_transfer(
        &self,
        request: &BulkTransferRequest,
    ) -> Result<BulkTransferResponse, Error> {
        self.transfers.bulk_transfer(request).await
    }

    async fn list_transactions(&self) -> Result<TransactionsResponse, Error> {
        self.payments.list_transactions().await
    }

    async fn list_banks(&self) -> Result<BanksResponse, Error> {
        self.banks.list().await
    }
}

/// A decoded Chapa response.
///
/// Chapa signals most failures through the `status` and `message` fields of an otherwise
/// well-formed response, so a call returning `Ok` may still carry a failed operation.
pub trait GatewayResponse {
    /// Status reported by Chapa, `"success"` when the operation went through.
    fn status(&self) -> &str;

    /// Human readable message attached to the response.
    fn message(&self) -> &str;

    /// Returns `true` if Chapa reported the operation as successful.
    fn is_success(&self) -> bool {
        self.status() == SUCCESS_STATUS
    }

    /// Turns a failed operation into an [`Error::BusinessFailure`](crate::Error::BusinessFailure).
    fn ensure_success(self) -> Result<Self, Error>
    where
        Self: Sized,
    {
        if self.is_success() {
            Ok(self)
        } else {
            Err(Error::BusinessFailure {
                status: self.status().to_string(),
                message: self.message().to_string(),
            })
        }
    }
}
