use crate::{
    apis::{
        transfers::{BankTransfer, BankTransferResponse, BulkTransferRequest, BulkTransferResponse},
        ChapaClientInner,
    },
    common::{BULK_TRANSFERS_PATH, TRANSFERS_PATH},
    Error,
};
use std::sync::Arc;
use validator::Validate;

/// Chapa transfers APIs client.
#[derive(Clone, Debug)]
pub struct TransfersApi {
    inner: Arc<ChapaClientInner>,
}

impl TransfersApi {
    pub(crate) fn new(inner: Arc<ChapaClientInner>) -> Self {
        Self { inner }
    }

    /// Transfers money from the merchant balance to a bank account.
    #[tracing::instrument(
        name = "Transfer to Bank",
        skip(self, request),
        fields(
            reference = %request.reference,
            amount = %request.amount,
            currency = %request.currency,
            bank_code = request.bank_code,
        )
    )]
    pub async fn transfer_to_bank(
        &self,
        request: &BankTransfer,
    ) -> Result<BankTransferResponse, Error> {
        if let Err(errors) = request.validate() {
            tracing::warn!("Refusing to send invalid transfer: {}", errors);
            return Err(errors.into());
        }

        self.inner
            .post(self.inner.endpoint(TRANSFERS_PATH)?, request)
            .await
    }

    /// Queues a batch of transfers.
    #[tracing::instrument(
        name = "Bulk Transfer",
        skip(self, request),
        fields(
            title = %request.title,
            currency = %request.currency,
            transfers = request.bulk_data.len() as u64,
        )
    )]
    pub async fn bulk_transfer(
        &self,
        request: &BulkTransferRequest,
    ) -> Result<BulkTransferResponse, Error> {
        if let Err(errors) = request.validate() {
            tracing::warn!("Refusing to send invalid bulk transfer: {}", errors);
            return Err(errors.into());
        }

        self.inner
            .post(self.inner.endpoint(BULK_TRANSFERS_PATH)?, request)
            .await
    }
}
