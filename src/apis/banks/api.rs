use crate::{
    apis::{banks::BanksResponse, ChapaClientInner},
    common::BANKS_PATH,
    Error,
};
use std::sync::Arc;

/// Chapa banks APIs client.
#[derive(Clone, Debug)]
pub struct BanksApi {
    inner: Arc<ChapaClientInner>,
}

impl BanksApi {
    pub(crate) fn new(inner: Arc<ChapaClientInner>) -> Self {
        Self { inner }
    }

    /// Lists the banks and wallets transfers can be sent to.
    #[tracing::instrument(name = "List Banks", skip(self))]
    pub async fn list(&self) -> Result<BanksResponse, Error> {
        self.inner.get(self.inner.endpoint(BANKS_PATH)?).await
    }
}
