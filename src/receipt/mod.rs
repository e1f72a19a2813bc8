//! Payment receipt ("quitance") generated by the portal.

use crate::core::net::{self, PageRequest};
use crate::{ErcClient, ErcError};

impl ErcClient {
    /// Download the current receipt for `account`.
    ///
    /// The body is returned exactly as the portal sent it.
    #[tracing::instrument(skip(self), err)]
    pub async fn receipt(&self, account: &str) -> Result<Vec<u8>, ErcError> {
        let session = self.ensure_session().await?;

        let mut url = self.private_office_url().clone();
        url.query_pairs_mut()
            .append_pair("receipt", account)
            .append_key_only("quitance");

        let bytes = net::fetch_bytes(&session, PageRequest::Get(url)).await?;
        tracing::debug!(len = bytes.len(), "receipt downloaded");
        Ok(bytes)
    }
}
