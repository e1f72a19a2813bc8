//! Personal accounts attached to the login.

mod model;
mod parse;

pub use model::Account;

use crate::core::net::{self, PageRequest};
use crate::{ErcClient, ErcError};

impl ErcClient {
    /// List the accounts shown in the private office, in page order.
    ///
    /// # Errors
    ///
    /// Returns [`ErcError::Auth`] if login fails and [`ErcError::NoMatch`] if the
    /// listing contains no account links.
    #[tracing::instrument(skip(self), err)]
    pub async fn accounts(&self) -> Result<Vec<Account>, ErcError> {
        let session = self.ensure_session().await?;

        let mut url = self.private_office_url().clone();
        url.query_pairs_mut().append_key_only("ls");

        let html = net::fetch_text(&session, PageRequest::Get(url)).await?;
        parse::parse_accounts(&html)
    }
}
