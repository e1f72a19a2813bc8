//! Ledger balance for one account over a one-month window.

mod model;
mod parse;

pub use model::{BalanceInfo, Details};

use chrono::{Months, NaiveDate};

use crate::core::client::constants::{BALANCE_VIEW, PORTAL_DATE_FORMAT};
use crate::core::net::{self, PageRequest};
use crate::{ErcClient, ErcError};

/// Start and end of the lookback window ending at `reference_date`, in portal format.
pub(crate) fn lookback_window(reference_date: NaiveDate) -> (String, String) {
    let start = reference_date
        .checked_sub_months(Months::new(1))
        .unwrap_or(reference_date);
    (
        start.format(PORTAL_DATE_FORMAT).to_string(),
        reference_date.format(PORTAL_DATE_FORMAT).to_string(),
    )
}

impl ErcClient {
    /// Fetch the balance of `account` for the month ending at `reference_date`.
    ///
    /// # Errors
    ///
    /// Returns [`ErcError::Auth`] if login fails, a fetch error if the portal rejects
    /// or redirects the query, and [`ErcError::NoMatch`] if the page has no balance table.
    #[tracing::instrument(skip(self), err)]
    pub async fn balance(
        &self,
        account: &str,
        reference_date: NaiveDate,
    ) -> Result<BalanceInfo, ErcError> {
        let session = self.ensure_session().await?;

        let mut url = self.private_office_url().clone();
        url.query_pairs_mut().append_pair("ls", account);

        let (start, end) = lookback_window(reference_date);
        let form = vec![("show", BALANCE_VIEW.to_string()), ("s_Date", start), ("e_Date", end)];

        let html = net::fetch_text(&session, PageRequest::PostForm(url, form)).await?;
        parse::parse_balance(&html)
    }
}
