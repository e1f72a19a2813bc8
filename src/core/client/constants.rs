//! Centralized constants for default endpoints, UA and transport policy.

use std::time::Duration;

/// Default desktop UA to avoid trivial bot blocking.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// Private office page: balance queries, receipts and the account listing.
pub(crate) const DEFAULT_PRIVATE_OFFICE_URL: &str =
    "https://www.erc.ur.ru/client/private_office/private_office.htp";

/// The login form posts to the private office page itself.
pub(crate) const DEFAULT_LOGIN_URL: &str = DEFAULT_PRIVATE_OFFICE_URL;

/// Fixed transport timeout.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

/// Date format the portal expects in `s_Date` / `e_Date`.
pub(crate) const PORTAL_DATE_FORMAT: &str = "%d-%m-%Y";

/// `show` value selecting the ledger view of the balance page.
pub(crate) const BALANCE_VIEW: &str = "3";
