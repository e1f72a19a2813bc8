use std::sync::LazyLock;

use regex::Regex;

use super::Account;
use crate::core::ErcError;

// Account link (`private_office.htp?ls=<digits>`) followed by the address cell.
static ACCOUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"<a\s+href=["'][^"']*private_office\.htp\?ls=\d+["'][^>]*>\s*([^<]+?)\s*</a>\s*(?:</td>\s*)?<td[^>]*>\s*([^<]*?)\s*</td>"#,
    )
    .expect("valid account regex")
});

/// Every account on the listing page, in document order.
pub(crate) fn parse_accounts(html: &str) -> Result<Vec<Account>, ErcError> {
    let accounts: Vec<Account> = ACCOUNT_RE
        .captures_iter(html)
        .map(|c| Account {
            number: c[1].to_string(),
            address: c[2].to_string(),
        })
        .collect();

    if accounts.is_empty() {
        tracing::warn!("account listing not found");
        return Err(ErcError::NoMatch { page: "accounts" });
    }
    Ok(accounts)
}
