use serde::Serialize;

/// Amounts of one ledger section, split between the management company and the repair fund.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Details {
    pub total: f64,
    pub company_part: f64,
    pub repair_part: f64,
}

/// Ledger summary for one settlement period.
///
/// Sections the portal did not render are left at zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceInfo {
    /// Settlement period label, verbatim from the page.
    pub month: String,
    /// Credit section of the ledger.
    pub credit: Details,
    /// Debit section; zero when the table has no debit rows.
    pub debit: Details,
    /// Outstanding at the end of the period. `total` is always `company_part + repair_part`.
    pub at_the_end: Details,
}
