//! Balance table extraction.
//!
//! The balance page renders its ledger as a flat run of two-cell rows
//! (`<td>label</td><td class='sum'><b>value</b></td>`). Rows carry no stable
//! identifiers, so values are assigned by their position in document order
//! according to [`LAYOUT`]. A change in the portal's row order silently
//! misassigns fields; the layout is the single place to update when that happens.

use std::sync::LazyLock;

use regex::Regex;

use super::BalanceInfo;
use crate::core::ErcError;

static ROW_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<td>(.+?)</td>\s+?<td class=['"]sum['"]><b>(.*?)</b></td>"#)
        .expect("valid balance row regex")
});

/// Rows in a complete table (month, credit, debit and end-of-period sections).
pub(crate) const FULL_TABLE_ROWS: usize = 11;
/// Rows needed for the required sections (month and credit).
pub(crate) const MIN_TABLE_ROWS: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Part {
    Total,
    Company,
    Repair,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Field {
    Month,
    Credit(Part),
    Debit(Part),
    AtTheEnd(Part),
}

struct Section {
    name: &'static str,
    required: bool,
    cells: &'static [(Field, usize)],
}

/// Row index of every field. Index 0 is the account header and index 8 the
/// end-of-period label; neither carries data. `AtTheEnd.total` is computed.
const LAYOUT: &[Section] = &[
    Section {
        name: "month",
        required: true,
        cells: &[(Field::Month, 1)],
    },
    Section {
        name: "credit",
        required: true,
        cells: &[
            (Field::Credit(Part::Total), 2),
            (Field::Credit(Part::Company), 3),
            (Field::Credit(Part::Repair), 4),
        ],
    },
    Section {
        name: "debit",
        required: false,
        cells: &[
            (Field::Debit(Part::Total), 5),
            (Field::Debit(Part::Company), 6),
            (Field::Debit(Part::Repair), 7),
        ],
    },
    Section {
        name: "at_the_end",
        required: false,
        cells: &[
            (Field::AtTheEnd(Part::Company), 9),
            (Field::AtTheEnd(Part::Repair), 10),
        ],
    },
];

/// Parse the decoded balance page.
///
/// Fails with [`ErcError::NoMatch`] when fewer than [`MIN_TABLE_ROWS`] rows are found.
/// Optional sections whose rows are missing stay at zero.
pub(crate) fn parse_balance(html: &str) -> Result<BalanceInfo, ErcError> {
    let values: Vec<&str> = ROW_RE
        .captures_iter(html)
        .map(|c| c.get(2).map_or("", |m| m.as_str()))
        .collect();

    if values.len() < MIN_TABLE_ROWS {
        tracing::warn!(rows = values.len(), "balance table not found");
        return Err(ErcError::NoMatch { page: "balance" });
    }
    if values.len() < FULL_TABLE_ROWS {
        tracing::warn!(rows = values.len(), "partial balance table");
    } else if values.len() > FULL_TABLE_ROWS {
        tracing::debug!(rows = values.len(), "ignoring extra balance rows");
    }

    let mut info = BalanceInfo::default();
    for section in LAYOUT {
        let present = section.cells.iter().all(|&(_, idx)| idx < values.len());
        if !present {
            if section.required {
                return Err(ErcError::NoMatch { page: "balance" });
            }
            tracing::debug!(section = section.name, "section missing from balance table");
            continue;
        }
        for &(field, idx) in section.cells {
            assign(&mut info, field, values[idx]);
        }
    }
    info.at_the_end.total = info.at_the_end.company_part + info.at_the_end.repair_part;

    Ok(info)
}

fn assign(info: &mut BalanceInfo, field: Field, raw: &str) {
    let (details, part) = match field {
        Field::Month => {
            info.month = raw.trim().to_string();
            return;
        }
        Field::Credit(p) => (&mut info.credit, p),
        Field::Debit(p) => (&mut info.debit, p),
        Field::AtTheEnd(p) => (&mut info.at_the_end, p),
    };
    let slot = match part {
        Part::Total => &mut details.total,
        Part::Company => &mut details.company_part,
        Part::Repair => &mut details.repair_part,
    };
    *slot = parse_amount(raw);
}

/// Best-effort number parsing: a cell that is not a number reads as zero.
fn parse_amount(raw: &str) -> f64 {
    let cleaned: String = raw
        .replace("&nbsp;", "")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    let cleaned = if cleaned.contains('.') {
        cleaned
    } else {
        cleaned.replace(',', ".")
    };
    cleaned.parse::<f64>().unwrap_or(0.0)
}
