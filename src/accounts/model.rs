use serde::Serialize;

/// A personal account listed in the private office.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Account {
    pub number: String,
    pub address: String,
}
