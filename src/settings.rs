//! User settings: portal login, password and the default account.
//!
//! Stored as JSON in `~/.erc/settings.json`:
//!
//! ```json
//! { "ErcLogin": "user", "ErcPassword": "secret", "AccountNumber": "300200100" }
//! ```

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use serde::Deserialize;

use crate::{Credentials, ErcError};

#[derive(Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Settings {
    pub erc_login: String,
    pub erc_password: String,
    #[serde(default)]
    pub account_number: String,
}

impl Settings {
    /// `~/.erc/settings.json` for the current user.
    pub fn default_path() -> Result<PathBuf, ErcError> {
        BaseDirs::new()
            .map(|dirs| dirs.home_dir().join(".erc").join("settings.json"))
            .ok_or_else(|| ErcError::Settings("cannot resolve home directory".into()))
    }

    pub fn load(path: &Path) -> Result<Self, ErcError> {
        let raw = fs::read_to_string(path)
            .map_err(|e| ErcError::Settings(format!("read {}: {e}", path.display())))?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ErcError> {
        serde_json::from_str(raw).map_err(|e| ErcError::Settings(format!("parse: {e}")))
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(&self.erc_login, &self.erc_password)
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("erc_login", &self.erc_login)
            .field("erc_password", &"<redacted>")
            .field("account_number", &self.account_number)
            .finish()
    }
}
