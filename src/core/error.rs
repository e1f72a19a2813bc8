use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum ErcError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Logging into the private office failed.
    ///
    /// The message keeps the underlying reason (status or transport failure) for
    /// diagnostics; callers should only rely on the variant.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// The portal answered an authenticated request with an unsuccessful status.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The portal tried to redirect an authenticated request (usually an expired session).
    #[error("redirect blocked: {status} at {url} (location: {})", location.as_deref().unwrap_or("-"))]
    RedirectBlocked {
        /// The 3xx status code.
        status: u16,
        /// The URL that was requested.
        url: String,
        /// The `Location` header the portal sent, if any.
        location: Option<String>,
    },

    /// The page did not contain enough matches of the expected markup.
    #[error("no match: {page} page does not contain the expected markup")]
    NoMatch {
        /// Which page was being parsed.
        page: &'static str,
    },

    /// The settings file could not be read or decoded.
    #[error("settings error: {0}")]
    Settings(String),
}

impl ErcError {
    /// True for login failures.
    pub fn is_auth(&self) -> bool {
        matches!(self, ErcError::Auth(_))
    }

    /// True for failures of an authenticated request (transport, status or blocked redirect).
    pub fn is_fetch(&self) -> bool {
        matches!(
            self,
            ErcError::Http(_) | ErcError::Status { .. } | ErcError::RedirectBlocked { .. }
        )
    }

    /// True when a page was fetched but could not be parsed.
    pub fn is_parse(&self) -> bool {
        matches!(self, ErcError::NoMatch { .. })
    }
}
