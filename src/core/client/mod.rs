//! Public client surface + builder.
//! Internals are split into `auth` (login + session cache) and `constants` (UA + defaults).

mod auth;
pub(crate) mod constants;

use crate::core::ErcError;
use constants::{DEFAULT_LOGIN_URL, DEFAULT_PRIVATE_OFFICE_URL, DEFAULT_TIMEOUT, USER_AGENT};
use reqwest::Client;
use reqwest::redirect::Policy;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use url::Url;

pub(crate) use auth::Session;

/// Login and password for the private office.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    login: String,
    password: String,
}

impl Credentials {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
        }
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub(crate) fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("login", &self.login)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Client for one set of credentials.
///
/// Logs in lazily on the first call and reuses that session for every later call.
/// Clones share the session; separate clients never do.
#[derive(Debug, Clone)]
pub struct ErcClient {
    http: Client,
    credentials: Arc<Credentials>,
    private_office_url: Url,
    login_url: Url,

    session: Arc<RwLock<Option<Session>>>,
    login_lock: Arc<Mutex<()>>,
}

impl ErcClient {
    /// Create a new builder for the given credentials.
    pub fn builder(credentials: Credentials) -> ErcClientBuilder {
        ErcClientBuilder::new(credentials)
    }

    /// Client with the default endpoints and transport policy.
    pub fn new(credentials: Credentials) -> Result<Self, ErcError> {
        Self::builder(credentials).build()
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn private_office_url(&self) -> &Url {
        &self.private_office_url
    }
    pub(crate) fn login_url(&self) -> &Url {
        &self.login_url
    }
}

/// Never follow redirects: log the attempt and hand the 3xx response back to the caller.
///
/// The login step expects that 3xx; every other caller reports it as `RedirectBlocked`.
fn redirect_policy() -> Policy {
    Policy::custom(|attempt| {
        tracing::info!(
            status = attempt.status().as_u16(),
            location = %attempt.url(),
            "redirect not followed"
        );
        attempt.stop()
    })
}

/* ----------------------- Builder ----------------------- */

pub struct ErcClientBuilder {
    credentials: Credentials,
    user_agent: Option<String>,
    private_office_url: Option<Url>,
    login_url: Option<Url>,
    timeout: Option<Duration>,
}

impl ErcClientBuilder {
    fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            user_agent: None,
            private_office_url: None,
            login_url: None,
            timeout: None,
        }
    }

    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the private office page (balance, receipts, account listing).
    pub fn private_office_url(mut self, url: Url) -> Self {
        self.private_office_url = Some(url);
        self
    }

    /// Override the page the login form is posted to.
    pub fn login_url(mut self, url: Url) -> Self {
        self.login_url = Some(url);
        self
    }

    /// Override the request timeout. Default: 5 seconds.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    pub fn build(self) -> Result<ErcClient, ErcError> {
        let private_office_url = match self.private_office_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_PRIVATE_OFFICE_URL)?,
        };
        let login_url = match self.login_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_LOGIN_URL)?,
        };

        let http = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .cookie_store(true)
            .redirect(redirect_policy())
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()?;

        Ok(ErcClient {
            http,
            credentials: Arc::new(self.credentials),
            private_office_url,
            login_url,
            session: Arc::new(RwLock::new(None)),
            login_lock: Arc::new(Mutex::new(())),
        })
    }
}
