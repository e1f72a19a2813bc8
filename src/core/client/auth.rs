//! Login and session caching for the private office.

use crate::core::error::ErcError;
use reqwest::{Client, StatusCode};

/// A transport that has passed the login step.
///
/// The portal session cookie lives in the transport's cookie store.
#[derive(Debug, Clone)]
pub(crate) struct Session {
    http: Client,
}

impl Session {
    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
}

impl super::ErcClient {
    /// Return the cached session, logging in first if there is none yet.
    pub(crate) async fn ensure_session(&self) -> Result<Session, ErcError> {
        // Fast path: already logged in.
        if let Some(session) = self.session.read().await.as_ref() {
            return Ok(session.clone());
        }

        // Slow path: only one task performs the login.
        let _guard = self.login_lock.lock().await;

        // Another task might have logged in while this one was waiting.
        if let Some(session) = self.session.read().await.as_ref() {
            return Ok(session.clone());
        }

        let session = self.login().await?;
        *self.session.write().await = Some(session.clone());
        Ok(session)
    }

    /// The portal accepts a login by answering `302 Found`; anything else is a rejection.
    async fn login(&self) -> Result<Session, ErcError> {
        let creds = self.credentials();
        tracing::info!(login = %creds.login(), url = %self.login_url(), "logging in");

        let form = [
            ("smth", ""),
            ("username", creds.login()),
            ("password", creds.password()),
        ];
        let resp = self
            .http()
            .post(self.login_url().clone())
            .form(&form)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "login request failed");
                ErcError::Auth(format!("transport failure: {e}"))
            })?;

        let status = resp.status();
        if status != StatusCode::FOUND {
            tracing::warn!(status = status.as_u16(), "login rejected");
            return Err(ErcError::Auth(format!(
                "login rejected: status {}",
                status.as_u16()
            )));
        }

        tracing::info!("login accepted");
        Ok(Session {
            http: self.http().clone(),
        })
    }
}
