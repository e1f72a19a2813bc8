//! Authenticated requests against the private office and body decoding.

use encoding_rs::WINDOWS_1251;
use reqwest::header::LOCATION;
use url::Url;

use crate::core::{ErcError, client::Session};

/// One request against a portal page.
#[derive(Debug, Clone)]
pub(crate) enum PageRequest {
    Get(Url),
    PostForm(Url, Vec<(&'static str, String)>),
}

impl PageRequest {
    fn url(&self) -> &Url {
        match self {
            PageRequest::Get(url) | PageRequest::PostForm(url, _) => url,
        }
    }
}

/// Send the request with the session transport and return the raw body.
///
/// 3xx is reported as a blocked redirect, any other non-2xx as a status error.
pub(crate) async fn fetch_bytes(session: &Session, req: PageRequest) -> Result<Vec<u8>, ErcError> {
    let url = req.url().to_string();
    let builder = match &req {
        PageRequest::Get(u) => session.http().get(u.clone()),
        PageRequest::PostForm(u, form) => session.http().post(u.clone()).form(form),
    };

    let resp = builder.send().await?;
    let status = resp.status();

    if status.is_redirection() {
        let location = resp
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        tracing::warn!(status = status.as_u16(), %url, ?location, "portal redirected an authenticated request");
        return Err(ErcError::RedirectBlocked {
            status: status.as_u16(),
            url,
            location,
        });
    }
    if !status.is_success() {
        return Err(ErcError::Status {
            status: status.as_u16(),
            url,
        });
    }

    Ok(resp.bytes().await?.to_vec())
}

/// Like [`fetch_bytes`], decoding the page from Windows-1251.
pub(crate) async fn fetch_text(session: &Session, req: PageRequest) -> Result<String, ErcError> {
    let bytes = fetch_bytes(session, req).await?;
    Ok(decode_page(&bytes))
}

/// Decode a portal page. Malformed bytes become U+FFFD instead of failing.
pub(crate) fn decode_page(bytes: &[u8]) -> String {
    let (text, had_errors) = WINDOWS_1251.decode_without_bom_handling(bytes);
    if had_errors {
        tracing::debug!(len = bytes.len(), "page contained undecodable bytes");
    }
    text.into_owned()
}
