use crate::errors::Error;

use super::requests::request_logout;
use super::storage::clear_session;

/// The browser effects the sign-out flow touches, passed in rather than
/// reached for ambiently.
pub trait SessionBackend {
    async fn logout(&self) -> Result<String, Error>;
    fn clear_markers(&self);
    fn redirect(&self, url: &str);
}

pub struct WebSession;

impl SessionBackend for WebSession {
    async fn logout(&self) -> Result<String, Error> {
        request_logout().await
    }

    fn clear_markers(&self) {
        clear_session();
    }

    fn redirect(&self, url: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(url);
        }
    }
}

/// Terminate the session and leave the page. On failure the markers stay in
/// place and no navigation happens; the caller decides what to tell the user.
pub async fn sign_out<B: SessionBackend>(backend: &B) -> Result<String, Error> {
    let url = backend.logout().await?;
    backend.clear_markers();
    backend.redirect(&url);
    Ok(url)
}
