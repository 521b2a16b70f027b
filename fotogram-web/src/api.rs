//! HTTP client for the auth endpoints.
//!
//! Every endpoint answers 200 with either the success payload or an
//! `{ "error": ... }` object, so responses decode into
//! [`ServerReply`] and transport problems surface as [`reqwest::Error`].

use once_cell::unsync::OnceCell;
use reqwest::Client;
use shared::models::{
    CredentialGrant, GoogleLoginRequest, ServerReply, SigninRequest, SignupAccepted, SignupRequest,
};

use crate::config::FrontendConfig;

thread_local! {
    static SHARED_CLIENT: OnceCell<FotogramClient> = OnceCell::new();
}

/// API client for the Fotogram backend.
#[derive(Clone, Debug)]
pub struct FotogramClient {
    /// Origin requests are sent to, without a trailing slash.
    pub base_url: String,
    client: Client,
}

impl FotogramClient {
    /// Create a client against the given origin.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// The shared per-thread client, configured from [`FrontendConfig`].
    /// An unset base url resolves to the page origin; the fetch backend
    /// only accepts absolute urls.
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| {
                let config = FrontendConfig::default();
                if config.api_base_url().is_empty() {
                    Self::new(&Self::page_origin())
                } else {
                    Self::new(config.api_base_url())
                }
            })
            .clone()
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Origin of the current page. Empty outside a browser, which only
    /// happens in native test builds where [`FotogramClient::shared`] is
    /// never used.
    fn page_origin() -> String {
        web_sys::window()
            .and_then(|window| window.location().origin().ok())
            .unwrap_or_default()
    }

    /// Register a new account.
    pub async fn signup(
        &self,
        request: &SignupRequest,
    ) -> Result<ServerReply<SignupAccepted>, reqwest::Error> {
        let response = self
            .client
            .post(self.api_url("/signup"))
            .json(request)
            .send()
            .await?;
        response.json().await
    }

    /// Exchange email and password for a credential grant.
    pub async fn signin(
        &self,
        request: &SigninRequest,
    ) -> Result<ServerReply<CredentialGrant>, reqwest::Error> {
        let response = self
            .client
            .post(self.api_url("/signin"))
            .json(request)
            .send()
            .await?;
        response.json().await
    }

    /// Exchange a decoded Google identity for a credential grant. Signs the
    /// user up on first contact and in on every later one.
    pub async fn google_login(
        &self,
        request: &GoogleLoginRequest,
    ) -> Result<ServerReply<CredentialGrant>, reqwest::Error> {
        let response = self
            .client
            .post(self.api_url("/googleLogin"))
            .json(request)
            .send()
            .await?;
        response.json().await
    }
}
