//! Frontend configuration.
//!
//! Values are baked in at compile time so the shipped bundle has no runtime
//! config fetch. Override them through environment variables when invoking
//! `trunk build`.

/// Compile-time settings for the API origin and the Google client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Origin the auth endpoints live on. Empty means same-origin.
    pub api_base_url: String,
    /// OAuth client id handed to Google Identity Services.
    pub google_client_id: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("FOTOGRAM_API_BASE_URL").unwrap_or("").to_string(),
            google_client_id: option_env!("FOTOGRAM_GOOGLE_CLIENT_ID")
                .unwrap_or("407408718192.apps.googleusercontent.com")
                .to_string(),
        }
    }
}

impl FrontendConfig {
    /// Origin for API requests, without a trailing slash.
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Client id for the federated sign-in button.
    pub fn google_client_id(&self) -> &str {
        &self.google_client_id
    }
}
