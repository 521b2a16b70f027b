use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The credential response handed over by the Google Identity Services
/// button: an encoded ID token plus the OAuth client id it was issued for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GoogleCredential {
    /// The ID token in compact JWS form (`header.payload.signature`).
    pub credential: String,

    /// The OAuth client id the token was issued for.
    #[serde(rename = "clientId")]
    pub client_id: String,

    /// How the user triggered the sign-in (`btn`, `auto`, ...), when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub select_by: Option<String>,
}

/// Claims carried in the payload segment of a Google ID token.
///
/// Only the claims the client forwards are modeled; everything else in the
/// token is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GoogleClaims {
    /// Stable Google account id.
    pub sub: String,

    /// Full display name.
    pub name: String,

    /// Email address of the Google account.
    pub email: String,

    /// Whether Google has verified the email address.
    #[serde(default)]
    pub email_verified: bool,

    /// Profile picture URL, when the account has one.
    #[serde(default)]
    pub picture: Option<String>,
}

/// Failure modes of [`GoogleClaims::from_id_token`].
#[derive(Debug, Error)]
pub enum IdTokenError {
    /// The credential is not a three-segment compact JWS.
    #[error("credential is not a three-segment JWT")]
    Malformed,

    /// The payload segment is not base64url (unpadded).
    #[error("claims segment is not valid base64url: {0}")]
    Payload(#[from] base64::DecodeError),

    /// The payload segment decoded, but is not a claims object.
    #[error("claims segment is not valid JSON: {0}")]
    Claims(#[from] serde_json::Error),
}

impl GoogleClaims {
    /// Decode the claims out of a compact JWS without verifying its
    /// signature. The server re-validates the token cryptographically; the
    /// client only needs the profile fields for the login request.
    pub fn from_id_token(token: &str) -> Result<Self, IdTokenError> {
        let mut segments = token.split('.');
        let (Some(_header), Some(payload), Some(_signature)) =
            (segments.next(), segments.next(), segments.next())
        else {
            return Err(IdTokenError::Malformed);
        };
        if segments.next().is_some() {
            return Err(IdTokenError::Malformed);
        }

        let bytes = URL_SAFE_NO_PAD.decode(payload)?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Body of `POST /googleLogin`, assembled from the decoded claims.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GoogleLoginRequest {
    /// Full display name from the token.
    pub name: String,

    /// Handle derived from the email local part. The server may dedupe it;
    /// it is never the raw claims object.
    #[serde(rename = "userName")]
    pub user_name: String,

    /// Email address from the token.
    pub email: String,

    /// Google's email-verification flag, forwarded for the server to check.
    pub email_verified: bool,

    /// The OAuth client id the token was issued for.
    #[serde(rename = "clientId")]
    pub client_id: String,

    /// Profile picture URL, when present in the token.
    #[serde(rename = "Photo", default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl GoogleLoginRequest {
    /// Build the login request from decoded claims and the issuing client id.
    pub fn from_claims(claims: &GoogleClaims, client_id: impl Into<String>) -> Self {
        Self {
            name: claims.name.clone(),
            user_name: derived_user_name(&claims.email).to_string(),
            email: claims.email.clone(),
            email_verified: claims.email_verified,
            client_id: client_id.into(),
            photo: claims.picture.clone(),
        }
    }
}

/// The handle proposed for a federated account: the local part of its email.
fn derived_user_name(email: &str) -> &str {
    match email.split_once('@') {
        Some((local, _domain)) => local,
        None => email,
    }
}
