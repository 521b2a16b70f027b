use serde::{Deserialize, Serialize};

use super::user::SessionUser;

/// Body of `POST /signup`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignupRequest {
    /// The user's full display name.
    pub name: String,

    /// The handle the user wants to register.
    #[serde(rename = "userName")]
    pub user_name: String,

    /// The user's email address.
    pub email: String,

    /// The plain-text password; hashing happens server-side.
    pub password: String,
}

/// Success body of `POST /signup`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignupAccepted {
    /// Human-readable confirmation, surfaced to the user verbatim.
    pub message: String,
}

/// Body of `POST /signin`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SigninRequest {
    /// The user's email address.
    pub email: String,

    /// The plain-text password.
    pub password: String,
}

/// Success body of `POST /signin` and `POST /googleLogin`: a session token
/// plus the signed-in user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CredentialGrant {
    /// Opaque session token, persisted under the `jwt` storage key.
    pub token: String,

    /// The signed-in user, persisted under the `user` storage key.
    pub user: SessionUser,
}

/// The server answers every auth endpoint with either its success payload or
/// `{"error": "..."}`. `Failure` is listed first so that any body carrying an
/// `error` field deserializes as a failure, mirroring the `data.error` check
/// the API contract prescribes.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ServerReply<T> {
    /// Server-reported failure.
    Failure {
        /// User-facing error message.
        error: String,
    },
    /// The endpoint's success payload.
    Success(T),
}

impl<T> ServerReply<T> {
    /// True when the reply is the success payload.
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}
