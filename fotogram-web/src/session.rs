//! Browser session persistence.
//!
//! A successful login leaves two entries in local storage: the token under
//! `jwt`, written as the bare string so other readers of the key see the
//! compact JWS itself, and the signed-in user under `user` as JSON.
//! Sign-out removes both.

use gloo_storage::{LocalStorage, Storage};
use shared::models::{CredentialGrant, SessionUser};

/// Storage key for the auth token.
pub const TOKEN_KEY: &str = "jwt";

/// Storage key for the signed-in user.
pub const USER_KEY: &str = "user";

/// Persist a credential grant. The token bypasses the JSON layer so the
/// stored value is unquoted. Storage failures are logged and otherwise
/// ignored; the in-memory session still works until the next reload.
pub fn persist(grant: &CredentialGrant) {
    if let Err(err) = LocalStorage::raw().set_item(TOKEN_KEY, &grant.token) {
        log::error!("failed to persist session token: {err:?}");
    }
    if let Err(err) = LocalStorage::set(USER_KEY, &grant.user) {
        log::error!("failed to persist session user: {err}");
    }
}

/// The stored session, when both entries are present and well-formed.
pub fn load() -> Option<(String, SessionUser)> {
    let token = LocalStorage::raw().get_item(TOKEN_KEY).ok().flatten()?;
    let user: SessionUser = LocalStorage::get(USER_KEY).ok()?;
    Some((token, user))
}

/// Drop the stored session.
pub fn clear() {
    LocalStorage::delete(TOKEN_KEY);
    LocalStorage::delete(USER_KEY);
}
