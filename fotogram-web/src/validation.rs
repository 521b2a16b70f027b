//! Local checks run against the sign-up fields before anything is sent to
//! the server. The server re-validates; these only exist for fast feedback.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// Shown when the email does not match [`EMAIL_PATTERN`].
pub const INVALID_EMAIL: &str = "Invalid email";

/// Shown when the password fails any of the strength rules.
pub const WEAK_PASSWORD: &str = "Password must contain at least 8 characters, \
    including at least 1 number and 1 uppercase letter and special character.";

/// Symbols that satisfy the special-character rule. Anything outside this
/// set does not count.
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*";

const MIN_PASSWORD_CHARS: usize = 8;

// `(?-u)` keeps `\w` at its ASCII meaning of `[0-9A-Za-z_]`; without it the
// class also matches letters like `é`, which the server-side check rejects.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?-u)^\w+([.-]?\w+)*@\w+([.-]?\w+)*(\.\w{2,3})+$").expect("email pattern")
});

/// A failed local check, carrying the message to surface as an error toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationError {
    message: &'static str,
}

impl ValidationError {
    /// The user-facing message.
    pub const fn message(self) -> &'static str {
        self.message
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Whether `email` looks like an address. Word characters are ASCII only,
/// and each dot-suffix segment must be two or three of them, so `a@b.c` is
/// rejected while `a@b.co` and `a@b.co.uk` pass.
pub fn email_is_valid(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Whether `password` meets every strength rule: at least eight characters,
/// one lowercase letter, one uppercase letter, one digit and one symbol
/// from [`PASSWORD_SYMBOLS`].
pub fn password_is_strong(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_CHARS
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SYMBOLS.contains(c))
}

/// Run the sign-up checks in order. The email check runs first and
/// short-circuits, so an invalid email is reported even when the password
/// is also weak.
pub fn validate_signup(email: &str, password: &str) -> Result<(), ValidationError> {
    if !email_is_valid(email) {
        return Err(ValidationError {
            message: INVALID_EMAIL,
        });
    }
    if !password_is_strong(password) {
        return Err(ValidationError {
            message: WEAK_PASSWORD,
        });
    }
    Ok(())
}
