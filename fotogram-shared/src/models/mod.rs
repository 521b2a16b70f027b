pub mod auth;
pub mod google;
pub mod user;

pub use auth::{CredentialGrant, ServerReply, SigninRequest, SignupAccepted, SignupRequest};
pub use google::{GoogleClaims, GoogleCredential, GoogleLoginRequest, IdTokenError};
pub use user::SessionUser;
