mod error;
mod home;
pub(crate) mod signin;
pub(crate) mod signup;

#[cfg(test)]
mod signin_test;

pub use error::NotFoundPage;
pub use home::HomePage;
pub use signin::SignInPage;
pub use signup::SignUpPage;
