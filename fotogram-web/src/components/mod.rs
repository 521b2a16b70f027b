pub(crate) mod google_button;
pub(crate) mod toast;


pub use google_button::GoogleSignIn;
pub use toast::ToastHost;
