use shared::models::GoogleCredential;
use yew::prelude::*;

use crate::config::FrontendConfig;
use crate::google;

#[derive(Properties, PartialEq)]
pub struct GoogleSignInProps {
    /// Receives the raw credential response after a completed popup flow.
    pub on_credential: Callback<GoogleCredential>,
}

/// Slot the Google Identity Services button is rendered into. The GIS
/// script paints the actual button, so this component only provides the
/// mount point and wires the callback.
#[function_component(GoogleSignIn)]
pub fn google_sign_in(props: &GoogleSignInProps) -> Html {
    let slot = use_node_ref();

    {
        let slot = slot.clone();
        let on_credential = props.on_credential.clone();
        use_effect_with((), move |_| {
            if let Some(parent) = slot.cast::<web_sys::Element>() {
                google::mount_button(&parent, &FrontendConfig::default(), on_credential);
            } else {
                log::error!("google sign-in slot missing from the DOM");
            }
            || ()
        });
    }

    html! {
        <div class="google-signin" ref={slot}></div>
    }
}
