//! The account creation page.
//!
//! Two ways in: the classic form posting to `/signup`, and the Google
//! button posting a decoded identity to `/googleLogin`. Only the federated
//! path signs the user in directly; the form path lands on the sign-in
//! page afterwards.

use gloo_timers::callback::Timeout;
use shared::models::{
    CredentialGrant, GoogleClaims, GoogleCredential, GoogleLoginRequest, ServerReply,
    SignupAccepted, SignupRequest,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yew_router::prelude::Link;

use crate::api::FotogramClient;
use crate::components::GoogleSignIn;
use crate::components::toast::{Notice, Notifier};
use crate::pending::PendingGuard;
use crate::routes::MainRoute;
use crate::session;
use crate::validation;

/// Message shown when the backend cannot be reached at all.
const CONNECT_ERROR: &str = "Unable to connect to server";

/// Delay before the entrance class flips, so the browser paints one frame
/// at the initial transform.
const ENTER_DELAY_MS: u32 = 30;

#[derive(Properties, PartialEq)]
pub struct SignUpPageProps {
    /// Sink for success and error toasts.
    pub notifier: Notifier,
    /// Called with the grant after a successful federated login; the
    /// receiver flips the shared login state.
    pub on_authenticated: Callback<CredentialGrant>,
}

#[function_component(SignUpPage)]
pub fn sign_up_page(props: &SignUpPageProps) -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let user_name = use_state(String::new);
    let password = use_state(String::new);
    // `pending` gates both submit paths synchronously; `submitting` mirrors
    // it as render state for the button.
    let pending = use_memo((), |_| PendingGuard::default());
    let submitting = use_state(|| false);
    let entered = use_state(|| false);
    let navigator = use_navigator();

    {
        let entered = entered.clone();
        use_effect_with((), move |_| {
            let timer = Timeout::new(ENTER_DELAY_MS, move || entered.set(true));
            move || drop(timer)
        });
    }

    let on_name_change = {
        let name = name.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                name.set(input.value());
            }
        })
    };

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };

    let on_user_name_change = {
        let user_name = user_name.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                user_name.set(input.value());
            }
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    let on_submit = {
        let name = name.clone();
        let email = email.clone();
        let user_name = user_name.clone();
        let password = password.clone();
        let pending = (*pending).clone();
        let submitting = submitting.clone();
        let notifier = props.notifier.clone();
        let navigator = navigator.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            // One outstanding submission at a time, across both paths.
            if pending.busy() {
                return;
            }
            if let Err(err) = validation::validate_signup(email.as_str(), password.as_str()) {
                notifier.error(err.message());
                return;
            }

            let request = SignupRequest {
                name: (*name).clone(),
                user_name: (*user_name).clone(),
                email: (*email).clone(),
                password: (*password).clone(),
            };
            pending.begin();
            submitting.set(true);

            let pending = pending.clone();
            let submitting = submitting.clone();
            let notifier = notifier.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let client = FotogramClient::shared();
                let (notice, destination) = conclude_signup(client.signup(&request).await);
                notifier.notify(notice);
                if let (Some(nav), Some(route)) = (navigator.as_ref(), destination) {
                    nav.push(&route);
                }
                pending.finish();
                submitting.set(false);
            });
        })
    };

    let on_google_credential = {
        let pending = (*pending).clone();
        let submitting = submitting.clone();
        let notifier = props.notifier.clone();
        let on_authenticated = props.on_authenticated.clone();
        let navigator = navigator.clone();
        Callback::from(move |credential: GoogleCredential| {
            if pending.busy() {
                return;
            }
            let claims = match GoogleClaims::from_id_token(&credential.credential) {
                Ok(claims) => claims,
                Err(err) => {
                    log::error!("Login Failed: {err}");
                    notifier.error("Google sign-in failed");
                    return;
                }
            };
            let request = GoogleLoginRequest::from_claims(&claims, credential.client_id.clone());
            pending.begin();
            submitting.set(true);

            let pending = pending.clone();
            let submitting = submitting.clone();
            let notifier = notifier.clone();
            let on_authenticated = on_authenticated.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let client = FotogramClient::shared();
                let (notice, grant) = conclude_google_login(client.google_login(&request).await);
                notifier.notify(notice);
                if let Some(grant) = grant {
                    session::persist(&grant);
                    on_authenticated.emit(grant);
                    if let Some(nav) = navigator.as_ref() {
                        nav.push(&MainRoute::Home);
                    }
                }
                pending.finish();
                submitting.set(false);
            });
        })
    };

    let busy = *submitting;
    let card_class = classes!("signup-card", (*entered).then_some("entered"));

    html! {
        <div class="signup-screen">
            <div class={card_class}>
                <form class="signup-form" onsubmit={on_submit}>
                    <img class="signup-logo" src="/logo.svg" alt="Fotogram" />
                    <p class="signup-tagline">
                        { "Sign up to see photos and videos" }<br />{ "from your friends." }
                    </p>
                    <div>
                        <input
                            type="email"
                            id="email"
                            placeholder="Email"
                            value={(*email).clone()}
                            oninput={on_email_change}
                        />
                    </div>
                    <div>
                        <input
                            type="text"
                            id="name"
                            placeholder="Full Name"
                            value={(*name).clone()}
                            oninput={on_name_change}
                        />
                    </div>
                    <div>
                        <input
                            type="text"
                            id="username"
                            placeholder="Username"
                            value={(*user_name).clone()}
                            oninput={on_user_name_change}
                        />
                    </div>
                    <div>
                        <input
                            type="password"
                            id="password"
                            placeholder="Password"
                            value={(*password).clone()}
                            oninput={on_password_change}
                        />
                    </div>
                    <p class="signup-terms">
                        { "By signing up, you agree to our Terms," }<br />
                        { "privacy policy and cookies policy." }
                    </p>
                    <button class="signup-submit" type="submit" disabled={busy}>
                        if busy {
                            { "Signing Up..." }
                        } else {
                            { "Sign Up" }
                        }
                    </button>
                    <hr />
                    <GoogleSignIn on_credential={on_google_credential} />
                </form>
                <div class="signup-alt">
                    { "Already have an account? " }
                    <Link<MainRoute> to={MainRoute::SignIn} classes="signup-link">
                        { "Sign In" }
                    </Link<MainRoute>>
                </div>
            </div>
        </div>
    }
}

/// Fold a finished `/signup` call into the toast to show and the route to
/// push. Server rejections and transport failures stay on the form.
pub(crate) fn conclude_signup(
    result: Result<ServerReply<SignupAccepted>, reqwest::Error>,
) -> (Notice, Option<MainRoute>) {
    match result {
        Ok(reply) => {
            log::debug!("signup reply: {reply:?}");
            match reply {
                ServerReply::Success(accepted) => {
                    (Notice::success(accepted.message), Some(MainRoute::SignIn))
                }
                ServerReply::Failure { error } => (Notice::error(error), None),
            }
        }
        Err(err) => {
            log::error!("signup request failed: {err}");
            (Notice::error(CONNECT_ERROR), None)
        }
    }
}

/// Fold a finished `/googleLogin` call into the toast to show and the
/// grant to adopt. `None` means stay on the form with nothing persisted.
pub(crate) fn conclude_google_login(
    result: Result<ServerReply<CredentialGrant>, reqwest::Error>,
) -> (Notice, Option<CredentialGrant>) {
    match result {
        Ok(reply) => {
            log::debug!("google login reply: {reply:?}");
            match reply {
                ServerReply::Success(grant) => {
                    (Notice::success("Signed In Successfully"), Some(grant))
                }
                ServerReply::Failure { error } => (Notice::error(error), None),
            }
        }
        Err(err) => {
            log::error!("google login request failed: {err}");
            (Notice::error(CONNECT_ERROR), None)
        }
    }
}
