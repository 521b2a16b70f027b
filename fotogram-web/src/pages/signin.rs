//! The sign-in page. Same card layout as sign-up, posting to `/signin`.

use gloo_timers::callback::Timeout;
use shared::models::{CredentialGrant, ServerReply, SigninRequest};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yew_router::prelude::Link;

use crate::api::FotogramClient;
use crate::components::toast::{Notice, Notifier};
use crate::pending::PendingGuard;
use crate::routes::MainRoute;
use crate::session;
use crate::validation;

const CONNECT_ERROR: &str = "Unable to connect to server";
const ENTER_DELAY_MS: u32 = 30;

#[derive(Properties, PartialEq)]
pub struct SignInPageProps {
    pub notifier: Notifier,
    pub on_authenticated: Callback<CredentialGrant>,
}

#[function_component(SignInPage)]
pub fn sign_in_page(props: &SignInPageProps) -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
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

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
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
        let email = email.clone();
        let password = password.clone();
        let pending = (*pending).clone();
        let submitting = submitting.clone();
        let notifier = props.notifier.clone();
        let on_authenticated = props.on_authenticated.clone();
        let navigator = navigator.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if pending.busy() {
                return;
            }
            if !validation::email_is_valid(email.as_str()) {
                notifier.error(validation::INVALID_EMAIL);
                return;
            }

            let request = SigninRequest {
                email: (*email).clone(),
                password: (*password).clone(),
            };
            pending.begin();
            submitting.set(true);

            let pending = pending.clone();
            let submitting = submitting.clone();
            let notifier = notifier.clone();
            let on_authenticated = on_authenticated.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let client = FotogramClient::shared();
                let (notice, grant) = conclude_signin(client.signin(&request).await);
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

    let disable_submit = *submitting || email.is_empty() || password.is_empty();
    let card_class = classes!("signup-card", (*entered).then_some("entered"));

    html! {
        <div class="signup-screen">
            <div class={card_class}>
                <form class="signup-form" onsubmit={on_submit}>
                    <img class="signup-logo" src="/logo.svg" alt="Fotogram" />
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
                            type="password"
                            id="password"
                            placeholder="Password"
                            value={(*password).clone()}
                            oninput={on_password_change}
                        />
                    </div>
                    <button class="signup-submit" type="submit" disabled={disable_submit}>
                        if *submitting {
                            { "Signing In..." }
                        } else {
                            { "Sign In" }
                        }
                    </button>
                </form>
                <div class="signup-alt">
                    { "Don't have an account? " }
                    <Link<MainRoute> to={MainRoute::SignUp} classes="signup-link">
                        { "Sign Up" }
                    </Link<MainRoute>>
                </div>
            </div>
        </div>
    }
}

/// Fold a finished `/signin` call into the toast to show and the grant to
/// adopt. `None` means stay on the form with nothing persisted.
pub(crate) fn conclude_signin(
    result: Result<ServerReply<CredentialGrant>, reqwest::Error>,
) -> (Notice, Option<CredentialGrant>) {
    match result {
        Ok(reply) => {
            log::debug!("signin reply: {reply:?}");
            match reply {
                ServerReply::Success(grant) => {
                    (Notice::success("Signed In Successfully"), Some(grant))
                }
                ServerReply::Failure { error } => (Notice::error(error), None),
            }
        }
        Err(err) => {
            log::error!("signin request failed: {err}");
            (Notice::error(CONNECT_ERROR), None)
        }
    }
}
