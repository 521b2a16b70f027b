use shared::models::CredentialGrant;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

use crate::components::toast::Notifier;
use crate::models::app_state::AppState;
use crate::pages::{HomePage, NotFoundPage, SignInPage, SignUpPage};

/// The main routes.
#[derive(Debug, Clone, PartialEq, Routable)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/signin")]
    SignIn,
    #[at("/signup")]
    SignUp,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[derive(Properties, PartialEq)]
pub struct MainRouteViewProps {
    pub route: MainRoute,
    pub notifier: Notifier,
    pub on_authenticated: Callback<CredentialGrant>,
    pub on_logout: Callback<()>,
}

/// Resolves a route against the shared login state. The home feed needs a
/// session; the auth pages bounce signed-in users back to the feed.
#[function_component(MainRouteView)]
pub fn main_route_view(props: &MainRouteViewProps) -> Html {
    let state = use_selector(|state: &AppState| state.clone());
    let logged_in = state.logged_in;

    match props.route {
        MainRoute::Home => {
            if logged_in {
                html! {
                    <HomePage user={state.user.clone()} on_logout={props.on_logout.clone()} />
                }
            } else {
                html! { <Redirect<MainRoute> to={MainRoute::SignIn} /> }
            }
        }
        MainRoute::SignIn => {
            if logged_in {
                html! { <Redirect<MainRoute> to={MainRoute::Home} /> }
            } else {
                html! {
                    <SignInPage
                        notifier={props.notifier.clone()}
                        on_authenticated={props.on_authenticated.clone()}
                    />
                }
            }
        }
        MainRoute::SignUp => {
            if logged_in {
                html! { <Redirect<MainRoute> to={MainRoute::Home} /> }
            } else {
                html! {
                    <SignUpPage
                        notifier={props.notifier.clone()}
                        on_authenticated={props.on_authenticated.clone()}
                    />
                }
            }
        }
        MainRoute::NotFound => html! { <NotFoundPage /> },
    }
}

/// Switch function for the main routes.
pub fn switch(
    route: MainRoute,
    notifier: Notifier,
    on_authenticated: Callback<CredentialGrant>,
    on_logout: Callback<()>,
) -> Html {
    log::debug!("switching to route: {route:?}");
    html! {
        <MainRouteView {route} {notifier} {on_authenticated} {on_logout} />
    }
}
