//! Application root: owns the toast list, hydrates the shared login state
//! from storage, and mounts the router.

use shared::models::CredentialGrant;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_store;

use crate::components::ToastHost;
use crate::components::toast::{Notices, NoticesAction, Notifier};
use crate::models::app_state::AppState;
use crate::routes::{MainRoute, switch};
use crate::session;

#[function_component(App)]
pub fn app() -> Html {
    let (_state, dispatch) = use_store::<AppState>();
    let notices = use_reducer(Notices::default);

    // Pick up a stored session once per page load. Runs after the first
    // render, so the tree briefly renders logged out.
    {
        let dispatch = dispatch.clone();
        use_effect_with((), move |_| {
            match session::load() {
                Some((_token, user)) => {
                    log::debug!("restoring session for {}", user.user_name);
                    dispatch.set(AppState::signed_in(user));
                }
                None => dispatch.set(AppState::signed_out()),
            }
            || ()
        });
    }

    let notifier = {
        let dispatcher = notices.dispatcher();
        Notifier::new(Callback::from(move |notice| {
            dispatcher.dispatch(NoticesAction::Push(notice));
        }))
    };

    let on_dismiss = {
        let dispatcher = notices.dispatcher();
        Callback::from(move |id| dispatcher.dispatch(NoticesAction::Dismiss(id)))
    };

    let on_authenticated = {
        let dispatch = dispatch.clone();
        Callback::from(move |grant: CredentialGrant| {
            dispatch.set(AppState::signed_in(grant.user));
        })
    };

    let on_logout = {
        let dispatch = dispatch;
        Callback::from(move |()| {
            session::clear();
            dispatch.set(AppState::signed_out());
        })
    };

    let render = {
        let notifier = notifier.clone();
        move |route| {
            switch(
                route,
                notifier.clone(),
                on_authenticated.clone(),
                on_logout.clone(),
            )
        }
    };

    html! {
        <>
            <ToastHost notices={notices.items.clone()} on_dismiss={on_dismiss} />
            <BrowserRouter>
                <Switch<MainRoute> render={render} />
            </BrowserRouter>
        </>
    }
}
