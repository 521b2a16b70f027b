use shared::models::{CredentialGrant, ServerReply, SessionUser};
use yew::LocalServerRenderer;
use yew::prelude::*;
use yew_router::Router;
use yew_router::history::{AnyHistory, MemoryHistory};

use crate::components::toast::{NoticeKind, Notifier};
use crate::pages::SignInPage;
use crate::pages::signin::conclude_signin;

#[function_component(SignInHarness)]
fn sign_in_harness() -> Html {
    let history = AnyHistory::from(MemoryHistory::new());
    html! {
        <Router {history}>
            <SignInPage
                notifier={Notifier::new(Callback::noop())}
                on_authenticated={Callback::noop()}
            />
        </Router>
    }
}

async fn render_page() -> String {
    LocalServerRenderer::<SignInHarness>::new()
        .hydratable(false)
        .render()
        .await
}

#[tokio::test]
async fn renders_credential_fields() {
    let html = render_page().await;
    assert!(html.contains(r#"placeholder="Email""#));
    assert!(html.contains(r#"placeholder="Password""#));
    assert!(html.contains("Sign In"));
}

#[tokio::test]
async fn submit_stays_disabled_while_fields_are_empty() {
    let html = render_page().await;
    assert!(html.contains("disabled"));
}

#[tokio::test]
async fn links_to_signup() {
    let html = render_page().await;
    assert!(html.contains("Don't have an account?"));
    assert!(html.contains(r#"href="/signup""#));
}

#[test]
fn accepted_sign_in_hands_back_the_grant() {
    let reply = Ok(ServerReply::Success(CredentialGrant {
        token: "abc.def.ghi".to_string(),
        user: SessionUser {
            id: "64f0c1".to_string(),
            name: "Jane Doe".to_string(),
            user_name: "jane_doe".to_string(),
            email: "jane@example.com".to_string(),
            photo: None,
        },
    }));
    let (notice, grant) = conclude_signin(reply);
    assert_eq!(notice.kind, NoticeKind::Success);
    assert_eq!(notice.message, "Signed In Successfully");
    assert_eq!(grant.unwrap().user.user_name, "jane_doe");
}

#[test]
fn rejected_sign_in_adopts_nothing() {
    let reply = Ok(ServerReply::Failure {
        error: "Invalid Credentials".to_string(),
    });
    let (notice, grant) = conclude_signin(reply);
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.message, "Invalid Credentials");
    assert!(grant.is_none());
}
