use shared::models::SessionUser;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    /// The signed-in user, if hydration has caught up.
    pub user: Option<SessionUser>,
    /// Clears the stored session and flips the shared login state.
    pub on_logout: Callback<()>,
}

/// Placeholder feed shown after login.
#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let on_signout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| on_logout.emit(()))
    };

    let greeting = match &props.user {
        Some(user) => format!("Welcome back, {}!", user.user_name),
        None => "Welcome back!".to_string(),
    };

    html! {
        <div class="home-screen">
            <header class="home-header">
                <span class="home-logo">{ "Fotogram" }</span>
                <button class="signout-button" onclick={on_signout}>{ "Sign Out" }</button>
            </header>
            <main class="home-feed">
                <h2>{ greeting }</h2>
                <p>{ "Your feed is empty. Follow your friends to see their photos here." }</p>
            </main>
        </div>
    }
}
