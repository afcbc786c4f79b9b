use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{use_location, use_navigate, Router};

use crate::{
    api::{ApiClient, UserResponse},
    components::{Loading, Navbar},
    router::RoutedView,
    state::{
        auth::{use_auth, AuthProvider},
        banner::use_login_success_banner,
        splash::{provide_splash_gate, use_splash_gate, SplashGate},
        subscription::provide_subscription,
        theme::{provide_theme, root_class},
    },
};

pub const LOGIN_SUCCESS_REDIRECT: &str = "/dashboard?login_success=true";
pub const LOGIN_PATH: &str = "/login";

/// The app renders nothing but the splash while either gate is up.
pub fn should_block(auth_loading: bool, splash_visible: bool) -> bool {
    auth_loading || splash_visible
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new());
    provide_splash_gate(SplashGate::browser());

    view! {
        <Title text="GraphX"/>
        <AuthProvider>
            <Router>
                <RouterShell/>
            </Router>
        </AuthProvider>
    }
}

/// Bridges the router's location and navigation into [`AppShell`].
#[component]
fn RouterShell() -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();
    let path = Signal::derive(move || location.pathname.get());
    let search = Signal::derive(move || location.search.get());
    let navigate = Callback::new(move |to: String| navigate(&to, Default::default()));

    view! { <AppShell path=path search=search navigate=navigate/> }
}

#[component]
pub fn AppShell(
    #[prop(into)] path: Signal<String>,
    #[prop(into)] search: Signal<String>,
    navigate: Callback<String>,
) -> impl IntoView {
    let (auth, _) = use_auth();
    let theme = provide_theme();
    let subscription = provide_subscription(auth);
    let splash_visible = use_splash_gate();
    let show_login_success = use_login_success_banner(search);

    let on_login_success = Callback::new(move |user: UserResponse| {
        log::info!("Signed in as {}", user.display_name());
        subscription.refresh(true);
        navigate.call(LOGIN_SUCCESS_REDIRECT.to_string());
    });
    let on_login_request = Callback::new(move |_: ()| navigate.call(LOGIN_PATH.to_string()));

    let blocked = move || should_block(auth.with(|a| a.loading), splash_visible.get());

    view! {
        <Show when=move || !blocked() fallback=move || view! { <Loading is_dark_mode=theme.dark/> }>
            <div class=move || root_class(theme.dark.get())>
                <Navbar/>
                <main>
                    <RoutedView
                        path=path
                        show_login_success=show_login_success
                        on_login_success=on_login_success
                        on_login_request=on_login_request
                    />
                </main>
            </div>
        </Show>
    }
}
