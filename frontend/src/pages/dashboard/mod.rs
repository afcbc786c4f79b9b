use leptos::*;

use crate::{
    api::UserResponse,
    components::{Footer, LoginSuccessBanner},
};

mod sections;

use sections::{Achievements, Hero, Steps, Visualize};

/// Landing composite served at `/`, `/dashboard` and `/home`.
#[component]
pub fn DashboardPage(
    #[prop(into)] is_dark_mode: MaybeSignal<bool>,
    #[prop(into)] premier: MaybeSignal<bool>,
    #[prop(into)] show_login_success: MaybeSignal<bool>,
    #[prop(into)] user: Signal<Option<UserResponse>>,
    on_login_request: Callback<()>,
) -> impl IntoView {
    let dark = Signal::derive(move || is_dark_mode.get());

    view! {
        <div data-testid="dashboard-page">
            <Show when=move || show_login_success.get() fallback=|| ()>
                <LoginSuccessBanner is_dark_mode=dark/>
            </Show>
            <Hero is_dark_mode=dark/>
            <Visualize is_dark_mode=dark premier=premier/>
            <Achievements is_dark_mode=dark/>
            <Steps is_dark_mode=dark/>
            <Footer is_dark_mode=dark user=user on_login_request=on_login_request/>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::sample_user, ssr::render_to_string};

    fn render(show_banner: bool, premier: bool, user: Option<UserResponse>) -> String {
        render_to_string(move || {
            let user = Signal::derive(move || user.clone());
            view! {
                <DashboardPage
                    is_dark_mode=false
                    premier=premier
                    show_login_success=show_banner
                    user=user
                    on_login_request=Callback::new(|_| ())
                />
            }
        })
    }

    #[test]
    fn banner_only_when_requested() {
        assert!(render(true, false, None).contains("Login successful!"));
        assert!(!render(false, false, None).contains("Login successful!"));
    }

    #[test]
    fn composite_renders_every_section() {
        let html = render(false, false, Some(sample_user()));
        for marker in ["dashboard-hero", "dashboard-visualize", "dashboard-achievements", "dashboard-steps"] {
            assert!(html.contains(marker), "missing {}", marker);
        }
        assert!(html.contains("Ada Lovelace"));
    }

    #[test]
    fn visualize_section_reflects_premium() {
        assert!(render(false, true, None).contains("Premium unlocked"));
        assert!(!render(false, false, None).contains("Premium unlocked"));
    }
}
