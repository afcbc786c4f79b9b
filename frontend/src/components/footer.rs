use chrono::Datelike;
use leptos::*;

use crate::{api::UserResponse, state::theme::muted_text_class};

#[component]
pub fn Footer(
    #[prop(into)] is_dark_mode: MaybeSignal<bool>,
    #[prop(into)] user: Signal<Option<UserResponse>>,
    on_login_request: Callback<()>,
) -> impl IntoView {
    let year = chrono::Utc::now().year();
    let dark = Signal::derive(move || is_dark_mode.get());
    let border = move || {
        if dark.get() {
            "mt-16 border-t border-gray-700 py-8"
        } else {
            "mt-16 border-t border-orange-100 py-8"
        }
    };
    let muted = move || muted_text_class(dark.get());

    view! {
        <footer class=border>
            <div class="max-w-6xl mx-auto px-4 flex flex-col sm:flex-row items-center justify-between gap-4">
                <p class=muted>{format!("© {} GraphX", year)}</p>
                {move || match user.get() {
                    Some(user) => view! {
                        <p class=muted data-testid="footer-user">
                            "Signed in as " <span class="font-semibold">{user.display_name().to_string()}</span>
                        </p>
                    }
                    .into_view(),
                    None => view! {
                        <button
                            type="button"
                            class="px-4 py-2 rounded-md bg-orange-500 text-white hover:bg-orange-600"
                            on:click=move |_| on_login_request.call(())
                        >
                            "Log in"
                        </button>
                    }
                    .into_view(),
                }}
            </div>
        </footer>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::sample_user, ssr::render_to_string};

    #[test]
    fn footer_shows_user_or_login_button() {
        let html = render_to_string(move || {
            let user = Signal::derive(|| Some(sample_user()));
            view! { <Footer is_dark_mode=false user=user on_login_request=Callback::new(|_| ())/> }
        });
        assert!(html.contains("Ada Lovelace"));
        assert!(!html.contains("Log in"));

        let html = render_to_string(move || {
            let user = Signal::derive(|| None::<UserResponse>);
            view! { <Footer is_dark_mode=true user=user on_login_request=Callback::new(|_| ())/> }
        });
        assert!(html.contains("Log in"));
        assert!(!html.contains("footer-user"));
    }
}
