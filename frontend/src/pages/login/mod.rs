use leptos::{ev::SubmitEvent, *};

use crate::{
    api::{ApiError, LoginRequest, UserResponse},
    components::FormError,
    state::{auth::use_login_action, theme::card_class},
};

pub mod utils;

/// "Welcome back" form. Protected routes also render this in place while signed out.
#[component]
pub fn LoginPage(
    #[prop(into)] is_dark_mode: MaybeSignal<bool>,
    on_login_success: Callback<UserResponse>,
) -> impl IntoView {
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);

    let login_action = use_login_action(Callback::new(move |user: UserResponse| {
        error.set(None);
        password.set(String::new());
        on_login_success.call(user);
    }));
    let pending = login_action.pending();

    create_effect(move |_| {
        if let Some(Err(err)) = login_action.value().get() {
            error.set(Some(err));
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let request = LoginRequest {
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        if let Err(err) = utils::validate_login(&request) {
            error.set(Some(err));
            return;
        }
        error.set(None);
        login_action.dispatch(request);
    };

    view! {
        <div class="min-h-[80vh] flex items-center justify-center px-4" data-testid="login-page">
            <div class=move || format!("w-full max-w-md p-8 {}", card_class(is_dark_mode.get()))>
                <h2 class="text-3xl font-extrabold text-center">"Welcome back"</h2>
                <p class="mt-2 text-center text-sm opacity-75">"Log in to keep building your charts."</p>
                <form class="mt-8 space-y-4" on:submit=on_submit>
                    <input
                        id="email"
                        name="email"
                        type="email"
                        autocomplete="email"
                        placeholder="Email"
                        class="w-full px-3 py-2 rounded-md border border-gray-300 text-black"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        id="password"
                        name="password"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        class="w-full px-3 py-2 rounded-md border border-gray-300 text-black"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <FormError error=error/>
                    <button
                        type="submit"
                        class="w-full py-2 rounded-md bg-orange-500 text-white font-semibold hover:bg-orange-600 disabled:opacity-50"
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Logging in..." } else { "Log in" }}
                    </button>
                </form>
                <p class="mt-6 text-center text-sm">
                    "No account yet? " <a href="/register" class="text-orange-500 underline">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
