use leptos::{ev::SubmitEvent, *};

use crate::{
    api::{ApiClient, ApiError, RegisterRequest},
    components::FormError,
    pages::login::utils::validate_register,
    state::theme::card_class,
};

#[component]
pub fn RegisterPage(#[prop(into)] is_dark_mode: MaybeSignal<bool>) -> impl IntoView {
    let name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);
    let registered = create_rw_signal(false);

    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let register_action = create_action(move |request: &RegisterRequest| {
        let api = api.clone();
        let request = request.clone();
        async move { api.register(&request).await }
    });
    let pending = register_action.pending();

    create_effect(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(()) => {
                    error.set(None);
                    password.set(String::new());
                    registered.set(true);
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let request = RegisterRequest {
            name: name.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        if let Err(err) = validate_register(&request) {
            error.set(Some(err));
            return;
        }
        error.set(None);
        register_action.dispatch(request);
    };

    view! {
        <div class="min-h-[80vh] flex items-center justify-center px-4" data-testid="register-page">
            <div class=move || format!("w-full max-w-md p-8 {}", card_class(is_dark_mode.get()))>
                <h2 class="text-3xl font-extrabold text-center">"Create your account"</h2>
                <Show
                    when=move || registered.get()
                    fallback=move || view! {
                        <form class="mt-8 space-y-4" on:submit=on_submit>
                            <input
                                name="name"
                                type="text"
                                autocomplete="name"
                                placeholder="Name"
                                class="w-full px-3 py-2 rounded-md border border-gray-300 text-black"
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                            <input
                                name="email"
                                type="email"
                                autocomplete="email"
                                placeholder="Email"
                                class="w-full px-3 py-2 rounded-md border border-gray-300 text-black"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                            <input
                                name="password"
                                type="password"
                                autocomplete="new-password"
                                placeholder="Password"
                                class="w-full px-3 py-2 rounded-md border border-gray-300 text-black"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                            <FormError error=error/>
                            <button
                                type="submit"
                                class="w-full py-2 rounded-md bg-orange-500 text-white font-semibold disabled:opacity-50"
                                disabled=move || pending.get()
                            >
                                {move || if pending.get() { "Creating account..." } else { "Sign up" }}
                            </button>
                        </form>
                    }
                >
                    <p class="mt-8 text-center" role="status">
                        "Account created. " <a href="/login" class="text-orange-500 underline">"Log in"</a>
                    </p>
                </Show>
                <p class="mt-6 text-center text-sm">
                    "Already registered? " <a href="/login" class="text-orange-500 underline">"Log in"</a>
                </p>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_register_form() {
        let html = render_to_string(move || view! { <RegisterPage is_dark_mode=true/> });
        assert!(html.contains("Create your account"));
        assert!(html.contains("name=\"name\""));
        assert!(html.contains("name=\"password\""));
        assert!(!html.contains("Account created."));
    }
}
