use leptos::*;

use crate::state::theme::{card_class, muted_text_class};

const API_ENDPOINTS: &[(&str, &str, &str)] = &[
    ("GET", "/auth/me", "Current signed-in user"),
    ("POST", "/auth/login", "Start a session"),
    ("POST", "/auth/logout", "End the session"),
    ("POST", "/auth/register", "Create an account"),
    ("GET", "/api/subscription", "Active subscription plan"),
];

/// Stand-in for `/working` and `/settings`.
#[component]
pub fn MaintenancePage(#[prop(into)] is_dark_mode: MaybeSignal<bool>) -> impl IntoView {
    view! {
        <section class="max-w-xl mx-auto px-4 py-24 text-center" data-testid="maintenance-page">
            <h1 class="text-3xl font-bold">"Under maintenance"</h1>
            <p class=move || format!("mt-4 {}", muted_text_class(is_dark_mode.get()))>
                "We are working on this page. Check back soon."
            </p>
            <a href="/dashboard" class="mt-8 inline-block text-orange-500 underline">"Back to dashboard"</a>
        </section>
    }
}

#[component]
pub fn ApiDocsPage(#[prop(into)] is_dark_mode: MaybeSignal<bool>) -> impl IntoView {
    let dark = Signal::derive(move || is_dark_mode.get());

    view! {
        <section class="max-w-4xl mx-auto px-4 py-16" data-testid="api-docs-page">
            <h1 class="text-3xl font-bold">"GraphX API"</h1>
            <p class=move || format!("mt-2 {}", muted_text_class(dark.get()))>
                "All endpoints use cookie sessions and answer JSON."
            </p>
            <table class=move || format!("mt-8 w-full text-left {}", card_class(dark.get()))>
                <thead>
                    <tr><th class="p-3">"Method"</th><th class="p-3">"Path"</th><th class="p-3">"Description"</th></tr>
                </thead>
                <tbody>
                    {API_ENDPOINTS
                        .iter()
                        .map(|(method, path, description)| view! {
                            <tr>
                                <td class="p-3 font-mono text-orange-500">{*method}</td>
                                <td class="p-3 font-mono">{*path}</td>
                                <td class="p-3">{*description}</td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        </section>
    }
}

#[component]
pub fn NotFoundPage(#[prop(into)] is_dark_mode: MaybeSignal<bool>) -> impl IntoView {
    view! {
        <section class="max-w-xl mx-auto px-4 py-24 text-center" data-testid="not-found-page">
            <h1 class="text-6xl font-extrabold text-orange-500">"404"</h1>
            <p class=move || format!("mt-4 text-lg {}", muted_text_class(is_dark_mode.get()))>
                "Page not found."
            </p>
            <a href="/" class="mt-8 inline-block text-orange-500 underline">"Go home"</a>
        </section>
    }
}
