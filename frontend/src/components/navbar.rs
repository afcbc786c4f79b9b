use leptos::*;

use crate::state::{
    auth::{use_auth, use_logout_action},
    subscription::use_subscription,
    theme::use_theme,
};

const NAV_LINKS: &[(&str, &str)] = &[
    ("/dashboard", "Dashboard"),
    ("/workspace", "Workspace"),
    ("/saved", "Saved"),
    ("/prices", "Pricing"),
    ("/Api", "API"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let (auth, _) = use_auth();
    let theme = use_theme();
    let premium = use_subscription().premium();
    let logout_action = use_logout_action();
    let logout_pending = logout_action.pending();

    create_effect(move |_| {
        if let Some(Err(err)) = logout_action.value().get() {
            log::warn!("Logout request failed: {}", err);
        }
    });

    let bar_class = move || {
        if theme.dark.get() {
            "sticky top-0 z-40 border-b border-gray-700 bg-[#111827]/90 backdrop-blur"
        } else {
            "sticky top-0 z-40 border-b border-orange-100 bg-[#FFF6F3]/90 backdrop-blur"
        }
    };
    let user_name = move || {
        auth.with(|a| a.user.as_ref().map(|u| u.display_name().to_string()))
            .unwrap_or_default()
    };

    view! {
        <nav class=bar_class>
            <div class="max-w-6xl mx-auto px-4 h-16 flex items-center justify-between">
                <a href="/" class="text-xl font-bold text-orange-500">"GraphX"</a>
                <div class="hidden md:flex items-center gap-4 text-sm font-medium">
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| view! { <a href=*href class="hover:text-orange-500">{*label}</a> })
                        .collect_view()}
                </div>
                <div class="flex items-center gap-3">
                    <Show when=move || premium.get() fallback=|| ()>
                        <span class="px-2 py-1 rounded-full text-xs font-semibold bg-yellow-400 text-black">
                            "Premium"
                        </span>
                    </Show>
                    <button
                        type="button"
                        class="p-2 rounded-md hover:bg-orange-100 dark:hover:bg-gray-700"
                        aria-label="Toggle dark mode"
                        on:click=move |_| theme.toggle()
                    >
                        {move || if theme.dark.get() { "☀" } else { "☾" }}
                    </button>
                    <Show
                        when=move || auth.with(|a| a.is_authenticated)
                        fallback=|| view! {
                            <a href="/login" class="px-3 py-2 rounded-md bg-orange-500 text-white">"Log in"</a>
                            <a href="/register" class="px-3 py-2 rounded-md border border-orange-500 text-orange-500">"Sign up"</a>
                        }
                    >
                        <span class="text-sm" data-testid="navbar-user">{user_name}</span>
                        <button
                            type="button"
                            class="px-3 py-2 rounded-md border border-gray-400 disabled:opacity-50"
                            disabled=move || logout_pending.get()
                            on:click=move |_| {
                                if !logout_pending.get_untracked() {
                                    logout_action.dispatch(());
                                }
                            }
                        >
                            "Log out"
                        </button>
                    </Show>
                </div>
            </div>
        </nav>
    }
}
