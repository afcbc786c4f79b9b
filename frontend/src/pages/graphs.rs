use leptos::*;

use crate::state::theme::{card_class, muted_text_class};

pub const FREE_SAVE_SLOTS: usize = 3;

#[component]
pub fn GraphManagerPage(
    #[prop(into)] is_dark_mode: MaybeSignal<bool>,
    #[prop(into)] premier: MaybeSignal<bool>,
) -> impl IntoView {
    let dark = Signal::derive(move || is_dark_mode.get());
    let quota = move || {
        if premier.get() {
            "Unlimited saves".to_string()
        } else {
            format!("{} save slots on the free plan", FREE_SAVE_SLOTS)
        }
    };

    view! {
        <section class="max-w-6xl mx-auto px-4 py-12" data-testid="graph-manager-page">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold">"Saved graphs"</h1>
                <span class=move || muted_text_class(dark.get())>{quota}</span>
            </div>
            <div class=move || format!("mt-8 p-10 text-center {}", card_class(dark.get()))>
                <p>"No saved graphs yet."</p>
                <a href="/generate" class="mt-4 inline-block text-orange-500 underline">"Create one"</a>
            </div>
        </section>
    }
}

#[component]
pub fn ChartNamePage(#[prop(into)] is_dark_mode: MaybeSignal<bool>) -> impl IntoView {
    let name = create_rw_signal(String::new());
    let trimmed = move || name.with(|n| n.trim().to_string());

    view! {
        <section class="max-w-md mx-auto px-4 py-16" data-testid="chart-name-page">
            <div class=move || format!("p-8 {}", card_class(is_dark_mode.get()))>
                <h1 class="text-2xl font-bold">"Name your chart"</h1>
                <input
                    name="chart_name"
                    type="text"
                    placeholder="My Chart"
                    class="mt-6 w-full px-3 py-2 rounded-md border border-gray-300 text-black"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <p class="mt-4 text-sm">
                    {move || {
                        let value = trimmed();
                        if value.is_empty() {
                            "Untitled chart".to_string()
                        } else {
                            format!("Saving as \"{}\"", value)
                        }
                    }}
                </p>
                <a href="/generate" class="mt-6 inline-block px-4 py-2 rounded-md bg-orange-500 text-white">
                    "Continue"
                </a>
            </div>
        </section>
    }
}
