use leptos::*;

use crate::state::theme::{card_class, muted_text_class};

const ACHIEVEMENTS: &[(&str, &str)] = &[
    ("10k+", "Charts generated"),
    ("2.5k", "Active creators"),
    ("30+", "Chart types"),
    ("99.9%", "Uptime"),
];

const STEPS: &[(&str, &str)] = &[
    ("Upload your data", "Drop a CSV or paste a table straight into the workspace."),
    ("Pick a chart", "Choose from bar, line, pie and more, then tune the styling."),
    ("Share or save", "Export an image or keep the chart in your saved graphs."),
];

#[component]
pub fn Hero(is_dark_mode: Signal<bool>) -> impl IntoView {
    view! {
        <section class="max-w-6xl mx-auto px-4 pt-20 pb-12 text-center" data-testid="dashboard-hero">
            <h1 class="text-4xl sm:text-5xl font-extrabold">
                "Turn raw data into " <span class="text-orange-500">"beautiful graphs"</span>
            </h1>
            <p class=move || format!("mt-4 text-lg {}", muted_text_class(is_dark_mode.get()))>
                "GraphX builds clean, shareable charts in seconds."
            </p>
            <div class="mt-8 flex justify-center gap-4">
                <a href="/workspace" class="px-6 py-3 rounded-md bg-orange-500 text-white font-semibold hover:bg-orange-600">
                    "Start charting"
                </a>
                <a href="/prices" class="px-6 py-3 rounded-md border border-orange-500 text-orange-500 font-semibold">
                    "See pricing"
                </a>
            </div>
        </section>
    }
}

#[component]
pub fn Visualize(is_dark_mode: Signal<bool>, premier: MaybeSignal<bool>) -> impl IntoView {
    view! {
        <section class="max-w-6xl mx-auto px-4 py-12" data-testid="dashboard-visualize">
            <div class=move || format!("p-8 {}", card_class(is_dark_mode.get()))>
                <h2 class="text-2xl font-bold">"Visualize anything"</h2>
                {move || {
                    if premier.get() {
                        view! {
                            <p class="mt-2 text-green-500 font-semibold">
                                "Premium unlocked: advanced chart types and unlimited saves."
                            </p>
                        }
                        .into_view()
                    } else {
                        view! {
                            <p class=move || format!("mt-2 {}", muted_text_class(is_dark_mode.get()))>
                                "Free plan: core chart types. "
                                <a href="/prices" class="text-orange-500 underline">"Upgrade"</a>
                                " for more."
                            </p>
                        }
                        .into_view()
                    }
                }}
            </div>
        </section>
    }
}

#[component]
pub fn Achievements(is_dark_mode: Signal<bool>) -> impl IntoView {
    view! {
        <section class="max-w-6xl mx-auto px-4 py-12 grid grid-cols-2 md:grid-cols-4 gap-6" data-testid="dashboard-achievements">
            {ACHIEVEMENTS
                .iter()
                .map(|(value, label)| {
                    view! {
                        <div class=move || format!("p-6 text-center {}", card_class(is_dark_mode.get()))>
                            <p class="text-3xl font-extrabold text-orange-500">{*value}</p>
                            <p class=move || muted_text_class(is_dark_mode.get())>{*label}</p>
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}

#[component]
pub fn Steps(is_dark_mode: Signal<bool>) -> impl IntoView {
    view! {
        <section class="max-w-6xl mx-auto px-4 py-12" data-testid="dashboard-steps">
            <h2 class="text-2xl font-bold text-center">"How it works"</h2>
            <ol class="mt-8 grid md:grid-cols-3 gap-6">
                {STEPS
                    .iter()
                    .enumerate()
                    .map(|(index, (title, body))| {
                        view! {
                            <li class=move || format!("p-6 {}", card_class(is_dark_mode.get()))>
                                <span class="text-orange-500 font-bold">{format!("Step {}", index + 1)}</span>
                                <h3 class="mt-2 text-lg font-semibold">{*title}</h3>
                                <p class=move || muted_text_class(is_dark_mode.get())>{*body}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </section>
    }
}
