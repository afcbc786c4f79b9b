use leptos::*;

use crate::state::theme::{card_class, muted_text_class};

/// Chart types offered by the generator; the flag marks premium-only ones.
pub const CHART_TYPES: &[(&str, bool)] = &[
    ("Bar", false),
    ("Line", false),
    ("Pie", false),
    ("Scatter", true),
    ("Radar", true),
    ("Heatmap", true),
];

pub fn chart_available(premium_only: bool, premier: bool) -> bool {
    !premium_only || premier
}

#[component]
pub fn WorkspacePage(
    #[prop(into)] graph_title: String,
    #[prop(into)] is_dark_mode: MaybeSignal<bool>,
    #[prop(into)] premier: MaybeSignal<bool>,
) -> impl IntoView {
    let dark = Signal::derive(move || is_dark_mode.get());

    view! {
        <section class="max-w-6xl mx-auto px-4 py-12" data-testid="workspace-page">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold">{graph_title}</h1>
                <a href="/generate" class="px-4 py-2 rounded-md bg-orange-500 text-white">"New chart"</a>
            </div>
            <div class=move || format!("mt-8 p-10 text-center {}", card_class(dark.get()))>
                <p class=move || muted_text_class(dark.get())>
                    "Your canvas is empty. Pick a chart type to get started."
                </p>
                {move || (!premier.get()).then(|| view! {
                    <p class="mt-4 text-sm">
                        <a href="/prices" class="text-orange-500 underline">"Go Premier"</a>
                        " to unlock every chart type."
                    </p>
                })}
            </div>
        </section>
    }
}

#[component]
pub fn ChartContainerPage(
    #[prop(into)] is_dark_mode: MaybeSignal<bool>,
    #[prop(into)] premier: MaybeSignal<bool>,
) -> impl IntoView {
    let dark = Signal::derive(move || is_dark_mode.get());
    let premier = Signal::derive(move || premier.get());

    view! {
        <section class="max-w-6xl mx-auto px-4 py-12" data-testid="chart-container-page">
            <h1 class="text-3xl font-bold">"Generate a chart"</h1>
            <div class="mt-8 grid grid-cols-2 md:grid-cols-3 gap-6">
                {CHART_TYPES
                    .iter()
                    .map(|(name, premium_only)| {
                        let premium_only = *premium_only;
                        view! {
                            <div class=move || {
                                let locked = !chart_available(premium_only, premier.get());
                                format!(
                                    "p-6 text-center {}{}",
                                    card_class(dark.get()),
                                    if locked { " opacity-50" } else { "" },
                                )
                            }>
                                <p class="text-lg font-semibold">{*name}</p>
                                {move || (!chart_available(premium_only, premier.get()))
                                    .then(|| view! { <p class="text-xs text-orange-500">"Premier only"</p> })}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn premium_chart_types_lock_without_premier() {
        assert!(chart_available(false, false));
        assert!(!chart_available(true, false));
        assert!(chart_available(true, true));
    }

    #[test]
    fn workspace_shows_title() {
        let html = render_to_string(move || {
            view! { <WorkspacePage graph_title="My Chart" is_dark_mode=false premier=true/> }
        });
        assert!(html.contains("My Chart"));
        assert!(!html.contains("Go Premier"));
    }

    #[test]
    fn generator_marks_locked_types() {
        let html = render_to_string(move || {
            view! { <ChartContainerPage is_dark_mode=false premier=false/> }
        });
        assert!(html.contains("Heatmap"));
        assert!(html.contains("Premier only"));

        let html = render_to_string(move || {
            view! { <ChartContainerPage is_dark_mode=false premier=true/> }
        });
        assert!(!html.contains("Premier only"));
    }
}
