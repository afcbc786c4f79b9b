use leptos::*;

use crate::state::theme::{card_class, muted_text_class};

struct Plan {
    name: &'static str,
    price: &'static str,
    features: &'static [&'static str],
    paid: bool,
}

const PLANS: &[Plan] = &[
    Plan {
        name: "Free",
        price: "$0",
        features: &["Core chart types", "Up to 3 saved graphs", "PNG export"],
        paid: false,
    },
    Plan {
        name: "Premier",
        price: "$9 / month",
        features: &["Every chart type", "Unlimited saved graphs", "SVG and PDF export", "API access"],
        paid: true,
    },
];

#[component]
pub fn PricingPage(
    #[prop(into)] is_dark_mode: MaybeSignal<bool>,
    #[prop(into)] premier: MaybeSignal<bool>,
    on_plan_purchase: Callback<()>,
) -> impl IntoView {
    let dark = Signal::derive(move || is_dark_mode.get());
    let premier = Signal::derive(move || premier.get());

    view! {
        <section class="max-w-5xl mx-auto px-4 py-16" data-testid="pricing-page">
            <h1 class="text-4xl font-extrabold text-center">"Pricing"</h1>
            <p class=move || format!("mt-2 text-center {}", muted_text_class(dark.get()))>
                "Start free, upgrade when your charts need more."
            </p>
            <div class="mt-12 grid md:grid-cols-2 gap-8">
                {PLANS
                    .iter()
                    .map(|plan| {
                        let paid = plan.paid;
                        view! {
                            <div class=move || format!("p-8 flex flex-col {}", card_class(dark.get()))>
                                <h2 class="text-2xl font-bold">{plan.name}</h2>
                                <p class="mt-2 text-3xl font-extrabold text-orange-500">{plan.price}</p>
                                <ul class="mt-6 space-y-2 flex-1">
                                    {plan.features.iter().map(|f| view! { <li>"✓ " {*f}</li> }).collect_view()}
                                </ul>
                                {paid.then(|| view! {
                                    <button
                                        type="button"
                                        class="mt-8 py-2 rounded-md bg-orange-500 text-white font-semibold disabled:opacity-50"
                                        disabled=move || premier.get()
                                        on:click=move |_| on_plan_purchase.call(())
                                    >
                                        {move || if premier.get() { "Current plan" } else { "Upgrade to Premier" }}
                                    </button>
                                })}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
