use crate::api::ApiError;
use leptos::*;

/// Collects `details.errors` when the server attached field messages.
fn detail_messages(error: &ApiError) -> Vec<String> {
    error
        .details
        .as_ref()
        .and_then(|details| details.get("errors"))
        .and_then(|errors| errors.as_array())
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| e.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

#[component]
pub fn FormError(#[prop(into)] error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.with(Option::is_some) fallback=|| ()>
            <div class="border border-red-300 bg-red-50 text-red-700 px-4 py-3 rounded-md space-y-1 my-2" role="alert">
                <div class="font-semibold">
                    {move || error.get().map(|e| e.error).unwrap_or_default()}
                </div>
                {move || {
                    error
                        .get()
                        .map(|e| {
                            let details = detail_messages(&e);
                            if details.is_empty() {
                                ().into_view()
                            } else {
                                view! {
                                    <ul class="list-disc list-inside text-sm">
                                        {details.into_iter().map(|d| view! { <li>{d}</li> }).collect_view()}
                                    </ul>
                                }
                                .into_view()
                            }
                        })
                        .unwrap_or_else(|| ().into_view())
                }}
            </div>
        </Show>
    }
}
