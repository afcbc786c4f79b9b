use leptos::*;

/// Full-screen splash shown while the session check or the splash gate blocks the app.
#[component]
pub fn Loading(#[prop(into)] is_dark_mode: MaybeSignal<bool>) -> impl IntoView {
    let background = move || {
        if is_dark_mode.get() {
            "min-h-screen flex flex-col items-center justify-center bg-[#111827] text-white"
        } else {
            "min-h-screen flex flex-col items-center justify-center bg-[#FFF6F3] text-black"
        }
    };
    view! {
        <div class=background data-testid="loading-splash" role="status" aria-live="polite">
            <div class="animate-spin rounded-full h-12 w-12 border-b-2 border-orange-500"></div>
            <p class="mt-4 text-lg font-semibold tracking-wide">"GraphX"</p>
            <span class="sr-only">"Loading"</span>
        </div>
    }
}
