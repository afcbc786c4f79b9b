use leptos::*;

#[component]
pub fn LoginSuccessBanner(#[prop(into)] is_dark_mode: MaybeSignal<bool>) -> impl IntoView {
    let class = move || {
        if is_dark_mode.get() {
            "fixed top-20 right-4 px-4 py-2 rounded-md z-50 bg-green-700 text-white"
        } else {
            "fixed top-20 right-4 px-4 py-2 rounded-md z-50 bg-green-500 text-white"
        }
    };
    view! {
        <div class=class role="alert">
            "Login successful!"
        </div>
    }
}
