use leptos::*;

const DARK_CLASS: &str = "dark";

/// Dark-mode flag owned by the app root. Starts light on every load.
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub dark: RwSignal<bool>,
}

impl ThemeState {
    pub fn new(dark: bool) -> Self {
        Self {
            dark: create_rw_signal(dark),
        }
    }

    pub fn toggle(&self) {
        self.dark.update(|dark| *dark = !*dark);
    }
}

pub fn root_class(dark: bool) -> &'static str {
    if dark {
        "min-h-screen transition-colors duration-300 bg-[#111827] text-white"
    } else {
        "min-h-screen transition-colors duration-300 bg-[#FFF6F3] text-black"
    }
}

pub fn card_class(dark: bool) -> &'static str {
    if dark {
        "rounded-xl shadow-lg bg-gray-800 text-gray-100 border border-gray-700"
    } else {
        "rounded-xl shadow-lg bg-white text-gray-900 border border-orange-100"
    }
}

pub fn muted_text_class(dark: bool) -> &'static str {
    if dark {
        "text-gray-400"
    } else {
        "text-gray-600"
    }
}

#[cfg(target_arch = "wasm32")]
fn apply_to_dom(dark: bool) {
    let Some(html) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let list = html.class_list();
    let _ = if dark {
        list.add_1(DARK_CLASS)
    } else {
        list.remove_1(DARK_CLASS)
    };
}

#[cfg(not(target_arch = "wasm32"))]
fn apply_to_dom(_dark: bool) {}

pub fn provide_theme() -> ThemeState {
    let state = ThemeState::new(false);
    provide_context(state);
    create_effect(move |_| {
        let dark = state.dark.get();
        log::debug!("Applying {} theme", if dark { DARK_CLASS } else { "light" });
        apply_to_dom(dark);
    });
    state
}

pub fn use_theme() -> ThemeState {
    use_context::<ThemeState>().unwrap_or_else(|| ThemeState::new(false))
}
