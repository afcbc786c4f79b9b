use gloo_timers::callback::Timeout;
use leptos::*;

pub const LOGIN_SUCCESS_PARAM: &str = "login_success";
pub const BANNER_DURATION_MS: u32 = 5_000;

/// True when `search` (with or without the leading `?`) carries `login_success`,
/// with or without a value.
pub fn has_login_success(search: &str) -> bool {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .any(|pair| pair.split('=').next() == Some(LOGIN_SUCCESS_PARAM))
}

/// Shows the "Login successful!" banner for five seconds after a redirect
/// carrying `?login_success`. A query change restarts or clears it.
pub fn use_login_success_banner(search: Signal<String>) -> Signal<bool> {
    let visible = create_rw_signal(search.with_untracked(|s| has_login_success(s)));
    let timer = store_value(None::<Timeout>);

    create_effect(move |_| {
        let show = search.with(|s| has_login_success(s));
        // Replacing the handle drops (and cancels) any running timeout.
        timer.set_value(None);
        visible.set(show);
        if show {
            timer.set_value(Some(Timeout::new(BANNER_DURATION_MS, move || {
                visible.set(false);
            })));
        }
    });

    visible.into()
}
