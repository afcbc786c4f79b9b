#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::UserResponse;
    use crate::state::auth::AuthState;
    use leptos::*;

    pub fn sample_user() -> UserResponse {
        UserResponse {
            id: "u-ada".into(),
            name: "Ada Lovelace".into(),
            email: "ada@graphx.io".into(),
            avatar_url: None,
        }
    }

    /// Provides a settled auth context; `None` means signed out.
    pub fn provide_auth(
        user: Option<UserResponse>,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(AuthState {
            is_authenticated: user.is_some(),
            user,
            loading: false,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }
}
