use crate::api::{ApiClient, ApiError, LoginRequest, UserResponse};
use leptos::*;

pub type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<UserResponse>,
    pub is_authenticated: bool,
    pub loading: bool,
}

impl AuthState {
    fn signed_in(state: &mut AuthState, user: UserResponse) {
        state.user = Some(user);
        state.is_authenticated = true;
        state.loading = false;
    }

    fn signed_out(state: &mut AuthState) {
        state.user = None;
        state.is_authenticated = false;
        state.loading = false;
    }
}

fn create_auth_context() -> AuthContext {
    let (auth_state, set_auth_state) = create_signal(AuthState {
        loading: true,
        ..AuthState::default()
    });

    let api_client = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    // Runs once on mount in the browser; server rendering stays in the loading state.
    create_effect(move |_| {
        let api_client = api_client.clone();
        spawn_local(async move {
            check_auth_status(&api_client, set_auth_state).await;
        });
    });

    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub async fn check_auth_status(api_client: &ApiClient, set_auth_state: WriteSignal<AuthState>) {
    match api_client.get_me().await {
        Ok(user) => set_auth_state.update(|state| AuthState::signed_in(state, user)),
        Err(err) => {
            log::debug!("No active session: {}", err);
            set_auth_state.update(AuthState::signed_out);
        }
    }
}

pub async fn login_request(
    request: LoginRequest,
    api_client: &ApiClient,
    set_auth_state: WriteSignal<AuthState>,
    on_success: Callback<UserResponse>,
) -> Result<UserResponse, ApiError> {
    // `loading` belongs to the initial session check only.
    let user = api_client.login(&request).await?;
    // Before the auth write: signing in disposes a protected route's in-place login form.
    on_success.call(user.clone());
    set_auth_state.update(|state| AuthState::signed_in(state, user.clone()));
    Ok(user)
}

pub async fn logout(
    api_client: &ApiClient,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    let result = api_client.logout().await;
    set_auth_state.update(AuthState::signed_out);
    result
}

pub fn use_login_action(
    on_success: Callback<UserResponse>,
) -> Action<LoginRequest, Result<UserResponse, ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let api = api.clone();
        async move { login_request(payload, &api, set_auth, on_success).await }
    })
}

pub fn use_logout_action() -> Action<(), Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);

    create_action(move |_: &()| {
        let api = api.clone();
        async move { logout(&api, set_auth).await }
    })
}
