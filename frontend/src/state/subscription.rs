use crate::{api::ApiClient, state::auth::AuthState};
use leptos::*;

/// Premium flag derived from the subscription endpoint.
///
/// Only the newest refresh may write the flag; a response that arrives after
/// a later refresh (or a sign-out) is discarded.
#[derive(Clone, Copy)]
pub struct SubscriptionState {
    premium: RwSignal<bool>,
    generation: StoredValue<u64>,
    api: StoredValue<ApiClient>,
}

impl SubscriptionState {
    pub fn new(api: ApiClient) -> Self {
        Self {
            premium: create_rw_signal(false),
            generation: store_value(0),
            api: store_value(api),
        }
    }

    pub fn premium(&self) -> Signal<bool> {
        self.premium.into()
    }

    /// Called by the pricing page once a plan has been bought.
    pub fn mark_purchased(&self) {
        self.begin();
        self.premium.set(true);
    }

    pub fn refresh(&self, is_authenticated: bool) {
        let generation = self.begin();
        if !is_authenticated {
            self.premium.set(false);
            return;
        }
        let state = *self;
        let api = self.api.get_value();
        spawn_local(async move {
            let premium = fetch_premium(&api, true).await;
            state.apply(generation, premium);
        });
    }

    fn begin(&self) -> u64 {
        self.generation.update_value(|g| *g += 1);
        self.generation.get_value()
    }

    fn apply(&self, generation: u64, premium: bool) -> bool {
        if self.generation.try_get_value() != Some(generation) {
            return false;
        }
        self.premium.set(premium);
        true
    }
}

pub async fn fetch_premium(api: &ApiClient, is_authenticated: bool) -> bool {
    if !is_authenticated {
        return false;
    }
    match api.get_subscription().await {
        Ok(response) => response.has_active_plan(),
        Err(err) => {
            log::error!("Failed to fetch subscription: {}", err);
            false
        }
    }
}

/// Creates the premium flag and re-checks it whenever the signed-in state flips.
pub fn provide_subscription(auth: ReadSignal<AuthState>) -> SubscriptionState {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let state = SubscriptionState::new(api);
    provide_context(state);

    let is_authenticated = create_memo(move |_| auth.with(|a| a.is_authenticated));
    create_effect(move |_| {
        state.refresh(is_authenticated.get());
    });

    state
}

pub fn use_subscription() -> SubscriptionState {
    use_context::<SubscriptionState>()
        .unwrap_or_else(|| SubscriptionState::new(ApiClient::new()))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;
    use httpmock::prelude::*;
    use serde_json::json;

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new_with_base_urls(server.url("/api"), server.url("/auth"))
    }

    #[tokio::test]
    async fn active_plan_sets_premium() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/subscription");
            then.status(200).json_body(json!({ "subscription": { "plan": "pro" } }));
        });
        assert!(fetch_premium(&client_for(&server), true).await);
    }

    #[tokio::test]
    async fn failed_fetch_is_never_premium() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/subscription");
            then.status(500).json_body(json!({ "error": "boom" }));
        });
        assert!(!fetch_premium(&client_for(&server), true).await);

        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/subscription");
            then.status(200).body("not json");
        });
        assert!(!fetch_premium(&client_for(&server), true).await);

        let unreachable =
            ApiClient::new_with_base_urls("http://127.0.0.1:9/api", "http://127.0.0.1:9/auth");
        assert!(!fetch_premium(&unreachable, true).await);
    }

    #[tokio::test]
    async fn signed_out_skips_request() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/api/subscription");
            then.status(200).json_body(json!({ "subscription": { "plan": "pro" } }));
        });
        assert!(!fetch_premium(&client_for(&server), false).await);
        mock.assert_hits(0);
    }

    #[test]
    fn stale_results_are_discarded() {
        with_runtime(|| {
            let state = SubscriptionState::new(ApiClient::new());
            let first = state.begin();
            let second = state.begin();
            assert!(!state.apply(first, true));
            assert!(!state.premium.get_untracked());
            assert!(state.apply(second, true));
            assert!(state.premium.get_untracked());
        });
    }

    #[test]
    fn sign_out_resets_premium_and_invalidates_pending_fetch() {
        with_runtime(|| {
            let state = SubscriptionState::new(ApiClient::new());
            state.mark_purchased();
            assert!(state.premium().get_untracked());

            let pending = state.begin();
            state.refresh(false);
            assert!(!state.premium.get_untracked());
            assert!(!state.apply(pending, true));
            assert!(!state.premium.get_untracked());
        });
    }
}
