use axum::{
    extract::{Request, State},
    middleware as axum_middleware,
    response::{IntoResponse, Response},
    Router,
};
use tower::{ServiceBuilder, ServiceExt};
use tower_http::trace::TraceLayer;

use crate::{middleware, proxy, state::AppState};

/// No CORS layer: preflights and CORS headers belong to the upstream.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .fallback(dispatch)
        .layer(
            ServiceBuilder::new()
                .layer(axum_middleware::from_fn(middleware::request_id))
                .layer(TraceLayer::new_for_http())
                .layer(axum_middleware::from_fn(middleware::log_error_responses)),
        )
        .with_state(state)
}

async fn dispatch(State(state): State<AppState>, req: Request) -> Response {
    if let Some(rule) = proxy::find_rule(&state.config.rules, req.uri().path()) {
        let rule = rule.clone();
        return proxy::forward(&state, &rule, req).await.into_response();
    }
    match state.assets.clone().oneshot(req).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}
