use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::{api::types::ApiError, config};

const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Clone, Default)]
pub struct ApiClient {
    client: Client,
    api_base_url: Option<String>,
    auth_base_url: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_with_base_urls(api_base_url: impl Into<String>, auth_base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_base_url: Some(api_base_url.into()),
            auth_base_url: Some(auth_base_url.into()),
        }
    }

    pub(crate) async fn resolved_api_base_url(&self) -> String {
        match &self.api_base_url {
            Some(base) => base.clone(),
            None => config::await_api_base_url().await,
        }
    }

    pub(crate) async fn resolved_auth_base_url(&self) -> String {
        match &self.auth_base_url {
            Some(base) => base.clone(),
            None => config::await_auth_base_url().await,
        }
    }

    /// Every call carries the session cookie and a fresh request id.
    pub(crate) fn credentialed(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.header(REQUEST_ID_HEADER, Uuid::new_v4().to_string());
        #[cfg(target_arch = "wasm32")]
        let builder = builder.fetch_credentials_include();
        builder
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        self.credentialed(builder)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))
    }
}

pub(crate) async fn map_typed_response<T>(response: Response) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let status = response.status();
    if status.is_success() {
        response
            .json()
            .await
            .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
    } else {
        Err(map_error_payload(response).await)
    }
}

pub(crate) async fn map_empty_response(response: Response) -> Result<(), ApiError> {
    if response.status().is_success() {
        Ok(())
    } else {
        Err(map_error_payload(response).await)
    }
}

async fn map_error_payload(response: Response) -> ApiError {
    let status = response.status().as_u16();
    response
        .json::<ApiError>()
        .await
        .unwrap_or_else(|_| ApiError::http_status(status))
}
