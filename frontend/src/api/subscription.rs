use super::{
    client::{map_typed_response, ApiClient},
    types::{ApiError, SubscriptionResponse},
};

impl ApiClient {
    pub async fn get_subscription(&self) -> Result<SubscriptionResponse, ApiError> {
        let base_url = self.resolved_api_base_url().await;
        let response = self
            .send(self.http_client().get(format!("{}/subscription", base_url)))
            .await?;
        map_typed_response(response).await
    }
}
