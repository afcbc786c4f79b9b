use super::{
    client::{map_empty_response, map_typed_response, ApiClient},
    types::{ApiError, LoginRequest, RegisterRequest, UserEnvelope, UserResponse},
};

impl ApiClient {
    pub async fn get_me(&self) -> Result<UserResponse, ApiError> {
        let base_url = self.resolved_auth_base_url().await;
        let response = self
            .send(self.http_client().get(format!("{}/me", base_url)))
            .await?;
        map_typed_response::<UserEnvelope>(response)
            .await
            .map(UserEnvelope::into_user)
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<UserResponse, ApiError> {
        let base_url = self.resolved_auth_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/login", base_url))
                    .json(request),
            )
            .await?;
        map_typed_response::<UserEnvelope>(response)
            .await
            .map(UserEnvelope::into_user)
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        let base_url = self.resolved_auth_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/register", base_url))
                    .json(request),
            )
            .await?;
        map_empty_response(response).await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        let base_url = self.resolved_auth_base_url().await;
        let response = self
            .send(self.http_client().post(format!("{}/logout", base_url)))
            .await?;
        map_empty_response(response).await
    }
}
