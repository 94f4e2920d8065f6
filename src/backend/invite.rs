use crate::auth::SessionToken;
use crate::backend::rest_client::RestClient;
use crate::error::app_error::AppError;
use crate::models::invite::Invite;

#[async_trait::async_trait]
pub trait InviteApi {
    async fn list_invites(&self, token: &SessionToken) -> Result<Vec<Invite>, AppError>;
}

#[async_trait::async_trait]
impl InviteApi for RestClient {
    async fn list_invites(&self, token: &SessionToken) -> Result<Vec<Invite>, AppError> {
        self.get_json(token, "/invite").await
    }
}
