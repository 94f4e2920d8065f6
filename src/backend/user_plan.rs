use crate::auth::SessionToken;
use crate::backend::rest_client::RestClient;
use crate::error::app_error::AppError;
use crate::models::user_plan::UserPlan;

#[async_trait::async_trait]
pub trait UserPlanApi {
    async fn list_user_plans(&self, token: &SessionToken) -> Result<Vec<UserPlan>, AppError>;
    async fn get_active_plan(&self, token: &SessionToken) -> Result<Option<UserPlan>, AppError>;
}

#[async_trait::async_trait]
impl UserPlanApi for RestClient {
    async fn list_user_plans(&self, token: &SessionToken) -> Result<Vec<UserPlan>, AppError> {
        self.get_json(token, "/user-plans").await
    }

    async fn get_active_plan(&self, token: &SessionToken) -> Result<Option<UserPlan>, AppError> {
        self.get_json(token, "/user-plans/active").await
    }
}
