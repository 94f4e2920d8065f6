use crate::auth::SessionToken;
use crate::backend::rest_client::RestClient;
use crate::error::app_error::AppError;
use crate::models::meal_log::MealLog;

#[async_trait::async_trait]
pub trait MealLogApi {
    async fn list_meal_logs(&self, token: &SessionToken, patient_id: u64) -> Result<Vec<MealLog>, AppError>;
}

#[async_trait::async_trait]
impl MealLogApi for RestClient {
    async fn list_meal_logs(&self, token: &SessionToken, patient_id: u64) -> Result<Vec<MealLog>, AppError> {
        self.get_json(token, &format!("/food-log/patient/{patient_id}")).await
    }
}
