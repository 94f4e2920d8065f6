use crate::auth::SessionToken;
use crate::backend::rest_client::RestClient;
use crate::error::app_error::AppError;
use crate::models::nutrition_plan::NutritionPlanDoc;

#[async_trait::async_trait]
pub trait NutritionPlanApi {
    async fn list_nutrition_plans(&self, token: &SessionToken, patient_id: u64) -> Result<Vec<NutritionPlanDoc>, AppError>;
}

#[async_trait::async_trait]
impl NutritionPlanApi for RestClient {
    async fn list_nutrition_plans(&self, token: &SessionToken, patient_id: u64) -> Result<Vec<NutritionPlanDoc>, AppError> {
        self.get_json(token, &format!("/nutrition-plan/patient/{patient_id}")).await
    }
}
