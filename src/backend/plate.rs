use crate::auth::SessionToken;
use crate::backend::rest_client::RestClient;
use crate::error::app_error::AppError;
use crate::models::plate::{PlateEvaluation, RecipeRecommendation};

#[async_trait::async_trait]
pub trait PlateApi {
    async fn list_plate_evaluations(&self, token: &SessionToken, patient_id: u64, include_hidden: bool) -> Result<Vec<PlateEvaluation>, AppError>;
    async fn list_recipe_recommendations(
        &self,
        token: &SessionToken,
        patient_id: u64,
        include_hidden: bool,
    ) -> Result<Vec<RecipeRecommendation>, AppError>;
}

#[async_trait::async_trait]
impl PlateApi for RestClient {
    async fn list_plate_evaluations(&self, token: &SessionToken, patient_id: u64, include_hidden: bool) -> Result<Vec<PlateEvaluation>, AppError> {
        self.get_json(token, &format!("/plate-evaluator/patient/{patient_id}?includeHidden={include_hidden}"))
            .await
    }

    async fn list_recipe_recommendations(
        &self,
        token: &SessionToken,
        patient_id: u64,
        include_hidden: bool,
    ) -> Result<Vec<RecipeRecommendation>, AppError> {
        self.get_json(token, &format!("/recipe-recommendations/patient/{patient_id}?includeHidden={include_hidden}"))
            .await
    }
}
