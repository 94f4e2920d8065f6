use crate::auth::SessionToken;
use crate::backend::rest_client::RestClient;
use crate::error::app_error::AppError;
use crate::models::ingredient::Ingredient;

#[async_trait::async_trait]
pub trait IngredientApi {
    async fn list_ingredients(&self, token: &SessionToken) -> Result<Vec<Ingredient>, AppError>;
}

#[async_trait::async_trait]
impl IngredientApi for RestClient {
    async fn list_ingredients(&self, token: &SessionToken) -> Result<Vec<Ingredient>, AppError> {
        self.get_json(token, "/plate-ingredient").await
    }
}
