use crate::auth::SessionToken;
use crate::backend::rest_client::RestClient;
use crate::error::app_error::AppError;
use crate::models::custom_instruction::CustomInstructions;

#[async_trait::async_trait]
pub trait CustomInstructionApi {
    async fn list_custom_instructions(&self, token: &SessionToken) -> Result<Vec<CustomInstructions>, AppError>;
}

#[async_trait::async_trait]
impl CustomInstructionApi for RestClient {
    async fn list_custom_instructions(&self, token: &SessionToken) -> Result<Vec<CustomInstructions>, AppError> {
        self.get_json(token, "/custom-instructions").await
    }
}
