use crate::auth::SessionToken;
use crate::backend::rest_client::RestClient;
use crate::error::app_error::AppError;
use crate::models::patient::{Patient, PatientCount};

#[async_trait::async_trait]
pub trait PatientApi {
    async fn get_patient(&self, token: &SessionToken, id: u64) -> Result<Patient, AppError>;
    async fn count_patients(&self, token: &SessionToken) -> Result<u64, AppError>;
}

#[async_trait::async_trait]
impl PatientApi for RestClient {
    async fn get_patient(&self, token: &SessionToken, id: u64) -> Result<Patient, AppError> {
        self.get_json(token, &format!("/patient/{id}")).await
    }

    async fn count_patients(&self, token: &SessionToken) -> Result<u64, AppError> {
        let count: PatientCount = self.get_json(token, "/patient/count").await?;
        Ok(count.count)
    }
}
