use crate::auth::SessionToken;
use crate::backend::patient::PatientApi;
use crate::error::app_error::AppError;
use crate::models::dashboard::DashboardSummary;
use tracing::warn;

/// The dashboard still renders when the count cannot be fetched; it shows zero.
pub async fn dashboard_summary<A>(api: &A, token: &SessionToken) -> Result<DashboardSummary, AppError>
where
    A: PatientApi + Sync,
{
    let patient_count = match api.count_patients(token).await {
        Ok(count) => count,
        Err(AppError::Unauthorized) => return Err(AppError::Unauthorized),
        Err(err) => {
            warn!(error = %err, "failed to fetch patient count");
            0
        }
    };

    Ok(DashboardSummary { patient_count })
}
