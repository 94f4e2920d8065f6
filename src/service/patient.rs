use crate::auth::SessionToken;
use crate::backend::custom_instruction::CustomInstructionApi;
use crate::backend::meal_log::MealLogApi;
use crate::backend::nutrition_plan::NutritionPlanApi;
use crate::backend::patient::PatientApi;
use crate::error::app_error::AppError;
use crate::models::custom_instruction::CustomInstructions;
use crate::models::meal_log::MealLog;
use crate::models::nutrition_plan::NutritionPlanDoc;
use crate::models::patient::{PatientOverview, PatientScoped};
use crate::service::registration::group_registration_steps;

pub async fn patient_overview<A>(api: &A, token: &SessionToken, patient_id: u64) -> Result<PatientOverview, AppError>
where
    A: PatientApi + Sync,
{
    let patient = api.get_patient(token, patient_id).await?;
    let sections = group_registration_steps(&patient.registration.information);

    Ok(PatientOverview {
        full_name: patient.full_name(),
        sections,
        patient,
    })
}

pub async fn patient_meal_logs<A>(api: &A, token: &SessionToken, patient_id: u64) -> Result<PatientScoped<MealLog>, AppError>
where
    A: PatientApi + MealLogApi + Sync,
{
    let (patient, items) = tokio::try_join!(api.get_patient(token, patient_id), api.list_meal_logs(token, patient_id))?;
    Ok(PatientScoped { patient, items })
}

pub async fn patient_nutrition_plans<A>(api: &A, token: &SessionToken, patient_id: u64) -> Result<PatientScoped<NutritionPlanDoc>, AppError>
where
    A: PatientApi + NutritionPlanApi + Sync,
{
    let (patient, items) = tokio::try_join!(api.get_patient(token, patient_id), api.list_nutrition_plans(token, patient_id))?;
    Ok(PatientScoped { patient, items })
}

/// Instructions are global to the nutritionist; they are listed in the
/// context of the patient being edited. Highest priority first.
pub async fn patient_custom_instructions<A>(api: &A, token: &SessionToken, patient_id: u64) -> Result<PatientScoped<CustomInstructions>, AppError>
where
    A: PatientApi + CustomInstructionApi + Sync,
{
    let (patient, mut items) = tokio::try_join!(api.get_patient(token, patient_id), api.list_custom_instructions(token))?;
    items.sort_by(|a, b| b.priority.cmp(&a.priority));
    Ok(PatientScoped { patient, items })
}
