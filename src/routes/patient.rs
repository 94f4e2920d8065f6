use crate::auth::SessionToken;
use crate::backend::rest_client::RestClient;
use crate::error::app_error::AppError;
use crate::models::custom_instruction::CustomInstructions;
use crate::models::invite::Invite;
use crate::models::meal_log::MealLog;
use crate::models::nutrition_plan::NutritionPlanDoc;
use crate::models::patient::{PatientOverview, PatientScoped};
use crate::models::plate::SavedPlates;
use crate::service::invite::patient_roster;
use crate::service::patient::{patient_custom_instructions, patient_meal_logs, patient_nutrition_plans, patient_overview};
use crate::service::plate::saved_plates;
use rocket::serde::json::Json;
use rocket::{State, get, routes};

/// Every patient joined through an invite, so the roster is built from them.
#[get("/")]
pub async fn list_patients(client: &State<RestClient>, token: SessionToken) -> Result<Json<Vec<Invite>>, AppError> {
    Ok(Json(patient_roster(client.inner(), &token).await?))
}

#[get("/<patient_id>")]
pub async fn get_patient(client: &State<RestClient>, token: SessionToken, patient_id: u64) -> Result<Json<PatientOverview>, AppError> {
    Ok(Json(patient_overview(client.inner(), &token, patient_id).await?))
}

#[get("/<patient_id>/meal-logs")]
pub async fn get_meal_logs(client: &State<RestClient>, token: SessionToken, patient_id: u64) -> Result<Json<PatientScoped<MealLog>>, AppError> {
    Ok(Json(patient_meal_logs(client.inner(), &token, patient_id).await?))
}

#[get("/<patient_id>/nutrition-plan")]
pub async fn get_nutrition_plans(
    client: &State<RestClient>,
    token: SessionToken,
    patient_id: u64,
) -> Result<Json<PatientScoped<NutritionPlanDoc>>, AppError> {
    Ok(Json(patient_nutrition_plans(client.inner(), &token, patient_id).await?))
}

#[get("/<patient_id>/custom-instructions")]
pub async fn get_custom_instructions(
    client: &State<RestClient>,
    token: SessionToken,
    patient_id: u64,
) -> Result<Json<PatientScoped<CustomInstructions>>, AppError> {
    Ok(Json(patient_custom_instructions(client.inner(), &token, patient_id).await?))
}

#[get("/<patient_id>/saved-plates?<include_hidden>")]
pub async fn get_saved_plates(
    client: &State<RestClient>,
    token: SessionToken,
    patient_id: u64,
    include_hidden: Option<bool>,
) -> Result<Json<SavedPlates>, AppError> {
    Ok(Json(saved_plates(client.inner(), &token, patient_id, include_hidden.unwrap_or(false)).await?))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![
        list_patients,
        get_patient,
        get_meal_logs,
        get_nutrition_plans,
        get_custom_instructions,
        get_saved_plates
    ]
}
