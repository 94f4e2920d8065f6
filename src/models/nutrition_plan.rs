use rocket::serde::{Deserialize, Serialize};

/// An uploaded nutrition-plan document attached to a patient.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NutritionPlanDoc {
    #[serde(rename = "_id")]
    pub id: String,
    pub file_name: String,
    pub url: String,
    pub created_at: String,
    pub updated_at: String,
}
