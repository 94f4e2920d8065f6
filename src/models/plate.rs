use rocket::serde::{Deserialize, Serialize};

use crate::models::patient::Patient;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlateEvaluation {
    pub id: u64,
    pub ingredients: Vec<PlateIngredient>,
    pub score: f64,
    #[serde(default)]
    pub positives: Vec<String>,
    #[serde(default)]
    pub issues: Vec<String>,
    #[serde(default)]
    pub suggestions: String,
    pub is_visible_to_user: bool,
    pub is_hidden_from_nutritionist: bool,
    #[serde(default)]
    pub user_notes: Option<String>,
    #[serde(default)]
    pub nutritionist_notes: Option<String>,
    #[serde(default)]
    pub points_earned: i64,
    pub created_at: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PlateIngredient {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub subtype: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRecommendation {
    pub id: u64,
    #[serde(default)]
    pub plate_evaluation_id: Option<u64>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub evaluation_score: Option<f64>,
    #[serde(default)]
    pub evaluation_issues: Vec<String>,
    #[serde(default)]
    pub recipes: Vec<Recipe>,
    #[serde(default)]
    pub points_spent: i64,
    pub is_hidden_from_nutritionist: bool,
    pub created_at: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub cooking_time: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub nutritional_benefits: Vec<String>,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SavedPlates {
    pub patient: Patient,
    pub include_hidden: bool,
    pub plate_evaluations: Vec<PlateEvaluation>,
    pub recipe_recommendations: Vec<RecipeRecommendation>,
}
