use rocket::serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserPlan {
    pub id: String,
    pub user_id: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub file_name: String,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub nutritionist: Option<String>,
    pub is_active: bool,
    pub upload_date: String,
    pub created_at: String,
    pub updated_at: String,
}

/// The plans page: every uploaded plan, newest first, and the one patients currently see.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PlansView {
    pub active: Option<UserPlan>,
    pub plans: Vec<UserPlan>,
}
