use crate::auth::SessionToken;
use crate::backend::rest_client::RestClient;
use crate::error::app_error::AppError;
use crate::models::user_plan::PlansView;
use crate::service::user_plan::plans_view;
use rocket::serde::json::Json;
use rocket::{State, get, routes};

#[get("/")]
pub async fn list_plans(client: &State<RestClient>, token: SessionToken) -> Result<Json<PlansView>, AppError> {
    Ok(Json(plans_view(client.inner(), &token).await?))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![list_plans]
}
