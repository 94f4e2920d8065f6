use crate::auth::SessionToken;
use crate::backend::rest_client::RestClient;
use crate::error::app_error::AppError;
use crate::models::ingredient::Ingredient;
use crate::service::ingredient::ingredient_list;
use rocket::serde::json::Json;
use rocket::{State, get, routes};

#[get("/")]
pub async fn list_ingredients(client: &State<RestClient>, token: SessionToken) -> Result<Json<Vec<Ingredient>>, AppError> {
    Ok(Json(ingredient_list(client.inner(), &token).await?))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![list_ingredients]
}
