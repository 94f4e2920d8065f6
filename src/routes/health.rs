use crate::models::health::HealthResponse;
use rocket::serde::json::Json;
use rocket::{get, routes};

#[get("/")]
pub async fn healthcheck() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub fn routes() -> Vec<rocket::Route> {
    routes![healthcheck]
}
