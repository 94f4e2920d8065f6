use crate::auth::SessionToken;
use crate::backend::rest_client::RestClient;
use crate::error::app_error::AppError;
use crate::models::dashboard::DashboardSummary;
use crate::service::dashboard::dashboard_summary;
use rocket::serde::json::Json;
use rocket::{State, get, routes};

#[get("/")]
pub async fn get_dashboard(client: &State<RestClient>, token: SessionToken) -> Result<Json<DashboardSummary>, AppError> {
    Ok(Json(dashboard_summary(client.inner(), &token).await?))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![get_dashboard]
}

#[cfg(test)]
mod tests {
    use crate::auth::tests::token_expiring_at;
    use crate::test_utils::client;
    use chrono::{Duration, Utc};
    use rocket::http::{Cookie, Status};

    #[rocket::async_test]
    async fn dashboard_renders_for_live_session() {
        let client = client().await;
        let token = token_expiring_at(Utc::now() + Duration::hours(1));
        let response = client.get("/dashboard").cookie(Cookie::new("jwt", token)).dispatch().await;

        assert_eq!(response.status(), Status::Ok);
        let body: serde_json::Value = response.into_json().await.expect("dashboard json");
        assert_eq!(body["patientCount"], 0);
    }

    #[rocket::async_test]
    async fn dashboard_requires_a_session() {
        let client = client().await;
        let response = client.get("/dashboard").dispatch().await;

        assert_eq!(response.status(), Status::TemporaryRedirect);
        assert_eq!(response.headers().get_one("Location"), Some("/login"));
    }
}
