use crate::auth::SessionToken;
use crate::backend::rest_client::RestClient;
use crate::error::app_error::AppError;
use crate::models::invite::InviteBoard;
use crate::service::invite::invite_board;
use rocket::serde::json::Json;
use rocket::{State, get, routes};

#[get("/")]
pub async fn list_invites(client: &State<RestClient>, token: SessionToken) -> Result<Json<InviteBoard>, AppError> {
    Ok(Json(invite_board(client.inner(), &token).await?))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![list_invites]
}
