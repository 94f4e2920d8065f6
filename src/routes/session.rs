use crate::backend::rest_client::RestClient;
use crate::config::SessionConfig;
use crate::error::app_error::AppError;
use crate::middleware::session_gate::PendingRedirect;
use crate::models::user::{ForgotPasswordRequest, LoginRequest, LoginView, PasswordStepView, ResetPasswordRequest};
use rocket::http::{Cookie, CookieJar};
use rocket::response::{Redirect, Responder};
use rocket::serde::json::Json;
use rocket::{Request, State, get, post, routes};
use tracing::info;
use validator::Validate;

/// Answers requests the session gate intercepted.
#[get("/")]
pub fn resolve(pending: PendingRedirect, cookies: &CookieJar<'_>, session: &State<SessionConfig>) -> Redirect {
    if pending.clear_session {
        cookies.remove(Cookie::build(session.cookie_name.clone()).path("/").build());
        info!(target_path = %pending.target, "session cleared");
        return Redirect::found(pending.target);
    }

    Redirect::temporary(pending.target)
}

pub fn resolver_routes() -> Vec<rocket::Route> {
    routes![resolve]
}

#[get("/")]
pub fn login_view(session: &State<SessionConfig>) -> Json<LoginView> {
    Json(LoginView {
        action: session.login_path.clone(),
        forgot_password: format!("{}/forgot-password", session.login_path),
        reset_password: format!("{}/reset-password", session.login_path),
    })
}

/// Redirect that also relays the cookies the backend issued on login.
pub struct LoginRedirect {
    cookies: Vec<String>,
    redirect: Redirect,
}

impl<'r> Responder<'r, 'static> for LoginRedirect {
    fn respond_to(self, req: &'r Request<'_>) -> rocket::response::Result<'static> {
        let mut response = self.redirect.respond_to(req)?;
        for cookie in self.cookies {
            response.adjoin_raw_header("Set-Cookie", cookie);
        }
        Ok(response)
    }
}

#[post("/", data = "<payload>")]
pub async fn login(client: &State<RestClient>, session: &State<SessionConfig>, payload: Json<LoginRequest>) -> Result<LoginRedirect, AppError> {
    payload.validate()?;
    let cookies = client.login(&payload).await?;
    info!("nutritionist logged in");

    Ok(LoginRedirect {
        cookies,
        redirect: Redirect::to(session.dashboard_path.clone()),
    })
}

#[get("/forgot-password")]
pub fn forgot_password_view(session: &State<SessionConfig>) -> Json<PasswordStepView> {
    Json(PasswordStepView {
        action: format!("{}/forgot-password", session.login_path),
        next: format!("{}/reset-password", session.login_path),
    })
}

/// Asks the backend to email a reset code, then continues to the reset step.
#[post("/forgot-password", data = "<payload>")]
pub async fn forgot_password(
    client: &State<RestClient>,
    session: &State<SessionConfig>,
    payload: Json<ForgotPasswordRequest>,
) -> Result<Redirect, AppError> {
    payload.validate()?;
    client.post_public("/auth/forgot-password", &*payload).await?;

    Ok(Redirect::to(format!("{}/reset-password", session.login_path)))
}

#[get("/reset-password")]
pub fn reset_password_view(session: &State<SessionConfig>) -> Json<PasswordStepView> {
    Json(PasswordStepView {
        action: format!("{}/reset-password", session.login_path),
        next: session.login_path.clone(),
    })
}

#[post("/reset-password", data = "<payload>")]
pub async fn reset_password(
    client: &State<RestClient>,
    session: &State<SessionConfig>,
    payload: Json<ResetPasswordRequest>,
) -> Result<Redirect, AppError> {
    payload.validate()?;
    client.post_public("/auth/reset-password", &*payload).await?;
    info!("password reset completed");

    Ok(Redirect::to(session.login_path.clone()))
}

pub fn login_routes() -> Vec<rocket::Route> {
    routes![login_view, login, forgot_password_view, forgot_password, reset_password_view, reset_password]
}
