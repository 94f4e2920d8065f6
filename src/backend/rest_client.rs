use crate::auth::SessionToken;
use crate::config::BackendConfig;
use crate::error::app_error::AppError;
use crate::models::user::LoginRequest;
use reqwest::header::{ACCEPT, COOKIE, SET_COOKIE};
use reqwest::{Method, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// HTTP client for the nutrition backend. Every call carries the caller's
/// session cookie; the backend authenticates and authorizes it.
#[derive(Clone, Debug)]
pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
    cookie_name: String,
}

/// A request relayed verbatim from a browser to the backend.
#[derive(Debug, Default)]
pub struct ForwardedRequest {
    pub path_and_query: String,
    pub cookie: Option<String>,
    pub content_type: Option<String>,
    pub accept: Option<String>,
    pub authorization: Option<String>,
    pub body: Vec<u8>,
}

impl RestClient {
    pub fn new(config: &BackendConfig, cookie_name: &str) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.max(1)))
            .build()
            .map_err(|e| AppError::backend_unavailable("Failed to build backend HTTP client", e))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            cookie_name: cookie_name.to_string(),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn session_cookie(&self, token: &SessionToken) -> String {
        format!("{}={}", self.cookie_name, token.as_str())
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, token: &SessionToken, path: &str) -> Result<T, AppError> {
        debug!(path = %path, "backend GET");

        let response = self
            .http
            .get(self.url(path))
            .header(COOKIE, self.session_cookie(token))
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| AppError::backend_unavailable(format!("GET {path} failed"), e))?;

        let response = ensure_success(response, path).await?;

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::backend_payload(format!("GET {path} returned an unexpected payload"), e))
    }

    /// Posts the login form and hands back the cookies the backend set.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<Vec<String>, AppError> {
        let response = self
            .http
            .post(self.url("/admin/login"))
            .json(credentials)
            .send()
            .await
            .map_err(|e| AppError::backend_unavailable("POST /admin/login failed", e))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            let message = response.text().await.unwrap_or_default();
            return Err(AppError::InvalidCredentials(message));
        }
        let response = ensure_success(response, "/admin/login").await?;

        Ok(response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .map(str::to_string)
            .collect())
    }

    /// Posts a form that needs no session, such as the password recovery steps.
    pub async fn post_public<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), AppError> {
        debug!(path = %path, "backend POST");

        let response = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| AppError::backend_unavailable(format!("POST {path} failed"), e))?;

        ensure_success(response, path).await?;
        Ok(())
    }

    pub(crate) async fn forward(&self, method: Method, request: ForwardedRequest) -> Result<Response, AppError> {
        debug!(method = %method, path = %request.path_and_query, "proxying request to backend");

        let mut builder = self.http.request(method.clone(), self.url(&request.path_and_query));
        for (name, value) in [
            (COOKIE, request.cookie),
            (reqwest::header::CONTENT_TYPE, request.content_type),
            (ACCEPT, request.accept),
            (reqwest::header::AUTHORIZATION, request.authorization),
        ] {
            if let Some(value) = value {
                builder = builder.header(name, value);
            }
        }
        if !request.body.is_empty() {
            builder = builder.body(request.body);
        }

        builder
            .send()
            .await
            .map_err(|e| AppError::backend_unavailable(format!("{method} {} failed", request.path_and_query), e))
    }
}

async fn ensure_success(response: Response, path: &str) -> Result<Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();
    warn!(path = %path, status = status.as_u16(), message = %message, "backend rejected request");
    Err(AppError::from_backend_status(status.as_u16(), message))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> RestClient {
        let config = BackendConfig {
            base_url: base_url.to_string(),
            timeout_seconds: 1,
        };
        RestClient::new(&config, "jwt").unwrap()
    }

    #[test]
    fn joins_paths_with_a_single_slash() {
        let client = client("https://api.example.com/");
        assert_eq!(client.url("/patient/5"), "https://api.example.com/patient/5");
        assert_eq!(client.url("invite"), "https://api.example.com/invite");
    }

    #[test]
    fn session_cookie_uses_configured_name() {
        let client = client("http://localhost");
        assert_eq!(client.session_cookie(&SessionToken("abc.def.ghi".into())), "jwt=abc.def.ghi");
    }

    #[tokio::test]
    async fn unreachable_backend_is_reported_as_unavailable() {
        let client = client("http://127.0.0.1:9");
        let result: Result<serde_json::Value, AppError> = client.get_json(&SessionToken("t".into()), "/patient/count").await;
        assert!(matches!(result, Err(AppError::BackendUnavailable { .. })));
    }

    #[tokio::test]
    async fn public_posts_report_an_unreachable_backend() {
        let client = client("http://127.0.0.1:9");
        let result = client.post_public("/auth/forgot-password", &serde_json::json!({"email": "nutri@example.com"})).await;
        assert!(matches!(result, Err(AppError::BackendUnavailable { .. })));
    }
}
