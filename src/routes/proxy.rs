use crate::backend::rest_client::{ForwardedRequest, RestClient};
use crate::config::ProxyConfig;
use crate::error::app_error::AppError;
use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, SET_COOKIE};
use rocket::data::{ByteUnit, Data};
use rocket::http::Status;
use rocket::http::uri::Origin;
use rocket::request::{FromRequest, Outcome, Request};
use rocket::response::Responder;
use rocket::{Response, State, delete, get, patch, post, put, routes};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Browser headers the backend needs to see.
#[derive(Debug, Default)]
pub struct ForwardedHeaders {
    cookie: Option<String>,
    content_type: Option<String>,
    accept: Option<String>,
    authorization: Option<String>,
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for ForwardedHeaders {
    type Error = ();

    async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let headers = req.headers();
        let cookies: Vec<&str> = headers.get("Cookie").collect();

        Outcome::Success(ForwardedHeaders {
            cookie: (!cookies.is_empty()).then(|| cookies.join("; ")),
            content_type: headers.get_one("Content-Type").map(str::to_string),
            accept: headers.get_one("Accept").map(str::to_string),
            authorization: headers.get_one("Authorization").map(str::to_string),
        })
    }
}

/// The backend's answer, relayed as-is.
#[derive(Debug)]
pub struct ProxiedResponse {
    status: u16,
    content_type: Option<String>,
    set_cookies: Vec<String>,
    body: Vec<u8>,
}

impl ProxiedResponse {
    async fn from_backend(response: reqwest::Response) -> Result<Self, AppError> {
        let status = response.status().as_u16();
        let headers = response.headers();
        let content_type = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()).map(str::to_string);
        let set_cookies = headers
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(str::to_string)
            .collect();

        let body = response
            .bytes()
            .await
            .map_err(|e| AppError::backend_payload("Failed to read backend response body", e))?
            .to_vec();

        Ok(Self {
            status,
            content_type,
            set_cookies,
            body,
        })
    }
}

impl<'r> Responder<'r, 'static> for ProxiedResponse {
    fn respond_to(self, _: &'r Request<'_>) -> rocket::response::Result<'static> {
        let mut builder = Response::build();
        builder.status(Status::new(self.status));
        if let Some(content_type) = self.content_type {
            builder.raw_header("Content-Type", content_type);
        }
        for cookie in self.set_cookies {
            builder.raw_header_adjoin("Set-Cookie", cookie);
        }
        builder.sized_body(self.body.len(), Cursor::new(self.body)).ok()
    }
}

/// Re-encodes the decoded route segments for the backend URL.
fn backend_path(path: &Path, origin: &Origin<'_>) -> String {
    let segments: Vec<String> = path
        .iter()
        .map(|segment| urlencoding::encode(&segment.to_string_lossy()).into_owned())
        .collect();

    match origin.query() {
        Some(query) => format!("/{}?{}", segments.join("/"), query.as_str()),
        None => format!("/{}", segments.join("/")),
    }
}

async fn read_body(data: Data<'_>, limits: &ProxyConfig) -> Result<Vec<u8>, AppError> {
    let limit = ByteUnit::Mebibyte(limits.max_body_mebibytes);
    let capped = data
        .open(limit)
        .into_bytes()
        .await
        .map_err(|e| AppError::BadRequest(format!("Failed to read request body: {e}")))?;

    if !capped.is_complete() {
        warn!(limit = %limit, "proxied request body exceeded limit");
        return Err(AppError::PayloadTooLarge);
    }

    Ok(capped.into_inner())
}

async fn relay(client: &RestClient, method: Method, path_and_query: String, headers: ForwardedHeaders, body: Vec<u8>) -> Result<ProxiedResponse, AppError> {
    let request = ForwardedRequest {
        path_and_query,
        cookie: headers.cookie,
        content_type: headers.content_type,
        accept: headers.accept,
        authorization: headers.authorization,
        body,
    };

    let response = client.forward(method, request).await?;
    ProxiedResponse::from_backend(response).await
}

#[get("/<path..>")]
pub async fn proxy_get(path: PathBuf, origin: &Origin<'_>, headers: ForwardedHeaders, client: &State<RestClient>) -> Result<ProxiedResponse, AppError> {
    relay(client, Method::GET, backend_path(&path, origin), headers, Vec::new()).await
}

#[delete("/<path..>")]
pub async fn proxy_delete(path: PathBuf, origin: &Origin<'_>, headers: ForwardedHeaders, client: &State<RestClient>) -> Result<ProxiedResponse, AppError> {
    relay(client, Method::DELETE, backend_path(&path, origin), headers, Vec::new()).await
}

#[post("/<path..>", data = "<data>")]
pub async fn proxy_post(
    path: PathBuf,
    origin: &Origin<'_>,
    headers: ForwardedHeaders,
    client: &State<RestClient>,
    limits: &State<ProxyConfig>,
    data: Data<'_>,
) -> Result<ProxiedResponse, AppError> {
    let body = read_body(data, limits).await?;
    relay(client, Method::POST, backend_path(&path, origin), headers, body).await
}

#[put("/<path..>", data = "<data>")]
pub async fn proxy_put(
    path: PathBuf,
    origin: &Origin<'_>,
    headers: ForwardedHeaders,
    client: &State<RestClient>,
    limits: &State<ProxyConfig>,
    data: Data<'_>,
) -> Result<ProxiedResponse, AppError> {
    let body = read_body(data, limits).await?;
    relay(client, Method::PUT, backend_path(&path, origin), headers, body).await
}

#[patch("/<path..>", data = "<data>")]
pub async fn proxy_patch(
    path: PathBuf,
    origin: &Origin<'_>,
    headers: ForwardedHeaders,
    client: &State<RestClient>,
    limits: &State<ProxyConfig>,
    data: Data<'_>,
) -> Result<ProxiedResponse, AppError> {
    let body = read_body(data, limits).await?;
    relay(client, Method::PATCH, backend_path(&path, origin), headers, body).await
}

pub fn routes() -> Vec<rocket::Route> {
    routes![proxy_get, proxy_delete, proxy_post, proxy_put, proxy_patch]
}
