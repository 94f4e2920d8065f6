use rocket::http::Status;
use rocket::response::Responder;
use rocket::{Request, Response};
use std::io::Cursor;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Backend unavailable")]
    BackendUnavailable {
        message: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Backend returned an unexpected payload")]
    BackendPayload {
        message: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Backend error ({status}): {message}")]
    BackendRejected { status: u16, message: String },
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Payload too large")]
    PayloadTooLarge,
    #[error("Invalid request: {0}")]
    ValidationError(#[from] ValidationErrors),
}

impl AppError {
    pub fn backend_unavailable(message: impl Into<String>, source: reqwest::Error) -> Self {
        Self::BackendUnavailable {
            message: message.into(),
            source,
        }
    }

    pub fn backend_payload(message: impl Into<String>, source: reqwest::Error) -> Self {
        Self::BackendPayload {
            message: message.into(),
            source,
        }
    }

    /// Maps a non-success backend status onto what the admin frontend reports.
    pub fn from_backend_status(status: u16, message: String) -> Self {
        match status {
            400 | 422 => AppError::BadRequest(message),
            401 | 403 => AppError::Unauthorized,
            404 => AppError::NotFound(message),
            _ => AppError::BackendRejected { status, message },
        }
    }
}

impl From<&AppError> for Status {
    fn from(e: &AppError) -> Self {
        match e {
            AppError::BackendUnavailable { .. } => Status::BadGateway,
            AppError::BackendPayload { .. } => Status::BadGateway,
            AppError::BackendRejected { .. } => Status::BadGateway,
            AppError::Unauthorized => Status::Unauthorized,
            AppError::InvalidCredentials(_) => Status::Unauthorized,
            AppError::BadRequest(_) => Status::BadRequest,
            AppError::NotFound(_) => Status::NotFound,
            AppError::PayloadTooLarge => Status::PayloadTooLarge,
            AppError::ValidationError(_) => Status::BadRequest,
        }
    }
}

impl<'r> Responder<'r, 'static> for AppError {
    fn respond_to(self, req: &Request<'_>) -> rocket::response::Result<'static> {
        let method = req.method();
        let uri = req.uri();

        let request_id = req
            .local_cache(|| None::<crate::middleware::RequestId>)
            .as_ref()
            .map(|r| r.0.as_str())
            .unwrap_or("unknown");

        let status = Status::from(&self);

        error!(
            error = ?self,
            request_id = %request_id,
            method = %method,
            uri = %uri,
            status = %status.code,
            "request failed"
        );

        let body = self.to_string();

        Response::build().status(status).sized_body(body.len(), Cursor::new(body)).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_statuses_map_to_frontend_errors() {
        assert!(matches!(AppError::from_backend_status(400, "bad".into()), AppError::BadRequest(m) if m == "bad"));
        assert!(matches!(AppError::from_backend_status(401, String::new()), AppError::Unauthorized));
        assert!(matches!(AppError::from_backend_status(403, String::new()), AppError::Unauthorized));
        assert!(matches!(AppError::from_backend_status(404, "gone".into()), AppError::NotFound(_)));
        assert!(matches!(
            AppError::from_backend_status(500, "boom".into()),
            AppError::BackendRejected { status: 500, .. }
        ));
    }

    #[test]
    fn statuses_for_responses() {
        assert_eq!(Status::from(&AppError::Unauthorized), Status::Unauthorized);
        assert_eq!(Status::from(&AppError::InvalidCredentials("nope".into())), Status::Unauthorized);
        assert_eq!(Status::from(&AppError::NotFound("x".into())), Status::NotFound);
        assert_eq!(
            Status::from(&AppError::BackendRejected {
                status: 503,
                message: "down".into()
            }),
            Status::BadGateway
        );
    }

    #[test]
    fn rejected_message_carries_backend_text() {
        let err = AppError::from_backend_status(502, "upstream".into());
        assert_eq!(err.to_string(), "Backend error (502): upstream");
    }
}
