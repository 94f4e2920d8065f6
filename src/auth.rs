use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use rocket::http::Status;
use rocket::outcome::Outcome;
use rocket::request::{FromRequest, Outcome as RequestOutcome, Request};
use serde::Deserialize;
use thiserror::Error;

use crate::config::SessionConfig;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token is not a three-part compact JWT")]
    Malformed,
    #[error("token payload is not valid base64url")]
    Encoding,
    #[error("token payload is not a JSON claims object")]
    Claims,
}

/// The claims the frontend cares about. Everything else in the payload is ignored.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SessionClaims {
    /// Expiry as a JWT NumericDate (seconds since the epoch, possibly fractional).
    pub exp: Option<f64>,
}

impl SessionClaims {
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        let millis = self.exp.filter(|exp| exp.is_finite())? * 1000.0;
        // Expiries past what chrono can represent are as good as never.
        if millis >= DateTime::<Utc>::MAX_UTC.timestamp_millis() as f64 {
            return Some(DateTime::<Utc>::MAX_UTC);
        }
        DateTime::from_timestamp_millis(millis as i64)
    }

    /// A session is live only when the expiry is known and strictly after `now`.
    pub fn is_live_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at().is_some_and(|expires_at| expires_at > now)
    }
}

/// Decodes the payload segment of a compact JWT without checking the signature.
///
/// The backend verifies the signature on every API call; here the claims only
/// drive navigation, so reading them is enough.
pub fn decode_session_claims(token: &str) -> Result<SessionClaims, TokenError> {
    let mut parts = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (parts.next(), parts.next(), parts.next(), parts.next()) else {
        return Err(TokenError::Malformed);
    };
    if payload.is_empty() {
        return Err(TokenError::Malformed);
    }

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|_| TokenError::Encoding)?;

    serde_json::from_slice(&bytes).map_err(|_| TokenError::Claims)
}

/// Raw session token taken from the session cookie, forwarded to the backend as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken(pub String);

impl SessionToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for SessionToken {
    type Error = ();

    async fn from_request(req: &'r Request<'_>) -> RequestOutcome<Self, Self::Error> {
        let Some(session) = req.rocket().state::<SessionConfig>() else {
            return Outcome::Error((Status::InternalServerError, ()));
        };

        match req.cookies().get(&session.cookie_name).map(|cookie| cookie.value()) {
            Some(value) if !value.is_empty() => Outcome::Success(SessionToken(value.to_string())),
            _ => Outcome::Error((Status::Unauthorized, ())),
        }
    }
}
