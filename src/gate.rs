//! Per-request session gate: decides whether a navigation goes through,
//! is sent to the login view, or ends the session.

use chrono::{DateTime, Utc};
use regex::Regex;
use tracing::debug;

use crate::auth::decode_session_claims;
use crate::config::{GateConfig, SessionConfig};

/// What the gate wants done with a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposition {
    Allow,
    RedirectTo(String),
    ClearSessionAndRedirect(String),
}

#[derive(Debug, Clone)]
pub struct SessionGate {
    cookie_name: String,
    login_path: String,
    logout_path: String,
    dashboard_path: String,
    excluded: Option<Regex>,
}

impl SessionGate {
    pub fn new(session: &SessionConfig, gate: &GateConfig) -> Result<Self, regex::Error> {
        Ok(Self {
            cookie_name: session.cookie_name.clone(),
            login_path: session.login_path.clone(),
            logout_path: session.logout_path.clone(),
            dashboard_path: session.dashboard_path.clone(),
            excluded: exclusion_pattern(&gate.excluded_prefixes)?,
        })
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    /// Whether the gate runs for `path` at all. API proxy routes, static assets
    /// and the favicon never get a decision.
    pub fn applies_to(&self, path: &str) -> bool {
        self.excluded.as_ref().is_none_or(|excluded| !excluded.is_match(path))
    }

    /// Decides the fate of a request from its path, its session token and the
    /// request time. Pure: the caller supplies everything it looks at.
    pub fn evaluate(&self, path: &str, token: Option<&str>, now: DateTime<Utc>) -> Disposition {
        if path.starts_with(&self.logout_path) {
            return Disposition::ClearSessionAndRedirect(self.login_path.clone());
        }

        let on_login = path.starts_with(&self.login_path);

        let Some(token) = token.filter(|token| !token.is_empty()) else {
            return self.send_to_login(on_login);
        };

        match decode_session_claims(token) {
            Ok(claims) if claims.is_live_at(now) => {}
            Ok(claims) => {
                debug!(expires_at = ?claims.expires_at(), "session token expired or without expiry");
                return self.send_to_login(on_login);
            }
            Err(err) => {
                debug!(error = %err, "session token could not be decoded");
                return self.send_to_login(on_login);
            }
        }

        if on_login {
            Disposition::RedirectTo(self.dashboard_path.clone())
        } else {
            Disposition::Allow
        }
    }

    // Already on the login view: redirecting there again would loop.
    fn send_to_login(&self, on_login: bool) -> Disposition {
        if on_login {
            Disposition::Allow
        } else {
            Disposition::RedirectTo(self.login_path.clone())
        }
    }
}

fn exclusion_pattern(prefixes: &[String]) -> Result<Option<Regex>, regex::Error> {
    let alternatives: Vec<String> = prefixes
        .iter()
        .map(|prefix| prefix.trim_matches('/'))
        .filter(|prefix| !prefix.is_empty())
        .map(regex::escape)
        .collect();

    if alternatives.is_empty() {
        return Ok(None);
    }

    Regex::new(&format!("^/(?:{})", alternatives.join("|"))).map(Some)
}
