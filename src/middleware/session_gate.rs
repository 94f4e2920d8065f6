use crate::gate::{Disposition, SessionGate};
use chrono::Utc;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Method, Status};
use rocket::request::{FromRequest, Outcome, Request};
use rocket::{Data, uri};
use tracing::{debug, error};

/// Where intercepted requests are re-routed so that no page handler runs.
pub const RESOLVER_PATH: &str = "/_session-gate";

#[derive(Debug, Clone, Default)]
struct GateVerdict(Option<Disposition>);

/// Runs the session gate on every in-scope request before routing.
///
/// `Allow` leaves the request alone. Any other disposition is stored on the
/// request and the request is rewritten to `GET RESOLVER_PATH`, where
/// [`PendingRedirect`] picks it up.
pub struct SessionGateFairing;

#[rocket::async_trait]
impl Fairing for SessionGateFairing {
    fn info(&self) -> Info {
        Info {
            name: "Session Gate",
            kind: Kind::Request,
        }
    }

    async fn on_request(&self, request: &mut Request<'_>, _: &mut Data<'_>) {
        let disposition = {
            let Some(gate) = request.rocket().state::<SessionGate>() else {
                error!("session gate is not managed; request left ungated");
                return;
            };

            let path = request.uri().path().as_str();
            if !gate.applies_to(path) {
                return;
            }

            let token = request.cookies().get(gate.cookie_name()).map(|cookie| cookie.value());
            let disposition = gate.evaluate(path, token, Utc::now());
            debug!(path = %path, disposition = ?disposition, "session gate decision");
            disposition
        };

        if disposition == Disposition::Allow {
            return;
        }

        request.local_cache(|| GateVerdict(Some(disposition)));
        request.set_method(Method::Get);
        request.set_uri(uri!("/_session-gate"));
    }
}

/// A redirect the gate decided on for the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRedirect {
    pub target: String,
    pub clear_session: bool,
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for PendingRedirect {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        match &request.local_cache(GateVerdict::default).0 {
            Some(Disposition::RedirectTo(target)) => Outcome::Success(PendingRedirect {
                target: target.clone(),
                clear_session: false,
            }),
            Some(Disposition::ClearSessionAndRedirect(target)) => Outcome::Success(PendingRedirect {
                target: target.clone(),
                clear_session: true,
            }),
            Some(Disposition::Allow) | None => Outcome::Forward(Status::NotFound),
        }
    }
}
