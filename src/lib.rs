mod auth;
mod backend;
mod config;
mod error;
mod gate;
mod middleware;
mod models;
mod routes;
mod service;
mod stage;

#[cfg(test)]
pub mod test_utils;

pub use config::Config;

use crate::middleware::RequestLogger;
use crate::middleware::session_gate::{RESOLVER_PATH, SessionGateFairing};
use crate::routes as app_routes;
use crate::stage::{stage_backend, stage_session_gate};
use rocket::fs::{FileServer, Options};
use rocket::{Build, Rocket, catchers};
use tracing_subscriber::EnvFilter;

fn init_tracing(log_level: &str, json_format: bool) {
    // RUST_LOG takes precedence over the configured level, e.g.
    //   RUST_LOG=info,nutri_admin::middleware=debug
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::fmt().with_env_filter(filter).with_target(true).with_line_number(true);

    // A subscriber may already be installed (tests build many rockets).
    let _ = if json_format { subscriber.json().try_init() } else { subscriber.try_init() };
}

struct RouteSpec {
    path: &'static str,
    routes: Vec<rocket::Route>,
}

fn collect_route_specs() -> Vec<RouteSpec> {
    vec![
        RouteSpec {
            path: RESOLVER_PATH,
            routes: app_routes::session::resolver_routes(),
        },
        RouteSpec {
            path: "/login",
            routes: app_routes::session::login_routes(),
        },
        RouteSpec {
            path: "/dashboard",
            routes: app_routes::dashboard::routes(),
        },
        RouteSpec {
            path: "/patients",
            routes: app_routes::patient::routes(),
        },
        RouteSpec {
            path: "/invites",
            routes: app_routes::invite::routes(),
        },
        RouteSpec {
            path: "/ingredients",
            routes: app_routes::ingredient::routes(),
        },
        RouteSpec {
            path: "/plans",
            routes: app_routes::plan::routes(),
        },
        RouteSpec {
            path: "/health",
            routes: app_routes::health::routes(),
        },
        RouteSpec {
            path: "/api",
            routes: app_routes::proxy::routes(),
        },
        RouteSpec {
            path: "/",
            routes: app_routes::assets::routes(),
        },
    ]
}

pub fn build_rocket(config: Config) -> Rocket<Build> {
    init_tracing(&config.logging.level, config.logging.json_format);

    let figment = rocket::Config::figment()
        .merge(("port", config.server.port))
        .merge(("address", config.server.address.clone()));

    let mut rocket = rocket::custom(figment)
        .attach(RequestLogger)
        .attach(stage_session_gate(config.session.clone(), config.gate.clone()))
        .attach(SessionGateFairing)
        .attach(stage_backend(config.backend.clone(), config.session.cookie_name.clone()))
        .manage(config.session.clone())
        .manage(config.server.clone())
        .manage(config.proxy.clone());

    for spec in collect_route_specs() {
        rocket = rocket.mount(spec.path, spec.routes);
    }

    rocket
        .mount("/assets", FileServer::new(&config.server.assets_dir, Options::Missing))
        .register(
            "/",
            catchers![
                app_routes::error::unauthorized,
                app_routes::error::not_found,
                app_routes::error::payload_too_large,
                app_routes::error::unprocessable_entity
            ],
        )
}
