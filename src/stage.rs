use crate::backend::rest_client::RestClient;
use crate::config::{BackendConfig, GateConfig, SessionConfig};
use crate::gate::SessionGate;
use rocket::fairing::AdHoc;

pub fn stage_backend(backend_config: BackendConfig, cookie_name: String) -> AdHoc {
    AdHoc::try_on_ignite("Backend client (reqwest)", |rocket| async move {
        match RestClient::new(&backend_config, &cookie_name) {
            Ok(client) => {
                tracing::info!(base_url = %backend_config.base_url, "Backend client initialized successfully");
                Ok(rocket.manage(client))
            }
            Err(e) => {
                tracing::error!("Failed to initialize backend client: {}", e);
                Err(rocket)
            }
        }
    })
}

pub fn stage_session_gate(session_config: SessionConfig, gate_config: GateConfig) -> AdHoc {
    AdHoc::try_on_ignite("Session gate", |rocket| async move {
        match SessionGate::new(&session_config, &gate_config) {
            Ok(gate) => Ok(rocket.manage(gate)),
            Err(e) => {
                tracing::error!("Invalid gate exclusions {:?}: {}", gate_config.excluded_prefixes, e);
                Err(rocket)
            }
        }
    })
}
