use rocket::figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "NutriAdmin.toml";
pub const ENV_PREFIX: &str = "NUTRI_ADMIN_";

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub session: SessionConfig,
    pub gate: GateConfig,
    pub backend: BackendConfig,
    pub proxy: ProxyConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub address: String,
    /// Directory holding the built static assets and the favicon.
    pub assets_dir: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub json_format: bool,
}

/// Cookie and paths the session gate works with.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SessionConfig {
    pub cookie_name: String,
    pub login_path: String,
    pub logout_path: String,
    pub dashboard_path: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GateConfig {
    /// Leading path fragments that bypass the gate, matched right after the first `/`.
    pub excluded_prefixes: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BackendConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProxyConfig {
    pub max_body_mebibytes: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            address: "127.0.0.1".to_string(),
            assets_dir: "public".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: "jwt".to_string(),
            login_path: "/login".to_string(),
            logout_path: "/logout".to_string(),
            dashboard_path: "/dashboard".to_string(),
        }
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            excluded_prefixes: ["api", "assets", "favicon.ico", "health"].iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_seconds: 30,
        }
    }
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self { max_body_mebibytes: 20 }
    }
}

impl Config {
    /// Load configuration from multiple sources in priority order:
    /// 1. Built-in defaults
    /// 2. NutriAdmin.toml (if present)
    /// 3. Environment variables (prefixed with NUTRI_ADMIN_, sections separated by `__`,
    ///    e.g. NUTRI_ADMIN_BACKEND__BASE_URL)
    /// 4. API_URL environment variable for the backend base URL
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    pub(crate) fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(CONFIG_FILE).nested())
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .merge(Env::raw().only(&["API_URL"]).map(|_| "backend.base_url".into()))
    }
}
