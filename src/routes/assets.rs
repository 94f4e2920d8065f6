use crate::config::ServerConfig;
use rocket::fs::NamedFile;
use rocket::{State, get, routes};
use std::path::Path;

#[get("/favicon.ico")]
pub async fn favicon(server: &State<ServerConfig>) -> Option<NamedFile> {
    NamedFile::open(Path::new(&server.assets_dir).join("favicon.ico")).await.ok()
}

pub fn routes() -> Vec<rocket::Route> {
    routes![favicon]
}
