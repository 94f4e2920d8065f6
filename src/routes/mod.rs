pub mod assets;
pub mod dashboard;
pub mod error;
pub mod health;
pub mod ingredient;
pub mod invite;
pub mod patient;
pub mod plan;
pub mod proxy;
pub mod session;
