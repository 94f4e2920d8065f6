pub mod dashboard;
pub mod ingredient;
pub mod invite;
pub mod patient;
pub mod plate;
pub mod registration;
pub mod user_plan;
