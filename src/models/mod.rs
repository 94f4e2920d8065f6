pub mod custom_instruction;
pub mod dashboard;
pub mod health;
pub mod ingredient;
pub mod invite;
pub mod meal_log;
pub mod nutrition_plan;
pub mod patient;
pub mod plate;
pub mod user;
pub mod user_plan;
