pub mod custom_instruction;
pub mod ingredient;
pub mod invite;
pub mod meal_log;
pub mod nutrition_plan;
pub mod patient;
pub mod plate;
pub mod rest_client;
pub mod user_plan;
