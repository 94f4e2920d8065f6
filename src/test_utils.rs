use crate::auth::SessionToken;
use crate::backend::custom_instruction::CustomInstructionApi;
use crate::backend::ingredient::IngredientApi;
use crate::backend::invite::InviteApi;
use crate::backend::meal_log::MealLogApi;
use crate::backend::nutrition_plan::NutritionPlanApi;
use crate::backend::patient::PatientApi;
use crate::backend::plate::PlateApi;
use crate::backend::user_plan::UserPlanApi;
use crate::build_rocket;
use crate::config::Config;
use crate::error::app_error::AppError;
use crate::models::custom_instruction::CustomInstructions;
use crate::models::ingredient::{Dietary, Ingredient, IngredientType};
use crate::models::invite::{Invite, InviteStatus};
use crate::models::meal_log::{MealLog, MealType};
use crate::models::nutrition_plan::NutritionPlanDoc;
use crate::models::patient::{Patient, Registration, RegistrationStep};
use crate::models::plate::{PlateEvaluation, PlateIngredient, RecipeRecommendation};
use crate::models::user_plan::UserPlan;
use rocket::local::asynchronous::Client;
use serde_json::{Map, Value};
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};

/// Configuration pointing the backend client at a port nothing listens on.
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.backend.base_url = "http://127.0.0.1:9".to_string();
    config.backend.timeout_seconds = 1;
    config.server.assets_dir = "tests/fixtures/public".to_string();
    config
}

pub async fn client_with(config: Config) -> Client {
    Client::tracked(build_rocket(config)).await.expect("valid rocket instance")
}

pub async fn client() -> Client {
    client_with(test_config()).await
}

/// Serves one canned HTTP response on a local port and returns its base URL.
pub fn backend_answering(status_line: &'static str, extra_headers: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub backend");
    let addr = listener.local_addr().expect("stub backend address");

    std::thread::spawn(move || {
        let Ok((mut stream, _)) = listener.accept() else {
            return;
        };
        read_request(&mut stream);
        let _ = write!(stream, "HTTP/1.1 {status_line}\r\n{extra_headers}Content-Length: 0\r\nConnection: close\r\n\r\n");
    });

    format!("http://{addr}")
}

// Drains headers and body so the client never sees a reset.
fn read_request(stream: &mut TcpStream) {
    let mut received = Vec::new();
    let mut buf = [0u8; 4096];
    loop {
        let Ok(n) = stream.read(&mut buf) else { return };
        if n == 0 {
            return;
        }
        received.extend_from_slice(&buf[..n]);

        let text = String::from_utf8_lossy(&received);
        if let Some(end) = text.find("\r\n\r\n") {
            let content_length = text[..end]
                .lines()
                .filter_map(|line| line.split_once(':'))
                .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
                .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if received.len() >= end + 4 + content_length {
                return;
            }
        }
    }
}

/// Log sink for asserting on what a request wrote through `tracing`.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().expect("log buffer")).into_owned()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().expect("log buffer").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

pub fn token() -> SessionToken {
    SessionToken("header.payload.signature".to_string())
}

fn step(name: &str, key: &str, value: &str) -> RegistrationStep {
    let mut answers = Map::new();
    answers.insert(key.to_string(), Value::String(value.to_string()));
    RegistrationStep {
        step_name: name.to_string(),
        answers,
    }
}

pub fn patient(id: u64) -> Patient {
    Patient {
        id,
        first_name: "Ana".to_string(),
        last_name: "Paz".to_string(),
        email: format!("patient{id}@example.com"),
        is_active: true,
        is_registration_finished: true,
        registration: Registration {
            finished: true,
            information: vec![
                step("personalData", "height", "170"),
                step("diet-liquids", "water", "2l"),
                step("routine-morning", "wakeUp", "07:00"),
                step("diet-sweets", "chocolate", "weekly"),
            ],
            last_step: Some("diet-sweets".to_string()),
        },
    }
}

fn plate(id: u64, hidden: bool) -> PlateEvaluation {
    PlateEvaluation {
        id,
        ingredients: vec![PlateIngredient {
            name: "arroz".to_string(),
            kind: "cereal".to_string(),
            subtype: None,
        }],
        score: 6.0,
        positives: vec![],
        issues: vec![],
        suggestions: String::new(),
        is_visible_to_user: true,
        is_hidden_from_nutritionist: hidden,
        user_notes: None,
        nutritionist_notes: None,
        points_earned: 5,
        created_at: "2025-02-01T10:00:00Z".to_string(),
    }
}

fn recipe_recommendation(id: u64, hidden: bool) -> RecipeRecommendation {
    RecipeRecommendation {
        id,
        plate_evaluation_id: Some(id),
        ingredients: vec!["arroz".to_string()],
        evaluation_score: Some(6.0),
        evaluation_issues: vec![],
        recipes: vec![],
        points_spent: 3,
        is_hidden_from_nutritionist: hidden,
        created_at: "2025-02-01T11:00:00Z".to_string(),
    }
}

fn instruction(id: u64, priority: i32) -> CustomInstructions {
    CustomInstructions {
        id,
        instructions: format!("instruction {id}"),
        title: None,
        description: None,
        is_active: true,
        priority,
        created_at: "2025-01-01T00:00:00Z".to_string(),
        updated_at: "2025-01-01T00:00:00Z".to_string(),
    }
}

fn user_plan(id: &str, upload_date: &str, is_active: bool) -> UserPlan {
    UserPlan {
        id: id.to_string(),
        user_id: 1,
        title: format!("Plan {id}"),
        description: None,
        file_name: format!("{id}.pdf"),
        file_url: None,
        nutritionist: None,
        is_active,
        upload_date: upload_date.to_string(),
        created_at: upload_date.to_string(),
        updated_at: upload_date.to_string(),
    }
}

/// Canned backend. `count_error` makes the patient count fail with that HTTP status.
#[derive(Debug, Default, Clone)]
pub struct MockBackend {
    pub count_error: Option<u16>,
}

impl MockBackend {
    pub const MISSING_PATIENT: u64 = 404;
}

#[async_trait::async_trait]
impl PatientApi for MockBackend {
    async fn get_patient(&self, _token: &SessionToken, id: u64) -> Result<Patient, AppError> {
        if id == Self::MISSING_PATIENT {
            return Err(AppError::NotFound(format!("Patient {id} not found")));
        }
        Ok(patient(id))
    }

    async fn count_patients(&self, _token: &SessionToken) -> Result<u64, AppError> {
        match self.count_error {
            Some(status) => Err(AppError::from_backend_status(status, "count failed".to_string())),
            None => Ok(12),
        }
    }
}

#[async_trait::async_trait]
impl MealLogApi for MockBackend {
    async fn list_meal_logs(&self, _token: &SessionToken, patient_id: u64) -> Result<Vec<MealLog>, AppError> {
        Ok(vec![MealLog {
            id: "66ab".to_string(),
            user_id: patient_id.to_string(),
            date: "2025-03-01".to_string(),
            meal_type: MealType::Lunch,
            description: Some("ensalada".to_string()),
            photo_url: None,
            created_at: "2025-03-01T12:00:00Z".to_string(),
            updated_at: "2025-03-01T12:00:00Z".to_string(),
        }])
    }
}

#[async_trait::async_trait]
impl NutritionPlanApi for MockBackend {
    async fn list_nutrition_plans(&self, _token: &SessionToken, patient_id: u64) -> Result<Vec<NutritionPlanDoc>, AppError> {
        Ok(vec![NutritionPlanDoc {
            id: format!("doc-{patient_id}"),
            file_name: "plan.pdf".to_string(),
            url: "https://files.example.com/plan.pdf".to_string(),
            created_at: "2025-01-01T00:00:00Z".to_string(),
            updated_at: "2025-01-01T00:00:00Z".to_string(),
        }])
    }
}

#[async_trait::async_trait]
impl CustomInstructionApi for MockBackend {
    async fn list_custom_instructions(&self, _token: &SessionToken) -> Result<Vec<CustomInstructions>, AppError> {
        Ok(vec![instruction(1, 2), instruction(2, 1), instruction(3, 3)])
    }
}

#[async_trait::async_trait]
impl UserPlanApi for MockBackend {
    async fn list_user_plans(&self, _token: &SessionToken) -> Result<Vec<UserPlan>, AppError> {
        Ok(vec![user_plan("plan-1", "2025-01-15", false), user_plan("plan-2", "2025-03-01", true)])
    }

    async fn get_active_plan(&self, _token: &SessionToken) -> Result<Option<UserPlan>, AppError> {
        Ok(Some(user_plan("plan-2", "2025-03-01", true)))
    }
}

#[async_trait::async_trait]
impl PlateApi for MockBackend {
    async fn list_plate_evaluations(&self, _token: &SessionToken, _patient_id: u64, include_hidden: bool) -> Result<Vec<PlateEvaluation>, AppError> {
        let mut plates = vec![plate(1, false)];
        if include_hidden {
            plates.push(plate(2, true));
        }
        Ok(plates)
    }

    async fn list_recipe_recommendations(
        &self,
        _token: &SessionToken,
        _patient_id: u64,
        include_hidden: bool,
    ) -> Result<Vec<RecipeRecommendation>, AppError> {
        let mut recommendations = vec![recipe_recommendation(1, false)];
        if include_hidden {
            recommendations.push(recipe_recommendation(2, true));
        }
        Ok(recommendations)
    }
}

fn invite(id: u64, status: InviteStatus) -> Invite {
    Invite {
        id,
        first_name: "Luz".to_string(),
        last_name: format!("Rey {id}"),
        email: format!("invite{id}@example.com"),
        code: format!("CODE{id}"),
        status,
    }
}

#[async_trait::async_trait]
impl InviteApi for MockBackend {
    async fn list_invites(&self, _token: &SessionToken) -> Result<Vec<Invite>, AppError> {
        Ok(vec![
            invite(1, InviteStatus::Accepted),
            invite(2, InviteStatus::Pending),
            invite(3, InviteStatus::Revoked),
            invite(4, InviteStatus::Accepted),
        ])
    }
}

fn ingredient(id: u64, name: &str) -> Ingredient {
    Ingredient {
        id,
        name: name.to_string(),
        kind: IngredientType {
            id: 1,
            name: "vegetal".to_string(),
            color: None,
        },
        image_url: None,
        nutrients: None,
        dietary: Dietary::default(),
        metadata: None,
        source: None,
    }
}

#[async_trait::async_trait]
impl IngredientApi for MockBackend {
    async fn list_ingredients(&self, _token: &SessionToken) -> Result<Vec<Ingredient>, AppError> {
        Ok(vec![ingredient(1, "banana"), ingredient(2, "Arroz"), ingredient(3, "apio")])
    }
}
