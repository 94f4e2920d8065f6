use rocket::serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_active: bool,
    pub is_registration_finished: bool,
    #[serde(default)]
    pub registration: Registration,
}

impl Patient {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    #[serde(default)]
    pub finished: bool,
    #[serde(default)]
    pub information: Vec<RegistrationStep>,
    #[serde(default)]
    pub last_step: Option<String>,
}

/// One answered registration step. The answers are an open set of keys
/// that depends on the step.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationStep {
    pub step_name: String,
    #[serde(flatten)]
    pub answers: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatientCount {
    pub count: u64,
}

/// A registration step as shown on the patient page. Diet and routine
/// answers come in several steps and are shown together.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationSection {
    pub step_name: String,
    pub grouped: bool,
    pub steps: Vec<RegistrationStep>,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PatientOverview {
    pub patient: Patient,
    pub full_name: String,
    pub sections: Vec<RegistrationSection>,
}

/// A patient together with one of the lists shown on the patient's sub-pages.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PatientScoped<T> {
    pub patient: Patient,
    pub items: Vec<T>,
}
