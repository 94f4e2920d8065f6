use crate::models::patient::{RegistrationSection, RegistrationStep};

/// Registration steps whose name contains one of these keys are shown
/// together under the key.
const GROUPED_STEPS: [&str; 2] = ["diet", "routine"];

fn group_key(step_name: &str) -> Option<&'static str> {
    GROUPED_STEPS.into_iter().find(|key| step_name.contains(key))
}

/// Folds the answered steps into the sections of the patient page, keeping
/// the order in which each section first appears.
pub fn group_registration_steps(steps: &[RegistrationStep]) -> Vec<RegistrationSection> {
    let mut sections: Vec<RegistrationSection> = Vec::new();

    for step in steps {
        match group_key(&step.step_name) {
            Some(key) => {
                if let Some(section) = sections.iter_mut().find(|s| s.grouped && s.step_name == key) {
                    section.steps.push(step.clone());
                } else {
                    sections.push(RegistrationSection {
                        step_name: key.to_string(),
                        grouped: true,
                        steps: vec![step.clone()],
                    });
                }
            }
            None => sections.push(RegistrationSection {
                step_name: step.step_name.clone(),
                grouped: false,
                steps: vec![step.clone()],
            }),
        }
    }

    sections
}
