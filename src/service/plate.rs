use crate::auth::SessionToken;
use crate::backend::patient::PatientApi;
use crate::backend::plate::PlateApi;
use crate::error::app_error::AppError;
use crate::models::plate::SavedPlates;

/// Patient, plate evaluations and recipe recommendations fetched together.
pub async fn saved_plates<A>(api: &A, token: &SessionToken, patient_id: u64, include_hidden: bool) -> Result<SavedPlates, AppError>
where
    A: PatientApi + PlateApi + Sync,
{
    let (patient, plate_evaluations, recipe_recommendations) = tokio::try_join!(
        api.get_patient(token, patient_id),
        api.list_plate_evaluations(token, patient_id, include_hidden),
        api.list_recipe_recommendations(token, patient_id, include_hidden),
    )?;

    Ok(SavedPlates {
        patient,
        include_hidden,
        plate_evaluations,
        recipe_recommendations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{MockBackend, token};

    #[tokio::test]
    async fn hidden_entries_are_left_out_by_default() {
        let api = MockBackend::default();
        let view = saved_plates(&api, &token(), 5, false).await.unwrap();
        assert!(!view.include_hidden);
        assert!(view.plate_evaluations.iter().all(|p| !p.is_hidden_from_nutritionist));
        assert!(view.recipe_recommendations.iter().all(|r| !r.is_hidden_from_nutritionist));
    }

    #[tokio::test]
    async fn hidden_entries_are_included_on_request() {
        let api = MockBackend::default();
        let view = saved_plates(&api, &token(), 5, true).await.unwrap();
        assert!(view.plate_evaluations.iter().any(|p| p.is_hidden_from_nutritionist));
        assert!(view.recipe_recommendations.iter().any(|r| r.is_hidden_from_nutritionist));
    }
}
