use rocket::serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub enum MealType {
    Breakfast,
    MorningSnack,
    Lunch,
    AfternoonSnack,
    Dinner,
    EveningSnack,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MealLog {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    pub date: String,
    pub meal_type: MealType,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meal_types_follow_day_order() {
        let mut types: Vec<MealType> = serde_json::from_str(r#"["dinner","breakfast","afternoonSnack","eveningSnack","lunch","morningSnack"]"#).unwrap();
        types.sort();
        assert_eq!(
            types,
            vec![
                MealType::Breakfast,
                MealType::MorningSnack,
                MealType::Lunch,
                MealType::AfternoonSnack,
                MealType::Dinner,
                MealType::EveningSnack
            ]
        );
    }

    #[test]
    fn keeps_mongo_identifier() {
        let raw = r#"{"_id":"66ab","userId":"5","date":"2025-03-01","mealType":"lunch","createdAt":"2025-03-01T12:00:00Z","updatedAt":"2025-03-01T12:00:00Z"}"#;
        let log: MealLog = serde_json::from_str(raw).unwrap();
        assert_eq!(log.id, "66ab");
        assert_eq!(log.meal_type, MealType::Lunch);
        assert!(log.photo_url.is_none());
        assert_eq!(serde_json::to_value(&log).unwrap()["_id"], "66ab");
    }
}
