use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::survey::models::SurveyResult;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct SurveyResultRow {
    pub user_id: String,
    pub overall_analysis: String,
    pub cat_dog: String,
    pub fur_value: String,
    pub tail_value: String,
    pub description: String,
}

impl From<&SurveyResult> for SurveyResultRow {
    fn from(result: &SurveyResult) -> Self {
        Self {
            user_id: result.user_id.clone(),
            overall_analysis: result.overall_analysis.as_str().to_string(),
            cat_dog: result.cat_dog.as_str().to_string(),
            fur_value: result.fur_value.as_str().to_string(),
            tail_value: result.tail_value.as_str().to_string(),
            description: result.description.clone(),
        }
    }
}
