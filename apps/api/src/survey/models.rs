use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::survey::scoring::check_responses;

// ────────────────────────────────────────────────────────────────────────────
// Wire types
// ────────────────────────────────────────────────────────────────────────────

/// One answered question as it arrives on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub question_value: f64,
}

/// Request body for `POST /process-survey` and the shape of the fixture file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveySubmission {
    pub user_id: String,
    pub survey_results: Vec<QuestionResponse>,
}

/// Labels returned to the caller after a successful submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SurveyResponse {
    pub overall_analysis: OverallAnalysis,
    pub cat_dog: CatDog,
    pub fur_value: Length,
    pub tail_value: Length,
    pub description: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Labels
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OverallAnalysis {
    Certain,
    Unsure,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CatDog {
    Cats,
    Dogs,
}

/// Used for both fur and tail.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Length {
    Long,
    Short,
}

impl OverallAnalysis {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverallAnalysis::Certain => "certain",
            OverallAnalysis::Unsure => "unsure",
        }
    }
}

impl CatDog {
    pub fn as_str(&self) -> &'static str {
        match self {
            CatDog::Cats => "cats",
            CatDog::Dogs => "dogs",
        }
    }
}

impl Length {
    pub fn as_str(&self) -> &'static str {
        match self {
            Length::Long => "long",
            Length::Short => "short",
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Domain types
// ────────────────────────────────────────────────────────────────────────────

/// A validated submission: non-empty user id and at least ten finite responses.
/// Only constructible through [`SurveyInput::new`], so every value is scoreable.
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyInput {
    user_id: String,
    responses: Vec<f64>,
}

impl SurveyInput {
    pub fn new(user_id: impl Into<String>, responses: Vec<f64>) -> Result<Self, AppError> {
        let user_id = user_id.into();
        if user_id.trim().is_empty() {
            return Err(AppError::Validation("user_id cannot be empty".to_string()));
        }
        check_responses(&responses)?;
        Ok(Self { user_id, responses })
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn responses(&self) -> &[f64] {
        &self.responses
    }
}

impl TryFrom<SurveySubmission> for SurveyInput {
    type Error = AppError;

    fn try_from(submission: SurveySubmission) -> Result<Self, Self::Error> {
        let values = submission
            .survey_results
            .into_iter()
            .map(|r| r.question_value)
            .collect();
        SurveyInput::new(submission.user_id, values)
    }
}

/// The scorer's full output for one user. Persisted as-is, never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyResult {
    pub user_id: String,
    pub overall_analysis: OverallAnalysis,
    pub cat_dog: CatDog,
    pub fur_value: Length,
    pub tail_value: Length,
    pub description: String,
}

impl From<SurveyResult> for SurveyResponse {
    fn from(result: SurveyResult) -> Self {
        Self {
            overall_analysis: result.overall_analysis,
            cat_dog: result.cat_dog,
            fur_value: result.fur_value,
            tail_value: result.tail_value,
            description: result.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(user_id: &str, values: &[f64]) -> SurveySubmission {
        SurveySubmission {
            user_id: user_id.to_string(),
            survey_results: values
                .iter()
                .map(|&v| QuestionResponse { question_value: v })
                .collect(),
        }
    }

    #[test]
    fn test_input_rejects_empty_user_id() {
        let err = SurveyInput::new("  ", vec![1.0; 10]).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_input_rejects_nine_responses() {
        let err = SurveyInput::new("u1", vec![1.0; 9]).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("got 9")));
    }

    #[test]
    fn test_input_rejects_non_finite_value() {
        let mut values = vec![1.0; 10];
        values[4] = f64::NAN;
        let err = SurveyInput::new("u1", values).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("[4]")));
    }

    #[test]
    fn test_input_errors_match_scorer_messages() {
        use crate::survey::scoring::ScoringError;

        let err = SurveyInput::new("u1", vec![]).unwrap_err();
        assert_eq!(
            err.to_string(),
            AppError::from(ScoringError::TooFewResponses { got: 0 }).to_string()
        );
    }

    #[test]
    fn test_submission_converts_in_order() {
        let input = SurveyInput::try_from(submission("u1", &[3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0, 5.0, 3.0]))
            .unwrap();
        assert_eq!(input.user_id(), "u1");
        assert_eq!(input.responses()[2], 4.0);
        assert_eq!(input.responses().len(), 10);
    }

    #[test]
    fn test_submission_deserializes_integers() {
        let raw = r#"{"user_id":"u2","survey_results":[{"question_value":7},{"question_value":2.5}]}"#;
        let parsed: SurveySubmission = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.survey_results[0].question_value, 7.0);
        assert_eq!(parsed.survey_results[1].question_value, 2.5);
    }

    #[test]
    fn test_labels_serialize_lowercase() {
        let resp = SurveyResponse {
            overall_analysis: OverallAnalysis::Unsure,
            cat_dog: CatDog::Cats,
            fur_value: Length::Long,
            tail_value: Length::Short,
            description: "d".to_string(),
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["overall_analysis"], "unsure");
        assert_eq!(json["cat_dog"], "cats");
        assert_eq!(json["fur_value"], "long");
        assert_eq!(json["tail_value"], "short");
    }
}
