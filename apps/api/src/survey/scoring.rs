//! Survey scoring — fixed threshold rules over the ordered response values.
//!
//! Index rules (0-based):
//! - overall_analysis: `unsure` iff `r[0] == 7 && r[3] < 3`
//! - cat_dog:          `cats`   iff `r[9] > 5 && r[8] <= 5`
//! - fur_value:        `long`   iff mean of *all* values `> 5`
//! - tail_value:       `long`   iff `r[6] > 4`
//!
//! Pure and deterministic: nothing here touches the store.

use thiserror::Error;

use crate::survey::models::{CatDog, Length, OverallAnalysis, SurveyInput, SurveyResult};

/// Highest index read by the rules is 9.
pub const MIN_RESPONSES: usize = 10;

#[derive(Debug, Error, PartialEq)]
pub enum ScoringError {
    #[error("Not enough survey results: expected at least {MIN_RESPONSES}, got {got}")]
    TooFewResponses { got: usize },

    #[error("survey_results[{index}] is not a finite number")]
    NonFinite { index: usize },
}

/// The four categorical labels plus the mean they were derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scores {
    pub overall_analysis: OverallAnalysis,
    pub cat_dog: CatDog,
    pub fur_value: Length,
    pub tail_value: Length,
    pub average: f64,
}

/// Checks that every index the rules read exists and every value is finite.
/// An empty slice fails the length check, so the mean never divides by zero.
pub fn check_responses(responses: &[f64]) -> Result<(), ScoringError> {
    if responses.len() < MIN_RESPONSES {
        return Err(ScoringError::TooFewResponses {
            got: responses.len(),
        });
    }
    if let Some(index) = responses.iter().position(|v| !v.is_finite()) {
        return Err(ScoringError::NonFinite { index });
    }
    Ok(())
}

pub fn score(responses: &[f64]) -> Result<Scores, ScoringError> {
    check_responses(responses)?;

    let average = responses.iter().sum::<f64>() / responses.len() as f64;

    let overall_analysis = if responses[0] == 7.0 && responses[3] < 3.0 {
        OverallAnalysis::Unsure
    } else {
        OverallAnalysis::Certain
    };
    let cat_dog = if responses[9] > 5.0 && responses[8] <= 5.0 {
        CatDog::Cats
    } else {
        CatDog::Dogs
    };
    let fur_value = if average > 5.0 {
        Length::Long
    } else {
        Length::Short
    };
    let tail_value = if responses[6] > 4.0 {
        Length::Long
    } else {
        Length::Short
    };

    Ok(Scores {
        overall_analysis,
        cat_dog,
        fur_value,
        tail_value,
        average,
    })
}

/// Scores a validated submission and attaches the user-facing description.
pub fn analyze(input: &SurveyInput) -> Result<SurveyResult, ScoringError> {
    build_result(input, "Analysis")
}

/// Same rules as [`analyze`], labelled as a fixture dry run. Never persisted.
pub fn analyze_dry_run(input: &SurveyInput) -> Result<SurveyResult, ScoringError> {
    build_result(input, "Test analysis")
}

fn build_result(input: &SurveyInput, prefix: &str) -> Result<SurveyResult, ScoringError> {
    let scores = score(input.responses())?;
    let description = format!(
        "{prefix} for user {}: Preference for {} fur and {} tail.",
        input.user_id(),
        scores.fur_value,
        scores.tail_value
    );
    Ok(SurveyResult {
        user_id: input.user_id().to_string(),
        overall_analysis: scores.overall_analysis,
        cat_dog: scores.cat_dog,
        fur_value: scores.fur_value,
        tail_value: scores.tail_value,
        description,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Ten neutral values: certain, dogs, short fur, short tail.
    fn baseline() -> Vec<f64> {
        vec![1.0; 10]
    }

    #[test]
    fn test_unsure_when_first_is_seven_and_fourth_below_three() {
        let mut r = baseline();
        r[0] = 7.0;
        r[3] = 2.0;
        assert_eq!(score(&r).unwrap().overall_analysis, OverallAnalysis::Unsure);
    }

    #[test]
    fn test_certain_when_first_is_not_seven() {
        let mut r = baseline();
        r[3] = 2.0;
        assert_eq!(score(&r).unwrap().overall_analysis, OverallAnalysis::Certain);
    }

    #[test]
    fn test_certain_when_fourth_is_three() {
        let mut r = baseline();
        r[0] = 7.0;
        r[3] = 3.0;
        assert_eq!(score(&r).unwrap().overall_analysis, OverallAnalysis::Certain);
    }

    #[test]
    fn test_cats_when_tenth_high_and_ninth_low() {
        let mut r = baseline();
        r[9] = 6.0;
        r[8] = 3.0;
        assert_eq!(score(&r).unwrap().cat_dog, CatDog::Cats);
    }

    #[test]
    fn test_cats_boundary_ninth_equal_five() {
        let mut r = baseline();
        r[9] = 6.0;
        r[8] = 5.0;
        assert_eq!(score(&r).unwrap().cat_dog, CatDog::Cats);
    }

    #[test]
    fn test_dogs_when_ninth_also_high() {
        let mut r = baseline();
        r[9] = 6.0;
        r[8] = 6.0;
        assert_eq!(score(&r).unwrap().cat_dog, CatDog::Dogs);
    }

    #[test]
    fn test_fur_long_when_average_six() {
        let s = score(&[6.0; 10]).unwrap();
        assert_eq!(s.fur_value, Length::Long);
        assert!((s.average - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fur_short_when_average_four() {
        assert_eq!(score(&[4.0; 10]).unwrap().fur_value, Length::Short);
    }

    #[test]
    fn test_fur_short_when_average_exactly_five() {
        assert_eq!(score(&[5.0; 10]).unwrap().fur_value, Length::Short);
    }

    #[test]
    fn test_average_covers_values_past_the_tenth() {
        // First ten average 5.0 (short); the eleventh lifts the mean to 60/11.
        let mut r = vec![5.0; 10];
        r.push(10.0);
        let s = score(&r).unwrap();
        assert_eq!(s.fur_value, Length::Long);
        assert!((s.average - 60.0 / 11.0).abs() < 1e-9);
    }

    #[test]
    fn test_tail_long_when_seventh_is_five() {
        let mut r = baseline();
        r[6] = 5.0;
        assert_eq!(score(&r).unwrap().tail_value, Length::Long);
    }

    #[test]
    fn test_tail_short_when_seventh_is_three() {
        let mut r = baseline();
        r[6] = 3.0;
        assert_eq!(score(&r).unwrap().tail_value, Length::Short);
    }

    #[test]
    fn test_too_few_responses_rejected() {
        assert_eq!(
            score(&[1.0; 9]).unwrap_err(),
            ScoringError::TooFewResponses { got: 9 }
        );
    }

    #[test]
    fn test_empty_rejected_without_dividing() {
        assert_eq!(
            score(&[]).unwrap_err(),
            ScoringError::TooFewResponses { got: 0 }
        );
    }

    #[test]
    fn test_non_finite_rejected() {
        let mut r = baseline();
        r[2] = f64::INFINITY;
        assert_eq!(score(&r).unwrap_err(), ScoringError::NonFinite { index: 2 });
    }

    #[test]
    fn test_score_is_deterministic() {
        let r: Vec<f64> = (1..=12).map(f64::from).collect();
        assert_eq!(score(&r).unwrap(), score(&r).unwrap());
    }

    #[test]
    fn test_end_to_end_example() {
        let values = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 5.0];
        let input = SurveyInput::new("u1", values).unwrap();
        let result = analyze(&input).unwrap();

        assert_eq!(result.user_id, "u1");
        assert_eq!(result.overall_analysis, OverallAnalysis::Certain);
        assert_eq!(result.cat_dog, CatDog::Dogs);
        assert_eq!(result.fur_value, Length::Long);
        assert_eq!(result.tail_value, Length::Long);
        assert_eq!(
            result.description,
            "Analysis for user u1: Preference for long fur and long tail."
        );
    }

    #[test]
    fn test_dry_run_description_prefix() {
        let input = SurveyInput::new("fx", vec![1.0; 10]).unwrap();
        let result = analyze_dry_run(&input).unwrap();
        assert_eq!(
            result.description,
            "Test analysis for user fx: Preference for short fur and short tail."
        );
    }
}
