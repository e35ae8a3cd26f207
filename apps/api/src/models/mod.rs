pub mod survey_result;
