use std::path::Path;

use tracing::{error, info, warn};

use crate::errors::AppError;
use crate::survey::models::SurveySubmission;

/// Reads the fallback submission from `path`.
/// A missing file and malformed JSON both surface as `FixtureUnavailable`.
pub async fn load_fixture(path: &Path) -> Result<SurveySubmission, AppError> {
    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        error!("Could not read fixture {}: {e}", path.display());
        AppError::FixtureUnavailable(format!("{} could not be read", path.display()))
    })?;

    serde_json::from_str(&raw).map_err(|e| {
        error!("Invalid JSON in fixture {}: {e}", path.display());
        AppError::FixtureUnavailable(format!("{} is not a valid survey submission", path.display()))
    })
}

/// Loads the configured fixture once at startup and logs the outcome.
/// Startup continues either way; requests that need it will fail on their own.
pub async fn preload(path: Option<&Path>) {
    match path {
        None => info!("No survey fixture configured; empty submissions will be rejected"),
        Some(path) => match load_fixture(path).await {
            Ok(fixture) => info!(
                "Survey fixture loaded from {} (user_id {})",
                path.display(),
                fixture.user_id
            ),
            Err(_) => warn!("Failed to load survey fixture from {}", path.display()),
        },
    }
}
