//! Result Store — insert-only persistence of scored surveys, one row per user.
//!
//! `AppState` holds an `Arc<dyn ResultStore>`; the default backend is SQLite.

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::survey_result::SurveyResultRow;
use crate::survey::models::SurveyResult;

/// Insert-only store. There is deliberately no update or delete.
#[async_trait]
pub trait ResultStore: Send + Sync {
    /// Persists `result`, or fails with [`AppError::DuplicateSubmission`] if the
    /// user already has a row. A failed save writes nothing.
    async fn save(&self, result: &SurveyResult) -> Result<(), AppError>;
}

#[derive(Clone)]
pub struct SqliteResultStore {
    pool: SqlitePool,
}

impl SqliteResultStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Looks up the stored row for a user. Not exposed over HTTP.
    #[cfg(test)]
    pub async fn find(&self, user_id: &str) -> Result<Option<SurveyResultRow>, AppError> {
        Ok(sqlx::query_as::<_, SurveyResultRow>(
            "SELECT * FROM survey_results WHERE user_id = ?",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?)
    }
}

#[async_trait]
impl ResultStore for SqliteResultStore {
    async fn save(&self, result: &SurveyResult) -> Result<(), AppError> {
        let row = SurveyResultRow::from(result);

        // The connection goes back to the pool when `tx` drops; an uncommitted
        // transaction is rolled back at that point.
        let mut tx = self.pool.begin().await?;

        let inserted = sqlx::query(
            r#"
            INSERT INTO survey_results
                (user_id, overall_analysis, cat_dog, fur_value, tail_value, description)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&row.user_id)
        .bind(&row.overall_analysis)
        .bind(&row.cat_dog)
        .bind(&row.fur_value)
        .bind(&row.tail_value)
        .bind(&row.description)
        .execute(&mut *tx)
        .await;

        match inserted {
            Ok(_) => {}
            Err(e) if is_duplicate_key(&e) => {
                tx.rollback().await?;
                warn!("Rejected duplicate survey submission for user_id {}", row.user_id);
                return Err(AppError::DuplicateSubmission(row.user_id));
            }
            Err(e) => return Err(e.into()),
        }

        tx.commit().await?;
        info!("Survey result for user_id {} saved", row.user_id);
        Ok(())
    }
}

fn is_duplicate_key(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => db.is_unique_violation(),
        _ => false,
    }
}
