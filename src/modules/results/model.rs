use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A recorded score for a student in a subject.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ExamResult {
    pub id: i64,
    pub student_id: i64,
    pub subject_id: i64,
    pub score: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateResultDto {
    pub student_id: i64,
    pub subject_id: i64,
    #[validate(range(min = 0.0))]
    pub score: f64,
}

/// Once recorded, only the score of a result may change; the student and
/// subject references are immutable, so the update struct exposes nothing
/// else.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateResultDto {
    #[validate(range(min = 0.0))]
    pub score: f64,
}
