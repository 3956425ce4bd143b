use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Links a teacher to the subject they teach in a particular class.
/// Assignments are immutable once created; replacing one means deleting it
/// and creating a new row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ClassSubjectTeacher {
    pub id: i64,
    pub class_id: i64,
    pub subject_id: i64,
    pub teacher_id: i64,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAssignmentDto {
    pub class_id: i64,
    pub subject_id: i64,
    pub teacher_id: i64,
}
