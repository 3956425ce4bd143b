use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// An academic year such as "2025/2026". At most one year may be flagged
/// active at a time; the database enforces this with a partial unique index.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AcademicYear {
    pub id: i64,
    pub name: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateYearDto {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,
    #[serde(default)]
    pub is_active: bool,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateYearDto {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,
    pub is_active: bool,
}
