use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Teacher {
    pub id: i64,
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub contact: Option<String>,
    pub status: Option<String>,
    pub specialization: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// One teaching assignment: a class plus the subjects taught in it.
#[derive(Debug, Deserialize, ToSchema)]
pub struct TeacherAssignmentDto {
    pub class_id: i64,
    pub subject_ids: Vec<i64>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTeacherDto {
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    pub contact: Option<String>,
    pub status: Option<String>,
    pub specialization: Option<String>,
    /// Class this teacher becomes the class teacher of, if any.
    pub class_teacher_for: Option<i64>,
    pub assignments: Option<Vec<TeacherAssignmentDto>>,
}

/// Full-replace update of the teacher profile. The linked user account is
/// not touched here.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateTeacherDto {
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    pub contact: Option<String>,
    pub status: Option<String>,
    pub specialization: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TeacherProfile {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Response of the compound create operation. `plain_password` is returned
/// exactly once; only its hash is stored.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateTeacherResponse {
    pub teacher: TeacherProfile,
    pub plain_password: String,
}

/// Listing shape: the profile joined with its account email plus the
/// distinct subject and class names the teacher is assigned to.
#[derive(Debug, Serialize, ToSchema)]
pub struct TeacherSummary {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub contact: Option<String>,
    pub status: Option<String>,
    pub specialization: Option<String>,
    pub subjects: Vec<String>,
    pub classes: Vec<String>,
}
