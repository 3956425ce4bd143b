use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::assignments::model::{ClassSubjectTeacher, CreateAssignmentDto};
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{LoginRequest, LoginResponse};
use crate::modules::classes::model::{Class, CreateClassDto, UpdateClassDto};
use crate::modules::results::model::{CreateResultDto, ExamResult, UpdateResultDto};
use crate::modules::students::model::{CreateStudentDto, Student, UpdateStudentDto};
use crate::modules::subjects::model::{CreateSubjectDto, Subject, UpdateSubjectDto};
use crate::modules::teachers::model::{
    CreateTeacherDto, CreateTeacherResponse, Teacher, TeacherAssignmentDto, TeacherProfile,
    TeacherSummary, UpdateTeacherDto,
};
use crate::modules::users::model::{CreateUserDto, UpdateUserDto, User, UserRole};
use crate::modules::years::model::{AcademicYear, CreateYearDto, UpdateYearDto};
use crate::utils::pagination::PaginationParams;
use crate::utils::response::OkResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::login_user,
        crate::modules::auth::controller::me,
        crate::modules::users::controller::create_user,
        crate::modules::users::controller::get_users,
        crate::modules::users::controller::get_user,
        crate::modules::users::controller::update_user,
        crate::modules::users::controller::delete_user,
        crate::modules::students::controller::create_student,
        crate::modules::students::controller::get_students,
        crate::modules::students::controller::get_student,
        crate::modules::students::controller::update_student,
        crate::modules::students::controller::delete_student,
        crate::modules::classes::controller::create_class,
        crate::modules::classes::controller::get_classes,
        crate::modules::classes::controller::get_class,
        crate::modules::classes::controller::update_class,
        crate::modules::classes::controller::delete_class,
        crate::modules::subjects::controller::create_subject,
        crate::modules::subjects::controller::get_subjects,
        crate::modules::subjects::controller::get_subject,
        crate::modules::subjects::controller::update_subject,
        crate::modules::subjects::controller::delete_subject,
        crate::modules::teachers::controller::create_teacher,
        crate::modules::teachers::controller::get_teachers,
        crate::modules::teachers::controller::get_teacher,
        crate::modules::teachers::controller::update_teacher,
        crate::modules::teachers::controller::delete_teacher,
        crate::modules::results::controller::create_result,
        crate::modules::results::controller::get_results,
        crate::modules::results::controller::get_result,
        crate::modules::results::controller::update_result,
        crate::modules::results::controller::delete_result,
        crate::modules::years::controller::create_year,
        crate::modules::years::controller::get_years,
        crate::modules::years::controller::get_year,
        crate::modules::years::controller::update_year,
        crate::modules::years::controller::delete_year,
        crate::modules::assignments::controller::create_assignment,
        crate::modules::assignments::controller::get_assignments,
        crate::modules::assignments::controller::get_assignment,
        crate::modules::assignments::controller::delete_assignment,
    ),
    components(
        schemas(
            LoginRequest,
            LoginResponse,
            ErrorResponse,
            User,
            UserRole,
            CreateUserDto,
            UpdateUserDto,
            Student,
            CreateStudentDto,
            UpdateStudentDto,
            Class,
            CreateClassDto,
            UpdateClassDto,
            Subject,
            CreateSubjectDto,
            UpdateSubjectDto,
            Teacher,
            TeacherAssignmentDto,
            CreateTeacherDto,
            UpdateTeacherDto,
            TeacherProfile,
            CreateTeacherResponse,
            TeacherSummary,
            ExamResult,
            CreateResultDto,
            UpdateResultDto,
            AcademicYear,
            CreateYearDto,
            UpdateYearDto,
            ClassSubjectTeacher,
            CreateAssignmentDto,
            PaginationParams,
            OkResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "User authentication endpoints"),
        (name = "Users", description = "Account management endpoints"),
        (name = "Students", description = "Student management endpoints"),
        (name = "Classes", description = "Class management endpoints"),
        (name = "Subjects", description = "Subject management endpoints"),
        (name = "Teachers", description = "Teacher onboarding and management endpoints"),
        (name = "Results", description = "Student result endpoints"),
        (name = "Academic Years", description = "Academic year endpoints"),
        (name = "Assignments", description = "Class-subject-teacher assignment endpoints")
    ),
    info(
        title = "Gradebook API",
        version = "0.1.0",
        description = "A school management REST API built with Rust, Axum, and SQLite featuring JWT-based authentication.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
