//! # Gradebook API
//!
//! A school management REST API built with Rust, Axum, and SQLite. It covers
//! the day-to-day records of a small school: accounts, students, classes,
//! subjects, teachers, results, academic years, and the assignments that link
//! a teacher to the subject they teach in a class.
//!
//! ## Architecture
//!
//! The codebase follows a modular architecture inspired by NestJS:
//!
//! ```text
//! src/
//! ├── config/           # Configuration modules (JWT, database, CORS)
//! ├── middleware/       # Auth middleware and extractors
//! ├── modules/          # Feature modules
//! │   ├── auth/        # Authentication (login, current user)
//! │   ├── users/       # Account management
//! │   ├── students/    # Student records
//! │   ├── classes/     # Classes and their form teachers
//! │   ├── subjects/    # Subjects
//! │   ├── teachers/    # Teacher onboarding and profiles
//! │   ├── results/     # Per-subject student scores
//! │   ├── years/       # Academic years
//! │   └── assignments/ # Class-subject-teacher links
//! └── utils/           # Shared utilities
//! ```
//!
//! Each feature module follows a consistent structure:
//!
//! - `mod.rs`: Module exports
//! - `controller.rs`: HTTP handlers (routes)
//! - `service.rs`: Business logic
//! - `model.rs`: Data models, DTOs, database structs
//! - `router.rs`: Axum router configuration
//!
//! ## Authentication
//!
//! Login is form-encoded (`username` + `password`) and returns a bearer
//! access token. Every entity route requires a valid token; only `/api/auth`
//! is public.
//!
//! ## Quick Start
//!
//! ```bash
//! DATABASE_URL=sqlite://gradebook.db
//! JWT_SECRET=your-secure-secret-key
//! JWT_ACCESS_EXPIRY=3600
//! ```
//!
//! When the server is running, API documentation is available at
//! `http://localhost:3000/scalar`.

pub mod config;
pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod utils;
pub mod validator;
