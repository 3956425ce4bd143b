pub mod assignments;
pub mod auth;
pub mod classes;
pub mod results;
pub mod students;
pub mod subjects;
pub mod teachers;
pub mod users;
pub mod years;
