use axum::{Router, routing::get, routing::post};

use crate::state::AppState;

use super::controller::{
    create_assignment, delete_assignment, get_assignment, get_assignments,
};

pub fn init_assignments_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_assignment).get(get_assignments))
        .route("/{id}", get(get_assignment).delete(delete_assignment))
}
