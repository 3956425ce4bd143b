use axum::{Router, routing::get, routing::post};

use crate::state::AppState;

use super::controller::{create_year, delete_year, get_year, get_years, update_year};

pub fn init_years_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_year).get(get_years))
        .route("/{id}", get(get_year).put(update_year).delete(delete_year))
}
