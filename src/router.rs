use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::middleware::auth::require_auth;
use crate::modules::assignments::router::init_assignments_router;
use crate::modules::auth::router::init_auth_router;
use crate::modules::classes::router::init_classes_router;
use crate::modules::results::router::init_results_router;
use crate::modules::students::router::init_students_router;
use crate::modules::subjects::router::init_subjects_router;
use crate::modules::teachers::router::init_teachers_router;
use crate::modules::users::router::init_users_router;
use crate::modules::years::router::init_years_router;
use crate::state::AppState;
use axum::http::{HeaderValue, Method};
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .nest(
            "/api",
            Router::new()
                .nest("/auth", init_auth_router())
                .nest(
                    "/users",
                    init_users_router()
                        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth)),
                )
                .nest(
                    "/students",
                    init_students_router()
                        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth)),
                )
                .nest(
                    "/classes",
                    init_classes_router()
                        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth)),
                )
                .nest(
                    "/subjects",
                    init_subjects_router()
                        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth)),
                )
                .nest(
                    "/teachers",
                    init_teachers_router()
                        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth)),
                )
                .nest(
                    "/results",
                    init_results_router()
                        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth)),
                )
                .nest(
                    "/years",
                    init_years_router()
                        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth)),
                )
                .nest(
                    "/assignments",
                    init_assignments_router()
                        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth)),
                ),
        )
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::PATCH,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
                .allow_credentials(true)
        })
        .layer(middleware::from_fn(logging_middleware))
}
