use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub(crate) mod auth;
pub mod drafts;
mod health;
mod middleware_auth;
pub mod tasks;

pub use auth::register;
pub use health::health;

use crate::routes::auth::login;
use crate::routes::middleware_auth::JwtUser;
use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let task_router = Router::new()
        .route(
            "/",
            post(tasks::routes::create)
                .get(tasks::routes::list)
                .delete(tasks::routes::delete_all),
        )
        .route(
            "/{id}",
            get(tasks::routes::get)
                .put(tasks::routes::update)
                .patch(tasks::routes::toggle)
                .delete(tasks::routes::delete),
        );

    let draft_router = Router::new().route(
        "/",
        get(drafts::routes::get)
            .post(drafts::routes::upsert)
            .delete(drafts::routes::delete),
    );

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .nest(
            "/api",
            Router::new()
                .route("/me", get(me_handler))
                .nest("/tasks", task_router)
                .nest("/drafts", draft_router)
                .layer(middleware::from_fn_with_state(
                    state.clone(),
                    middleware_auth::require_auth,
                )),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn root() -> &'static str {
    "Tagesplan API"
}

async fn me_handler(JwtUser(user_id): JwtUser) -> Json<serde_json::Value> {
    Json(serde_json::json!({ "id": user_id }))
}
