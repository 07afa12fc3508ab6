use axum::{extract::State, http::StatusCode, response::IntoResponse};
use uuid::Uuid;

use super::dto::{CreateTask, ListParams, UpdateTask};
use super::{order, queries};
use crate::error::AppError;
use crate::extract::{Json, Path, Query};
use crate::routes::middleware_auth::JwtUser;
use crate::state::AppState;

pub async fn create(
    State(state): State<AppState>,
    JwtUser(user_id): JwtUser,
    Json(body): Json<CreateTask>,
) -> Result<impl IntoResponse, AppError> {
    // Compact digit tokens ("040525", "0830") become canonical display
    // strings; anything already canonical passes through untouched.
    let date = order::format_date_token(&body.date);
    let time = order::format_time_token(&body.time);

    let task = queries::create_task(&state.db, user_id, &date, &time, &body.text).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn list(
    State(state): State<AppState>,
    JwtUser(user_id): JwtUser,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let mut tasks = queries::list_tasks(&state.db, user_id).await?;
    tasks.sort_by(order::compare_tasks);
    tasks.retain(|t| params.keeps(t));
    Ok(Json(tasks))
}

pub async fn get(
    State(state): State<AppState>,
    JwtUser(user_id): JwtUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let task = queries::get_task(&state.db, user_id, id)
        .await?
        .ok_or(AppError::NotFound("Task not found"))?;
    Ok(Json(task))
}

pub async fn update(
    State(state): State<AppState>,
    JwtUser(user_id): JwtUser,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateTask>,
) -> Result<impl IntoResponse, AppError> {
    let (Some(date), Some(time), Some(text), Some(is_done)) =
        (body.date, body.time, body.text, body.is_done)
    else {
        return Err(AppError::Validation(
            "date, time, text and isDone are required".to_string(),
        ));
    };

    let date = order::format_date_token(&date);
    let time = order::format_time_token(&time);

    let task = queries::update_task(&state.db, user_id, id, &date, &time, &text, is_done)
        .await?
        .ok_or(AppError::NotFound("Task not found"))?;
    Ok(Json(task))
}

pub async fn toggle(
    State(state): State<AppState>,
    JwtUser(user_id): JwtUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let task = queries::toggle_task(&state.db, user_id, id)
        .await?
        .ok_or(AppError::NotFound("Task not found"))?;
    Ok(Json(task))
}

pub async fn delete(
    State(state): State<AppState>,
    JwtUser(user_id): JwtUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = queries::delete_task(&state.db, user_id, id).await?;
    if deleted == 0 {
        return Err(AppError::NotFound("Task not found"));
    }
    Ok(Json(serde_json::json!({ "message": "Task deleted" })))
}

/// Clears every task owned by the caller. Succeeds with the same shape
/// when there was nothing to delete.
pub async fn delete_all(
    State(state): State<AppState>,
    JwtUser(user_id): JwtUser,
) -> Result<impl IntoResponse, AppError> {
    let removed = queries::delete_all_tasks(&state.db, user_id).await?;
    tracing::debug!("cleared {} task(s) for {}", removed, user_id);
    Ok(Json(serde_json::json!({ "message": "All tasks deleted" })))
}
