use axum::{extract::State, response::IntoResponse};
use uuid::Uuid;

use super::{Draft, DraftKey, SaveDraftRequest};
use crate::error::AppError;
use crate::extract::{Json, Query};
use crate::routes::middleware_auth::JwtUser;
use crate::state::AppState;

const DRAFT_COLUMNS: &str = "id, user_id, mode, task_id, date, time, text, updated_at";

/// Fetch the draft at the exact key, `null` when none exists.
pub async fn get(
    State(state): State<AppState>,
    JwtUser(user_id): JwtUser,
    Query(key): Query<DraftKey>,
) -> Result<impl IntoResponse, AppError> {
    let draft = sqlx::query_as::<_, Draft>(&format!(
        r#"
        SELECT {DRAFT_COLUMNS}
        FROM drafts
        WHERE user_id = $1 AND mode = $2 AND task_id IS NOT DISTINCT FROM $3
        "#,
    ))
    .bind(user_id)
    .bind(key.mode.as_str())
    .bind(key.task_id())
    .fetch_optional(&state.db)
    .await?;

    Ok(Json(draft))
}

/// Create or fully overwrite the draft at the key. Never a partial merge:
/// every save replaces date, time and text wholesale.
pub async fn upsert(
    State(state): State<AppState>,
    JwtUser(user_id): JwtUser,
    Json(body): Json<SaveDraftRequest>,
) -> Result<impl IntoResponse, AppError> {
    let key = body.key();

    let draft = sqlx::query_as::<_, Draft>(&format!(
        r#"
        INSERT INTO drafts (id, user_id, mode, task_id, date, time, text)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        ON CONFLICT ON CONSTRAINT drafts_owner_mode_task_key
        DO UPDATE SET
            date = EXCLUDED.date,
            time = EXCLUDED.time,
            text = EXCLUDED.text,
            updated_at = NOW()
        RETURNING {DRAFT_COLUMNS}
        "#,
    ))
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(key.mode.as_str())
    .bind(key.task_id())
    .bind(&body.date)
    .bind(&body.time)
    .bind(&body.text)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(draft))
}

/// Remove the draft at the key. Deleting a draft that is not there is
/// still a success.
pub async fn delete(
    State(state): State<AppState>,
    JwtUser(user_id): JwtUser,
    Query(key): Query<DraftKey>,
) -> Result<impl IntoResponse, AppError> {
    sqlx::query(
        r#"
        DELETE FROM drafts
        WHERE user_id = $1 AND mode = $2 AND task_id IS NOT DISTINCT FROM $3
        "#,
    )
    .bind(user_id)
    .bind(key.mode.as_str())
    .bind(key.task_id())
    .execute(&state.db)
    .await?;

    Ok(Json(serde_json::json!({ "message": "Draft deleted" })))
}
