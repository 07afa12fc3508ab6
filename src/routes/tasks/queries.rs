use sqlx::{PgPool, Result};
use uuid::Uuid;

use super::model::Task;

const TASK_COLUMNS: &str = "id, user_id, date, time, text, is_done, created_at, updated_at";

pub async fn create_task(
    pool: &PgPool,
    user_id: Uuid,
    date: &str,
    time: &str,
    text: &str,
) -> Result<Task> {
    let rec = sqlx::query_as::<_, Task>(&format!(
        r#"
        INSERT INTO tasks (id, user_id, date, time, text)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING {TASK_COLUMNS}
        "#,
    ))
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(date)
    .bind(time)
    .bind(text)
    .fetch_one(pool)
    .await?;

    Ok(rec)
}

pub async fn list_tasks(pool: &PgPool, user_id: Uuid) -> Result<Vec<Task>> {
    let rec = sqlx::query_as::<_, Task>(&format!(
        r#"
        SELECT {TASK_COLUMNS}
        FROM tasks
        WHERE user_id = $1
        ORDER BY created_at DESC
        "#,
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rec)
}

pub async fn get_task(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<Option<Task>> {
    sqlx::query_as::<_, Task>(&format!(
        r#"
        SELECT {TASK_COLUMNS}
        FROM tasks
        WHERE id = $2 AND user_id = $1
        "#,
    ))
    .bind(user_id)
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Replaces the four mutable fields. Scoped by owner: a foreign or missing
/// id both come back as `None`.
pub async fn update_task(
    pool: &PgPool,
    user_id: Uuid,
    id: Uuid,
    date: &str,
    time: &str,
    text: &str,
    is_done: bool,
) -> Result<Option<Task>> {
    sqlx::query_as::<_, Task>(&format!(
        r#"
        UPDATE tasks
        SET date = $3, time = $4, text = $5, is_done = $6, updated_at = NOW()
        WHERE id = $2 AND user_id = $1
        RETURNING {TASK_COLUMNS}
        "#,
    ))
    .bind(user_id)
    .bind(id)
    .bind(date)
    .bind(time)
    .bind(text)
    .bind(is_done)
    .fetch_optional(pool)
    .await
}

pub async fn toggle_task(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<Option<Task>> {
    sqlx::query_as::<_, Task>(&format!(
        r#"
        UPDATE tasks
        SET is_done = NOT is_done, updated_at = NOW()
        WHERE id = $2 AND user_id = $1
        RETURNING {TASK_COLUMNS}
        "#,
    ))
    .bind(user_id)
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Returns the number of rows removed, zero when nothing matched.
pub async fn delete_task(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<u64> {
    let result = sqlx::query(
        r#"
        DELETE FROM tasks
        WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(id)
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

pub async fn delete_all_tasks(pool: &PgPool, user_id: Uuid) -> Result<u64> {
    let result = sqlx::query(
        r#"
        DELETE FROM tasks
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}
