use chrono::DateTime;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A dated/timed to-do entry. `date`, `time` and `text` are free-form
/// strings; the canonical display forms are `"Mo, 04.05.2025"` and
/// `"09:00"`, but nothing stops older rows from holding anything else.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: String,
    pub time: String,
    pub text: String,
    pub is_done: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// A task with no date, time and text sorts after everything else.
    pub fn is_empty(&self) -> bool {
        self.date.is_empty() && self.time.is_empty() && self.text.is_empty()
    }
}
