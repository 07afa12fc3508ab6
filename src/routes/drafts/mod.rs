pub mod routes;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// MODELS

/// Unsaved form content, one row per `(owner, mode, task)` key. The add
/// form has no task, so its key carries a NULL `task_id`.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    pub id: Uuid,
    pub user_id: Uuid,
    pub mode: String,
    pub task_id: Option<Uuid>,
    pub date: String,
    pub time: String,
    pub text: String,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftMode {
    Add,
    Edit,
}

impl DraftMode {
    pub fn as_str(self) -> &'static str {
        match self {
            DraftMode::Add => "add",
            DraftMode::Edit => "edit",
        }
    }
}

/// Key query parameters for GET/DELETE. An unknown `mode` fails
/// deserialization before any handler runs.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftKey {
    pub mode: DraftMode,
    pub task_id: Option<Uuid>,
}

impl DraftKey {
    /// Add-mode drafts ignore any task id the client happens to send.
    pub fn task_id(&self) -> Option<Uuid> {
        match self.mode {
            DraftMode::Add => None,
            DraftMode::Edit => self.task_id,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveDraftRequest {
    pub mode: DraftMode,
    pub task_id: Option<Uuid>,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub text: String,
}

impl SaveDraftRequest {
    pub fn key(&self) -> DraftKey {
        DraftKey {
            mode: self.mode,
            task_id: self.task_id,
        }
    }
}
