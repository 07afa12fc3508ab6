use serde::Deserialize;

use super::model::Task;

#[derive(Deserialize)]
pub struct CreateTask {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub text: String,
}

/// Full replacement of the four mutable fields. All of them are required;
/// the handler rejects a partial body instead of merging it.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTask {
    pub date: Option<String>,
    pub time: Option<String>,
    pub text: Option<String>,
    pub is_done: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Active,
    History,
}

/// Query parameters for the list endpoint. `date`/`time`/`text` are
/// independent case-insensitive substring filters, only applied to the
/// history view; a missing or empty term imposes no constraint.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub view: Option<View>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub text: Option<String>,
}

impl ListParams {
    pub fn keeps(&self, task: &Task) -> bool {
        match self.view {
            None => true,
            Some(View::Active) => !task.is_done,
            Some(View::History) => {
                task.is_done
                    && matches_term(&task.date, self.date.as_deref())
                    && matches_term(&task.time, self.time.as_deref())
                    && matches_term(&task.text, self.text.as_deref())
            }
        }
    }
}

fn matches_term(field: &str, term: Option<&str>) -> bool {
    match term {
        None | Some("") => true,
        Some(t) => field.to_lowercase().contains(&t.to_lowercase()),
    }
}
