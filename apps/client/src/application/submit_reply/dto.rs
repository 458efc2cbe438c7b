use serde::Deserialize;
use ts_rs::TS;
use uuid::Uuid;

/// Input captured from a review's inline reply form.
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export)]
pub struct ReplySubmission {
    pub review_id: Uuid,
    pub name: String,
    pub message: String,
}
