use crate::{
    application::submit_reply::dto::ReplySubmission,
    domain::review::{
        entity::{NewReply, Reply},
        errors::DomainError,
        repository::ReviewRepository,
    },
    domain::shared::moderation::ModerationPolicy,
};
use std::sync::Arc;
use tracing::info;

/// Inserts a reply under a review. Required-field check only; the reply is
/// not rendered optimistically; it appears on the next full refresh or
/// through the realtime push once approved.
pub struct SubmitReplyUseCase {
    repository: Arc<dyn ReviewRepository>,
    policy: ModerationPolicy,
}

impl SubmitReplyUseCase {
    pub fn new(repository: Arc<dyn ReviewRepository>, policy: ModerationPolicy) -> Self {
        Self { repository, policy }
    }

    pub async fn execute(&self, submission: ReplySubmission) -> Result<Reply, DomainError> {
        if submission.name.trim().is_empty() || submission.message.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "Please fill in your name and a message".into(),
            ));
        }

        let reply = self
            .repository
            .insert_reply(NewReply {
                review_id: submission.review_id,
                name: submission.name.trim().to_string(),
                message: submission.message.trim().to_string(),
                approved: self.policy.approved_on_create(),
            })
            .await?;
        info!(reply_id = %reply.id, review_id = %reply.review_id, "reply row created");
        Ok(reply)
    }
}
