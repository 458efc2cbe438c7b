use crate::domain::review::{errors::DomainError, repository::ReviewRepository};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// One like click: fetch the authoritative count, write back `+1`, return
/// the stored value.
///
/// This is read-increment-write, not a server-side atomic increment. Two
/// browser sessions liking the same review concurrently can lose one of
/// the updates (last writer wins at the storage layer). The caller
/// serializes its own clicks per review; cross-session races stay
/// unresolved.
pub struct LikeReviewUseCase {
    repository: Arc<dyn ReviewRepository>,
}

impl LikeReviewUseCase {
    pub fn new(repository: Arc<dyn ReviewRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, review_id: Uuid) -> Result<i32, DomainError> {
        let current = self.repository.likes(review_id).await?;
        let next = current.saturating_add(1);
        self.repository.set_likes(review_id, next).await?;
        debug!(%review_id, likes = next, "like counter written");
        Ok(next)
    }
}
