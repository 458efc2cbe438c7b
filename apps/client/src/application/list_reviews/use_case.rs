use crate::domain::review::{
    entity::ReviewThread, errors::DomainError, repository::ReviewRepository,
};
use std::sync::Arc;

/// Produces the publicly rendered review threads.
///
/// Visibility and ordering are enforced here, not trusted from the
/// backend: a row renders iff its own `approved` flag is set (reviews and
/// replies independently), reviews run newest-first, replies oldest-first.
pub struct ListReviewsUseCase {
    repository: Arc<dyn ReviewRepository>,
}

impl ListReviewsUseCase {
    pub fn new(repository: Arc<dyn ReviewRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<Vec<ReviewThread>, DomainError> {
        let mut threads = self.repository.approved_reviews().await?;

        threads.retain(|t| t.review.approved);
        threads.sort_by(|a, b| b.review.created_at.cmp(&a.review.created_at));
        for thread in &mut threads {
            thread.replies.retain(|r| r.approved);
            thread.replies.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        }

        Ok(threads)
    }
}
