use super::entity::{NewReply, NewReview, Reply, Review, ReviewThread};
use super::errors::DomainError;
use async_trait::async_trait;
use uuid::Uuid;

/// Persistence port for reviews and replies.
///
/// The backing service assigns `id` and `created_at` on insert and returns
/// the created row. `approved_reviews` embeds each review's replies in one
/// round trip, newest review first.
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn insert_review(&self, review: NewReview) -> Result<Review, DomainError>;
    async fn approved_reviews(&self) -> Result<Vec<ReviewThread>, DomainError>;
    async fn set_avatar_url(&self, id: Uuid, url: &str) -> Result<(), DomainError>;
    async fn likes(&self, id: Uuid) -> Result<i32, DomainError>;
    async fn set_likes(&self, id: Uuid, likes: i32) -> Result<(), DomainError>;
    async fn insert_reply(&self, reply: NewReply) -> Result<Reply, DomainError>;
}
