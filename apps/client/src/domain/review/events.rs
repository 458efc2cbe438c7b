use super::entity::Reply;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Row-change notification pushed by the backend outside any
/// request/response cycle. Delivery may be duplicated or out of order;
/// consumers must apply events idempotently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ChangeEvent {
    /// A `reviews` row changed; carries the authoritative like count.
    ReviewChanged { review_id: Uuid, likes: i32 },
    /// A `review_replies` row was inserted.
    ReplyAdded(Reply),
}
