use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A visitor review as stored in the `reviews` table.
///
/// # Lifecycle
/// 1. **Inserted** - created through the submission flow with `likes = 0`
///    and `avatar_url` unset
/// 2. **Patched** - `avatar_url` is written once the avatar upload finishes
/// 3. **Approved** - moderated out-of-band; only approved rows are publicly
///    listed
///
/// # Invariants
/// - `id` is assigned by the backend and never changes; it is the
///   correlation key for realtime updates
/// - `likes` never decreases through this client (increment only)
/// - a row whose avatar upload failed stays avatar-less permanently; the
///   insert is not rolled back
/// - `email` is never rendered; it only feeds the auto-reply
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Review {
    /// Backend-assigned unique identifier
    pub id: Uuid,

    /// Submitter's display name
    pub name: String,

    /// Submitter's email, used for the auto-reply only
    pub email: String,

    /// Star rating, 1 through 5
    pub rating: i32,

    /// Free-text review body
    pub message: String,

    /// Public URL of the uploaded avatar, absent until the patch lands
    pub avatar_url: Option<String>,

    /// Like counter, non-negative
    pub likes: i32,

    /// Moderation gate for the public listing
    pub approved: bool,

    /// Backend-assigned creation timestamp; listing order key (descending)
    pub created_at: DateTime<Utc>,
}

/// A reply to a review, stored in the `review_replies` table.
///
/// Visibility is gated by the reply's own `approved` flag, independent of
/// the parent review's flag.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Reply {
    pub id: Uuid,
    pub review_id: Uuid,
    pub name: String,
    pub message: String,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
}

/// A review together with its replies, as returned by the listing query
/// (one-level relational embedding).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReviewThread {
    #[serde(flatten)]
    pub review: Review,

    /// Embedded reply rows; may include unapproved rows depending on the
    /// backend filter, so listing re-checks `approved` before rendering
    #[serde(rename = "review_replies", default)]
    pub replies: Vec<Reply>,
}

/// Insert payload for a new review row. `id` and `created_at` are assigned
/// by the backend and echoed back in the insert response.
#[derive(Debug, Clone, Serialize)]
pub struct NewReview {
    pub name: String,
    pub email: String,
    pub rating: i32,
    pub message: String,
    pub likes: i32,
    pub approved: bool,
}

/// Insert payload for a new reply row.
#[derive(Debug, Clone, Serialize)]
pub struct NewReply {
    pub review_id: Uuid,
    pub name: String,
    pub message: String,
    pub approved: bool,
}
