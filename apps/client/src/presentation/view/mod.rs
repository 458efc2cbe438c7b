pub mod trace_view;

use crate::application::submit_review::dto::FieldError;
use crate::domain::review::entity::{Reply, ReviewThread};
use uuid::Uuid;

/// Bundled placeholder shown when a review has no avatar or its image
/// failed to load.
pub const FALLBACK_AVATAR: &str = "assets/avatar-placeholder.png";

/// The avatar source to render for a possibly avatar-less review.
pub fn avatar_src(url: Option<&str>) -> &str {
    url.filter(|u| !u.is_empty()).unwrap_or(FALLBACK_AVATAR)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

/// The page surface the reviews widget renders into.
///
/// Methods that target a specific element return `bool` (or `Option`) and
/// report `false`/`None` when that element is not mounted; callers treat
/// that as a no-op, never an error. The continuation of an abandoned
/// interaction may run after the page section is gone.
pub trait ReviewListView: Send + Sync {
    /// Replace the whole listing with freshly fetched threads.
    fn render_reviews(&self, threads: &[ReviewThread]);

    /// The like count currently displayed for a review, if rendered.
    fn review_likes(&self, review_id: Uuid) -> Option<i32>;

    /// Overwrite a review's displayed like count.
    fn set_review_likes(&self, review_id: Uuid, likes: i32) -> bool;

    /// Append one reply fragment under its parent review.
    fn append_reply(&self, review_id: Uuid, reply: &Reply) -> bool;

    /// Build a review's reply form; called at most once per review.
    fn mount_reply_form(&self, review_id: Uuid);

    fn set_reply_form_open(&self, review_id: Uuid, open: bool);

    fn set_submit_enabled(&self, enabled: bool);

    fn set_submit_busy(&self, busy: bool);

    fn set_like_busy(&self, review_id: Uuid, busy: bool);

    fn show_field_errors(&self, errors: &[FieldError]);

    fn show_submit_error(&self, message: &str);

    fn show_success(&self, message: &str);

    fn show_reply_ack(&self, review_id: Uuid);

    fn show_reply_error(&self, review_id: Uuid, message: &str);

    fn close_modal(&self);
}

/// The enquiry page surface.
pub trait EnquiryView: Send + Sync {
    fn set_busy(&self, busy: bool);
    fn show_alert(&self, kind: AlertKind, message: &str);
    fn hide_alert(&self);
    fn reset_form(&self);
}
