use super::{AlertKind, EnquiryView, ReviewListView, avatar_src};
use crate::application::submit_review::dto::FieldError;
use crate::domain::review::entity::{Reply, ReviewThread};
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::info;
use uuid::Uuid;

/// Headless view that renders through `tracing` and mirrors the displayed
/// like counts so the optimistic-update flow works without a page.
#[derive(Default)]
pub struct TraceView {
    likes: Mutex<HashMap<Uuid, i32>>,
}

impl TraceView {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReviewListView for TraceView {
    fn render_reviews(&self, threads: &[ReviewThread]) {
        if let Ok(mut likes) = self.likes.lock() {
            likes.clear();
            for thread in threads {
                likes.insert(thread.review.id, thread.review.likes);
            }
        }
        info!(count = threads.len(), "rendered review list");
        for thread in threads {
            info!(
                review_id = %thread.review.id,
                name = %thread.review.name,
                rating = thread.review.rating,
                likes = thread.review.likes,
                replies = thread.replies.len(),
                avatar = avatar_src(thread.review.avatar_url.as_deref()),
                "review"
            );
        }
    }

    fn review_likes(&self, review_id: Uuid) -> Option<i32> {
        self.likes.lock().ok()?.get(&review_id).copied()
    }

    fn set_review_likes(&self, review_id: Uuid, likes: i32) -> bool {
        let Ok(mut map) = self.likes.lock() else {
            return false;
        };
        match map.get_mut(&review_id) {
            Some(displayed) => {
                *displayed = likes;
                info!(%review_id, likes, "like count displayed");
                true
            }
            None => false,
        }
    }

    fn append_reply(&self, review_id: Uuid, reply: &Reply) -> bool {
        let rendered = self
            .likes
            .lock()
            .map(|map| map.contains_key(&review_id))
            .unwrap_or(false);
        if rendered {
            info!(%review_id, reply_id = %reply.id, name = %reply.name, "reply appended");
        }
        rendered
    }

    fn mount_reply_form(&self, review_id: Uuid) {
        info!(%review_id, "reply form mounted");
    }

    fn set_reply_form_open(&self, review_id: Uuid, open: bool) {
        info!(%review_id, open, "reply form toggled");
    }

    fn set_submit_enabled(&self, enabled: bool) {
        info!(enabled, "submit button");
    }

    fn set_submit_busy(&self, busy: bool) {
        info!(busy, "submit busy");
    }

    fn set_like_busy(&self, review_id: Uuid, busy: bool) {
        info!(%review_id, busy, "like busy");
    }

    fn show_field_errors(&self, errors: &[FieldError]) {
        for error in errors {
            info!(field = %error.field, message = %error.message, "field error");
        }
    }

    fn show_submit_error(&self, message: &str) {
        info!(message, "submit error shown");
    }

    fn show_success(&self, message: &str) {
        info!(message, "success shown");
    }

    fn show_reply_ack(&self, review_id: Uuid) {
        info!(%review_id, "reply acknowledged");
    }

    fn show_reply_error(&self, review_id: Uuid, message: &str) {
        info!(%review_id, message, "reply error shown");
    }

    fn close_modal(&self) {
        info!("modal closed");
    }
}

impl EnquiryView for TraceView {
    fn set_busy(&self, busy: bool) {
        info!(busy, "enquiry busy");
    }

    fn show_alert(&self, kind: AlertKind, message: &str) {
        info!(?kind, message, "enquiry alert shown");
    }

    fn hide_alert(&self) {
        info!("enquiry alert hidden");
    }

    fn reset_form(&self) {
        info!("enquiry form reset");
    }
}
