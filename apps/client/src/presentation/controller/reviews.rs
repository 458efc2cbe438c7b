use crate::{
    application::{
        like_review::use_case::LikeReviewUseCase,
        list_reviews::use_case::ListReviewsUseCase,
        submit_reply::{dto::ReplySubmission, use_case::SubmitReplyUseCase},
        submit_review::{dto::ReviewSubmission, use_case::SubmitError, use_case::SubmitReviewUseCase},
    },
    domain::review::events::ChangeEvent,
    domain::shared::optimistic::OptimisticCounter,
    infrastructure::captcha::{CaptchaGate, CaptchaWidget},
    presentation::view::ReviewListView,
};
use std::collections::{HashMap, HashSet, hash_map::Entry};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, broadcast};
use tracing::warn;
use uuid::Uuid;

/// Where the submission flow currently is.
///
/// `Ready` means a captcha token is held and the submit button is live;
/// any attempt (even a failed one) consumes the token and drops back to
/// `Idle` until the widget reports a fresh solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Ready,
    Submitting,
}

/// Drives the reviews widget: modal lifecycle, captcha gating, the
/// submission sequence, optimistic likes, reply forms, and application of
/// realtime row changes to the rendered list.
///
/// All mutual exclusion is advisory and UI-level: a control is disabled
/// (or its id parked in an in-flight set) for the duration of its round
/// trip. Nothing here locks data on the backend.
pub struct ReviewsController {
    submit_review: SubmitReviewUseCase,
    like_review: LikeReviewUseCase,
    submit_reply: SubmitReplyUseCase,
    list_reviews: ListReviewsUseCase,
    view: Arc<dyn ReviewListView>,
    captcha: Arc<dyn CaptchaWidget>,
    gate: CaptchaGate,
    success_close_delay: Duration,
    phase: Mutex<SubmissionPhase>,
    likes_in_flight: Mutex<HashSet<Uuid>>,
    reply_forms: Mutex<HashMap<Uuid, bool>>,
    rendered_replies: Mutex<HashSet<Uuid>>,
}

impl ReviewsController {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        submit_review: SubmitReviewUseCase,
        like_review: LikeReviewUseCase,
        submit_reply: SubmitReplyUseCase,
        list_reviews: ListReviewsUseCase,
        view: Arc<dyn ReviewListView>,
        captcha: Arc<dyn CaptchaWidget>,
        success_close_delay: Duration,
    ) -> Self {
        Self {
            submit_review,
            like_review,
            submit_reply,
            list_reviews,
            view,
            captcha,
            gate: CaptchaGate::new(),
            success_close_delay,
            phase: Mutex::new(SubmissionPhase::Idle),
            likes_in_flight: Mutex::new(HashSet::new()),
            reply_forms: Mutex::new(HashMap::new()),
            rendered_replies: Mutex::new(HashSet::new()),
        }
    }

    pub async fn phase(&self) -> SubmissionPhase {
        *self.phase.lock().await
    }

    /// Modal opened: submission starts gated until the captcha resolves.
    pub async fn open_modal(&self) {
        *self.phase.lock().await = SubmissionPhase::Idle;
        self.view.set_submit_enabled(self.gate.is_solved().await);
    }

    /// Captcha widget success callback: hold the token, arm the button.
    pub async fn captcha_solved(&self, token: String) {
        let mut phase = self.phase.lock().await;
        if *phase == SubmissionPhase::Submitting {
            return;
        }
        self.gate.solved(token).await;
        *phase = SubmissionPhase::Ready;
        self.view.set_submit_enabled(true);
    }

    /// One submit attempt. Consumes the captcha token up front (success or
    /// failure), then runs the submission sequence; on success the modal
    /// closes after the configured delay and the list is fully refreshed.
    pub async fn submit(&self, submission: ReviewSubmission) {
        {
            let mut phase = self.phase.lock().await;
            if *phase == SubmissionPhase::Submitting {
                return;
            }
            let token = self.gate.take().await;
            self.captcha.reset();
            self.view.set_submit_enabled(false);
            if token.is_none() {
                *phase = SubmissionPhase::Idle;
                self.view
                    .show_submit_error("Please complete the captcha challenge first");
                return;
            }
            *phase = SubmissionPhase::Submitting;
        }

        self.view.set_submit_busy(true);
        let outcome = self.submit_review.execute(submission).await;
        self.view.set_submit_busy(false);
        *self.phase.lock().await = SubmissionPhase::Idle;

        match outcome {
            Ok(_) => {
                self.view
                    .show_success("Thanks! Your review has been submitted.");
                tokio::time::sleep(self.success_close_delay).await;
                self.view.close_modal();
                self.refresh().await;
            }
            Err(SubmitError::Validation(errors)) => {
                self.view.show_field_errors(&errors);
            }
            Err(err) => {
                self.view.show_submit_error(&err.user_message());
            }
        }
    }

    /// One like click. Re-entrant clicks on the same review are ignored
    /// while its round trip is in flight; a review that is no longer
    /// rendered is a no-op.
    pub async fn like(&self, review_id: Uuid) {
        if !self.likes_in_flight.lock().await.insert(review_id) {
            return;
        }
        self.view.set_like_busy(review_id, true);

        if let Some(displayed) = self.view.review_likes(review_id) {
            let (pending, optimistic) = OptimisticCounter::begin(displayed);
            self.view.set_review_likes(review_id, optimistic);

            match self.like_review.execute(review_id).await {
                Ok(stored) => {
                    self.view.set_review_likes(review_id, pending.commit(stored));
                }
                Err(err) => {
                    warn!(%review_id, error = %err, "like failed, rolling back");
                    self.view.set_review_likes(review_id, pending.rollback());
                }
            }
        }

        self.view.set_like_busy(review_id, false);
        self.likes_in_flight.lock().await.remove(&review_id);
    }

    /// Lazily build a review's reply form on first use, then toggle it.
    pub async fn toggle_reply_form(&self, review_id: Uuid) {
        let mut forms = self.reply_forms.lock().await;
        let open = match forms.entry(review_id) {
            Entry::Vacant(slot) => {
                self.view.mount_reply_form(review_id);
                *slot.insert(true)
            }
            Entry::Occupied(mut slot) => {
                let open = slot.get_mut();
                *open = !*open;
                *open
            }
        };
        self.view.set_reply_form_open(review_id, open);
    }

    /// Submit a reply. No optimistic rendering: the acknowledgment is
    /// static and the reply shows up via refresh or realtime push.
    pub async fn reply(&self, submission: ReplySubmission) {
        let review_id = submission.review_id;
        match self.submit_reply.execute(submission).await {
            Ok(_) => self.view.show_reply_ack(review_id),
            Err(err) => self.view.show_reply_error(review_id, &err.user_message()),
        }
    }

    /// Recompute the whole listing from a fresh query and replace the
    /// rendered subtree. A failed refresh keeps the current render.
    pub async fn refresh(&self) {
        match self.list_reviews.execute().await {
            Ok(threads) => {
                let mut rendered = self.rendered_replies.lock().await;
                rendered.clear();
                for thread in &threads {
                    rendered.extend(thread.replies.iter().map(|r| r.id));
                }
                drop(rendered);
                self.view.render_reviews(&threads);
            }
            Err(err) => warn!(error = %err, "review list refresh failed"),
        }
    }

    /// Apply one realtime row change to the rendered list. Idempotent:
    /// re-delivered like counts re-set the same value, re-delivered reply
    /// inserts are dropped by id, and events for unrendered rows no-op.
    pub async fn apply_event(&self, event: ChangeEvent) {
        match event {
            ChangeEvent::ReviewChanged { review_id, likes } => {
                self.view.set_review_likes(review_id, likes);
            }
            ChangeEvent::ReplyAdded(reply) => {
                if !reply.approved {
                    return;
                }
                let mut rendered = self.rendered_replies.lock().await;
                if rendered.contains(&reply.id) {
                    return;
                }
                if self.view.append_reply(reply.review_id, &reply) {
                    rendered.insert(reply.id);
                }
            }
        }
    }

    /// Follow the realtime stream until it closes. Runs for the page
    /// lifetime; a lagged receiver falls back to a full refresh.
    pub async fn run(&self, mut events: broadcast::Receiver<ChangeEvent>) {
        loop {
            match events.recv().await {
                Ok(event) => self.apply_event(event).await,
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!(skipped, "realtime events dropped, refreshing list");
                    self.refresh().await;
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    }
}
