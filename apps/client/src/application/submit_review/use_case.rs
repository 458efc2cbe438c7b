use crate::{
    application::shared::best_effort::BestEffort,
    application::submit_review::dto::{FieldError, ReviewSubmission},
    domain::review::{
        entity::{NewReview, Review},
        errors::DomainError,
        repository::ReviewRepository,
    },
    domain::shared::moderation::ModerationPolicy,
    infrastructure::{
        notify::traits::{AdminNotifier, AutoReplyMailer},
        storage::traits::AvatarStorage,
    },
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, instrument};

/// Failure of the submission flow, tagged with the stage that failed.
///
/// Only the fatal stages appear here; the notification stages are
/// best-effort and never fail the submission.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("submission failed validation")]
    Validation(Vec<FieldError>),
    #[error("review insert failed: {0}")]
    Insert(DomainError),
    #[error("avatar upload failed: {0}")]
    AvatarUpload(String),
    #[error("avatar patch failed: {0}")]
    AvatarPatch(DomainError),
}

impl SubmitError {
    /// Message shown in the modal: the backend's text when it carries one,
    /// otherwise a generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(_) => "Please correct the highlighted fields".into(),
            Self::Insert(err) | Self::AvatarPatch(err) => err.user_message(),
            Self::AvatarUpload(msg) if !msg.is_empty() => msg.clone(),
            Self::AvatarUpload(_) => "Something went wrong, please try again".into(),
        }
    }
}

/// Orchestrates the review submission sequence.
///
/// Ordering is strict: insert, avatar upload, avatar patch are fatal in
/// turn; admin notification and auto-reply run best-effort afterwards. A
/// failed upload leaves the inserted row in place without an avatar; there
/// is no compensating rollback and no automatic retry.
pub struct SubmitReviewUseCase {
    repository: Arc<dyn ReviewRepository>,
    storage: Arc<dyn AvatarStorage>,
    notifier: Arc<dyn AdminNotifier>,
    mailer: Arc<dyn AutoReplyMailer>,
    policy: ModerationPolicy,
    best_effort: BestEffort,
    max_avatar_bytes: usize,
}

impl SubmitReviewUseCase {
    pub fn new(
        repository: Arc<dyn ReviewRepository>,
        storage: Arc<dyn AvatarStorage>,
        notifier: Arc<dyn AdminNotifier>,
        mailer: Arc<dyn AutoReplyMailer>,
        policy: ModerationPolicy,
        best_effort: BestEffort,
        max_avatar_bytes: usize,
    ) -> Self {
        Self {
            repository,
            storage,
            notifier,
            mailer,
            policy,
            best_effort,
            max_avatar_bytes,
        }
    }

    #[instrument(skip(self, submission), fields(
        name = %submission.name,
        rating = submission.rating,
        avatar_size = submission.avatar.len()
    ))]
    pub async fn execute(&self, submission: ReviewSubmission) -> Result<Review, SubmitError> {
        submission
            .validate(self.max_avatar_bytes)
            .map_err(SubmitError::Validation)?;

        let mut review = self
            .repository
            .insert_review(NewReview {
                name: submission.name.trim().to_string(),
                email: submission.email.trim().to_string(),
                rating: submission.rating,
                message: submission.message.trim().to_string(),
                likes: 0,
                approved: self.policy.approved_on_create(),
            })
            .await
            .map_err(SubmitError::Insert)?;
        info!(review_id = %review.id, approved = review.approved, "review row created");

        let key = format!("{}.{}", review.id, submission.avatar.extension());
        let url = self
            .storage
            .upload(&key, submission.avatar.data.clone(), &submission.avatar.content_type)
            .await
            .map_err(|e| SubmitError::AvatarUpload(e.to_string()))?;

        self.repository
            .set_avatar_url(review.id, &url)
            .await
            .map_err(SubmitError::AvatarPatch)?;
        review.avatar_url = Some(url);

        self.best_effort
            .run("admin-notify", self.notifier.review_submitted(&review))
            .await;
        self.best_effort
            .run("auto-reply", self.mailer.review_received(&review.name, &review.email))
            .await;

        Ok(review)
    }
}
