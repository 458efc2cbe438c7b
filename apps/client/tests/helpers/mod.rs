#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, TimeZone, Utc};
use client::{
    application::{
        enquiry::dto::EnquiryMessage,
        like_review::use_case::LikeReviewUseCase,
        list_reviews::use_case::ListReviewsUseCase,
        shared::best_effort::BestEffort,
        submit_reply::use_case::SubmitReplyUseCase,
        submit_review::{dto::FieldError, dto::ReviewSubmission, use_case::SubmitReviewUseCase},
    },
    domain::review::{
        entity::{NewReply, NewReview, Reply, Review, ReviewThread},
        errors::DomainError,
        repository::ReviewRepository,
        value_objects::AvatarImage,
    },
    domain::shared::moderation::ModerationPolicy,
    infrastructure::{
        captcha::CaptchaWidget,
        notify::traits::{AdminNotifier, AutoReplyMailer},
        storage::traits::AvatarStorage,
    },
    presentation::{
        controller::reviews::ReviewsController,
        view::{AlertKind, EnquiryView, ReviewListView},
    },
};
use std::collections::HashMap;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicI64, AtomicUsize, Ordering},
};
use std::time::Duration;
use uuid::Uuid;

pub fn ts(seconds: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000 + seconds, 0).unwrap()
}

pub fn review(name: &str, approved: bool, likes: i32, seconds: i64) -> Review {
    Review {
        id: Uuid::now_v7(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        rating: 5,
        message: "Great work".to_string(),
        avatar_url: None,
        likes,
        approved,
        created_at: ts(seconds),
    }
}

pub fn reply(review_id: Uuid, name: &str, approved: bool, seconds: i64) -> Reply {
    Reply {
        id: Uuid::now_v7(),
        review_id,
        name: name.to_string(),
        message: "Agreed".to_string(),
        approved,
        created_at: ts(seconds),
    }
}

pub fn valid_submission() -> ReviewSubmission {
    ReviewSubmission {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        rating: 5,
        message: "Great work".into(),
        avatar: AvatarImage::new(Bytes::from(vec![0u8; 1024]), "image/png"),
    }
}

/// In-memory repository. Listing is deliberately returned unfiltered so
/// tests can prove the widget enforces visibility itself.
#[derive(Default)]
pub struct FakeRepository {
    pub reviews: Mutex<Vec<Review>>,
    pub replies: Mutex<Vec<Reply>>,
    pub calls: Mutex<Vec<String>>,
    pub fail_insert: Mutex<Option<String>>,
    pub fail_set_avatar: Mutex<Option<String>>,
    pub fail_set_likes: Mutex<Option<String>>,
    clock: AtomicI64,
}

impl FakeRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn seed_review(&self, review: Review) -> Uuid {
        let id = review.id;
        self.reviews.lock().unwrap().push(review);
        id
    }

    pub fn call_names(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &str) {
        self.calls.lock().unwrap().push(call.to_string());
    }

    fn next_ts(&self) -> DateTime<Utc> {
        ts(1000 + self.clock.fetch_add(1, Ordering::SeqCst))
    }
}

#[async_trait]
impl ReviewRepository for FakeRepository {
    async fn insert_review(&self, review: NewReview) -> Result<Review, DomainError> {
        self.record("insert_review");
        if let Some(msg) = self.fail_insert.lock().unwrap().clone() {
            return Err(DomainError::BackendError(msg));
        }
        let row = Review {
            id: Uuid::now_v7(),
            name: review.name,
            email: review.email,
            rating: review.rating,
            message: review.message,
            avatar_url: None,
            likes: review.likes,
            approved: review.approved,
            created_at: self.next_ts(),
        };
        self.reviews.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn approved_reviews(&self) -> Result<Vec<ReviewThread>, DomainError> {
        self.record("approved_reviews");
        let reviews = self.reviews.lock().unwrap().clone();
        let replies = self.replies.lock().unwrap().clone();
        Ok(reviews
            .into_iter()
            .map(|review| {
                let replies = replies
                    .iter()
                    .filter(|r| r.review_id == review.id)
                    .cloned()
                    .collect();
                ReviewThread { review, replies }
            })
            .collect())
    }

    async fn set_avatar_url(&self, id: Uuid, url: &str) -> Result<(), DomainError> {
        self.record("set_avatar_url");
        if let Some(msg) = self.fail_set_avatar.lock().unwrap().clone() {
            return Err(DomainError::BackendError(msg));
        }
        let mut reviews = self.reviews.lock().unwrap();
        let row = reviews
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("review {id}")))?;
        row.avatar_url = Some(url.to_string());
        Ok(())
    }

    async fn likes(&self, id: Uuid) -> Result<i32, DomainError> {
        self.record("likes");
        self.reviews
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .map(|r| r.likes)
            .ok_or_else(|| DomainError::NotFound(format!("review {id}")))
    }

    async fn set_likes(&self, id: Uuid, likes: i32) -> Result<(), DomainError> {
        self.record("set_likes");
        if let Some(msg) = self.fail_set_likes.lock().unwrap().clone() {
            return Err(DomainError::BackendError(msg));
        }
        let mut reviews = self.reviews.lock().unwrap();
        let row = reviews
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("review {id}")))?;
        row.likes = likes;
        Ok(())
    }

    async fn insert_reply(&self, reply: NewReply) -> Result<Reply, DomainError> {
        self.record("insert_reply");
        let row = Reply {
            id: Uuid::now_v7(),
            review_id: reply.review_id,
            name: reply.name,
            message: reply.message,
            approved: reply.approved,
            created_at: self.next_ts(),
        };
        self.replies.lock().unwrap().push(row.clone());
        Ok(row)
    }
}

#[derive(Default)]
pub struct FakeStorage {
    pub uploads: Mutex<Vec<(String, String)>>,
    pub fail: Mutex<Option<String>>,
}

impl FakeStorage {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait]
impl AvatarStorage for FakeStorage {
    async fn upload(&self, key: &str, _data: Bytes, content_type: &str) -> anyhow::Result<String> {
        if let Some(msg) = self.fail.lock().unwrap().clone() {
            anyhow::bail!(msg);
        }
        self.uploads
            .lock()
            .unwrap()
            .push((key.to_string(), content_type.to_string()));
        Ok(self.public_url(key))
    }

    fn public_url(&self, key: &str) -> String {
        format!("https://test-storage.local/{key}")
    }
}

#[derive(Default)]
pub struct FakeNotifier {
    pub review_notifications: AtomicUsize,
    pub enquiries: Mutex<Vec<String>>,
    pub fail: Mutex<Option<String>>,
}

impl FakeNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn check(&self) -> anyhow::Result<()> {
        if let Some(msg) = self.fail.lock().unwrap().clone() {
            anyhow::bail!(msg);
        }
        Ok(())
    }
}

#[async_trait]
impl AdminNotifier for FakeNotifier {
    async fn review_submitted(&self, _review: &Review) -> anyhow::Result<()> {
        self.check()?;
        self.review_notifications.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn enquiry_received(&self, enquiry: &EnquiryMessage) -> anyhow::Result<()> {
        self.check()?;
        self.enquiries.lock().unwrap().push(enquiry.name.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeMailer {
    pub sent: Mutex<Vec<String>>,
    pub fail: Mutex<Option<String>>,
}

impl FakeMailer {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait]
impl AutoReplyMailer for FakeMailer {
    async fn review_received(&self, _to_name: &str, to_email: &str) -> anyhow::Result<()> {
        if let Some(msg) = self.fail.lock().unwrap().clone() {
            anyhow::bail!(msg);
        }
        self.sent.lock().unwrap().push(to_email.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeCaptcha {
    pub resets: AtomicUsize,
}

impl FakeCaptcha {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

impl CaptchaWidget for FakeCaptcha {
    fn reset(&self) {
        self.resets.fetch_add(1, Ordering::SeqCst);
    }
}

/// Records every view mutation; a review "is rendered" iff its id is in
/// the `likes` map (seeded by `render_reviews` or `seed_rendered`).
#[derive(Default)]
pub struct RecordingView {
    pub likes: Mutex<HashMap<Uuid, i32>>,
    pub like_history: Mutex<Vec<(Uuid, i32)>>,
    pub renders: Mutex<Vec<Vec<Uuid>>>,
    pub last_threads: Mutex<Vec<ReviewThread>>,
    pub appended_replies: Mutex<Vec<(Uuid, Uuid)>>,
    pub mounted_forms: Mutex<Vec<Uuid>>,
    pub form_toggles: Mutex<Vec<(Uuid, bool)>>,
    pub submit_enabled: Mutex<Vec<bool>>,
    pub submit_busy: Mutex<Vec<bool>>,
    pub field_errors: Mutex<Vec<FieldError>>,
    pub submit_errors: Mutex<Vec<String>>,
    pub successes: Mutex<Vec<String>>,
    pub reply_acks: Mutex<Vec<Uuid>>,
    pub reply_errors: Mutex<Vec<(Uuid, String)>>,
    pub modal_closes: AtomicUsize,
    pub enquiry_busy: Mutex<Vec<bool>>,
    pub alerts: Mutex<Vec<(AlertKind, String)>>,
    pub alert_hides: AtomicUsize,
    pub form_resets: AtomicUsize,
}

impl RecordingView {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn seed_rendered(&self, review_id: Uuid, likes: i32) {
        self.likes.lock().unwrap().insert(review_id, likes);
    }

    pub fn displayed_likes(&self, review_id: Uuid) -> Option<i32> {
        self.likes.lock().unwrap().get(&review_id).copied()
    }

    pub fn likes_shown(&self, review_id: Uuid) -> Vec<i32> {
        self.like_history
            .lock()
            .unwrap()
            .iter()
            .filter(|(id, _)| *id == review_id)
            .map(|(_, likes)| *likes)
            .collect()
    }

    pub fn rendered_ids(&self) -> Vec<Vec<Uuid>> {
        self.renders.lock().unwrap().clone()
    }
}

impl ReviewListView for RecordingView {
    fn render_reviews(&self, threads: &[ReviewThread]) {
        let mut likes = self.likes.lock().unwrap();
        likes.clear();
        for thread in threads {
            likes.insert(thread.review.id, thread.review.likes);
        }
        self.renders
            .lock()
            .unwrap()
            .push(threads.iter().map(|t| t.review.id).collect());
        *self.last_threads.lock().unwrap() = threads.to_vec();
    }

    fn review_likes(&self, review_id: Uuid) -> Option<i32> {
        self.displayed_likes(review_id)
    }

    fn set_review_likes(&self, review_id: Uuid, likes: i32) -> bool {
        let mut map = self.likes.lock().unwrap();
        match map.get_mut(&review_id) {
            Some(displayed) => {
                *displayed = likes;
                self.like_history.lock().unwrap().push((review_id, likes));
                true
            }
            None => false,
        }
    }

    fn append_reply(&self, review_id: Uuid, reply: &Reply) -> bool {
        if !self.likes.lock().unwrap().contains_key(&review_id) {
            return false;
        }
        self.appended_replies
            .lock()
            .unwrap()
            .push((review_id, reply.id));
        true
    }

    fn mount_reply_form(&self, review_id: Uuid) {
        self.mounted_forms.lock().unwrap().push(review_id);
    }

    fn set_reply_form_open(&self, review_id: Uuid, open: bool) {
        self.form_toggles.lock().unwrap().push((review_id, open));
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.submit_enabled.lock().unwrap().push(enabled);
    }

    fn set_submit_busy(&self, busy: bool) {
        self.submit_busy.lock().unwrap().push(busy);
    }

    fn set_like_busy(&self, _review_id: Uuid, _busy: bool) {}

    fn show_field_errors(&self, errors: &[FieldError]) {
        self.field_errors.lock().unwrap().extend_from_slice(errors);
    }

    fn show_submit_error(&self, message: &str) {
        self.submit_errors.lock().unwrap().push(message.to_string());
    }

    fn show_success(&self, message: &str) {
        self.successes.lock().unwrap().push(message.to_string());
    }

    fn show_reply_ack(&self, review_id: Uuid) {
        self.reply_acks.lock().unwrap().push(review_id);
    }

    fn show_reply_error(&self, review_id: Uuid, message: &str) {
        self.reply_errors
            .lock()
            .unwrap()
            .push((review_id, message.to_string()));
    }

    fn close_modal(&self) {
        self.modal_closes.fetch_add(1, Ordering::SeqCst);
    }
}

impl EnquiryView for RecordingView {
    fn set_busy(&self, busy: bool) {
        self.enquiry_busy.lock().unwrap().push(busy);
    }

    fn show_alert(&self, kind: AlertKind, message: &str) {
        self.alerts.lock().unwrap().push((kind, message.to_string()));
    }

    fn hide_alert(&self) {
        self.alert_hides.fetch_add(1, Ordering::SeqCst);
    }

    fn reset_form(&self) {
        self.form_resets.fetch_add(1, Ordering::SeqCst);
    }
}

/// Fully faked widget wiring around a `ReviewsController`.
pub struct Harness {
    pub repo: Arc<FakeRepository>,
    pub storage: Arc<FakeStorage>,
    pub notifier: Arc<FakeNotifier>,
    pub mailer: Arc<FakeMailer>,
    pub captcha: Arc<FakeCaptcha>,
    pub view: Arc<RecordingView>,
    pub best_effort_failures: Arc<Mutex<Vec<String>>>,
    pub controller: ReviewsController,
}

pub fn harness(policy: ModerationPolicy) -> Harness {
    let repo = FakeRepository::new();
    let storage = FakeStorage::new();
    let notifier = FakeNotifier::new();
    let mailer = FakeMailer::new();
    let captcha = FakeCaptcha::new();
    let view = RecordingView::new();

    let best_effort_failures: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = best_effort_failures.clone();
    let best_effort = BestEffort::with_failure_hook(Arc::new(move |label, _err| {
        sink.lock().unwrap().push(label.to_string());
    }));

    let repository: Arc<dyn ReviewRepository> = repo.clone();
    let controller = ReviewsController::new(
        SubmitReviewUseCase::new(
            repository.clone(),
            storage.clone(),
            notifier.clone(),
            mailer.clone(),
            policy,
            best_effort,
            2 * 1024 * 1024,
        ),
        LikeReviewUseCase::new(repository.clone()),
        SubmitReplyUseCase::new(repository.clone(), policy),
        ListReviewsUseCase::new(repository),
        view.clone(),
        captcha.clone(),
        Duration::from_millis(2500),
    );

    Harness {
        repo,
        storage,
        notifier,
        mailer,
        captcha,
        view,
        best_effort_failures,
        controller,
    }
}
