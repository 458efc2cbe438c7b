use client::{
    application::{
        like_review::use_case::LikeReviewUseCase, list_reviews::use_case::ListReviewsUseCase,
        shared::best_effort::BestEffort, submit_reply::use_case::SubmitReplyUseCase,
        submit_review::use_case::SubmitReviewUseCase,
    },
    config::Config,
    domain::review::repository::ReviewRepository,
    infrastructure::{
        captcha::NullCaptchaWidget,
        notify::{
            emailjs_mailer::EmailJsMailer, formspree_relay::FormspreeRelay,
            traits::{AdminNotifier, AutoReplyMailer},
        },
        persistence::supabase_review_repository::SupabaseReviewRepository,
        realtime::supabase_realtime::RealtimeListener,
        storage::{supabase_storage_service::SupabaseStorageService, traits::AvatarStorage},
    },
    presentation::{controller::reviews::ReviewsController, view::trace_view::TraceView},
};
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // RUST_LOG wins when set, otherwise a sensible default filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("info,client=debug"))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = Config::from_env()?;
    let http = reqwest::Client::new();

    let repository: Arc<dyn ReviewRepository> = Arc::new(SupabaseReviewRepository::new(
        http.clone(),
        config.supabase_url.clone(),
        config.supabase_anon_key.clone(),
    ));
    let storage: Arc<dyn AvatarStorage> = Arc::new(SupabaseStorageService::new(
        http.clone(),
        config.supabase_url.clone(),
        config.supabase_anon_key.clone(),
        config.avatar_bucket.clone(),
    ));
    let notifier: Arc<dyn AdminNotifier> = Arc::new(FormspreeRelay::new(
        http.clone(),
        config.formspree_endpoint.clone(),
    ));
    let mailer: Arc<dyn AutoReplyMailer> = Arc::new(EmailJsMailer::new(
        http.clone(),
        config.emailjs_endpoint.clone(),
        config.emailjs_service_id.clone(),
        config.emailjs_template_id.clone(),
        config.emailjs_public_key.clone(),
    ));

    let view = Arc::new(TraceView::new());
    let controller = ReviewsController::new(
        SubmitReviewUseCase::new(
            repository.clone(),
            storage,
            notifier,
            mailer,
            config.moderation_policy,
            BestEffort::new(),
            config.max_avatar_bytes,
        ),
        LikeReviewUseCase::new(repository.clone()),
        SubmitReplyUseCase::new(repository.clone(), config.moderation_policy),
        ListReviewsUseCase::new(repository),
        view,
        Arc::new(NullCaptchaWidget),
        Duration::from_millis(config.success_close_delay_ms),
    );

    controller.refresh().await;

    if config.enable_realtime {
        let listener = Arc::new(RealtimeListener::new(
            config.supabase_url.clone(),
            config.supabase_anon_key.clone(),
            Duration::from_secs(config.realtime_reconnect_seconds),
        ));
        let events = listener.subscribe();
        let worker = listener.clone();
        tokio::spawn(async move { worker.start().await });

        // Follow row changes for the process lifetime
        controller.run(events).await;
    }

    Ok(())
}
