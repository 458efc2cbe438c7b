//! Widget configuration loading from environment variables.
//!
//! All configuration is loaded from the environment at startup via standard
//! `std::env::var`. Nothing is read lazily later: the widget is wired once
//! in `main` (or a test harness) from an explicit `Config` value, with no
//! load-order coupling between modules.
//!
//! # Environment Variables
//!
//! ## Required Variables
//! - `SUPABASE_URL`: Base URL of the Supabase project (e.g. `https://xyz.supabase.co`)
//! - `SUPABASE_ANON_KEY`: Publishable API key sent as `apikey` + bearer token
//! - `FORMSPREE_ENDPOINT`: Form-relay endpoint for admin notifications
//! - `EMAILJS_SERVICE_ID`: EmailJS service id for the auto-reply
//! - `EMAILJS_TEMPLATE_ID`: EmailJS template id for the auto-reply
//! - `EMAILJS_PUBLIC_KEY`: EmailJS public (user) key
//!
//! ## Optional Variables
//! - `RUST_LOG`: Logging level (default: "info,client=debug")
//! - `AVATAR_BUCKET`: Storage bucket for avatar files (default: "avatars")
//! - `MODERATION_POLICY`: "require_approval" or "auto_publish" (default: "require_approval")
//! - `MAX_AVATAR_BYTES`: Avatar upload ceiling in bytes (default: 2 MiB)
//! - `SUCCESS_CLOSE_DELAY_MS`: Delay before the modal closes after a
//!   successful submission (default: 2500)
//! - `ALERT_HIDE_DELAY_MS`: Delay before the enquiry alert auto-hides
//!   (default: 5000)
//! - `ENABLE_REALTIME`: Subscribe to row-change events (default: true)
//! - `REALTIME_RECONNECT_SECONDS`: Wait between reconnect attempts
//!   (default: 5)
//! - `EMAILJS_ENDPOINT`: Override the EmailJS send endpoint (default:
//!   `https://api.emailjs.com/api/v1.0/email/send`)

use crate::domain::shared::moderation::ModerationPolicy;
use crate::domain::review::value_objects::MAX_AVATAR_BYTES;

/// Complete widget configuration loaded from environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Supabase project base URL
    pub supabase_url: String,

    /// Supabase publishable key, sent on every REST/storage/realtime call
    pub supabase_anon_key: String,

    /// Storage bucket holding avatar files
    pub avatar_bucket: String,

    /// Formspree endpoint for admin notifications
    pub formspree_endpoint: String,

    /// EmailJS send endpoint
    pub emailjs_endpoint: String,

    /// EmailJS service id
    pub emailjs_service_id: String,

    /// EmailJS template id for the submission auto-reply
    pub emailjs_template_id: String,

    /// EmailJS public key
    pub emailjs_public_key: String,

    /// Whether newly submitted reviews/replies are immediately public
    pub moderation_policy: ModerationPolicy,

    /// Avatar upload ceiling in bytes
    pub max_avatar_bytes: usize,

    /// Delay before the modal closes after a successful submission
    pub success_close_delay_ms: u64,

    /// Delay before the enquiry alert auto-hides
    pub alert_hide_delay_ms: u64,

    /// Subscribe to row-change events on startup
    pub enable_realtime: bool,

    /// Wait between realtime reconnect attempts
    pub realtime_reconnect_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if any required environment variable is missing or
    /// cannot be parsed to the expected type.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            supabase_url: env_required("SUPABASE_URL")?,
            supabase_anon_key: env_required("SUPABASE_ANON_KEY")?,
            avatar_bucket: env_or("AVATAR_BUCKET", "avatars".to_string())?,
            formspree_endpoint: env_required("FORMSPREE_ENDPOINT")?,
            emailjs_endpoint: env_or(
                "EMAILJS_ENDPOINT",
                "https://api.emailjs.com/api/v1.0/email/send".to_string(),
            )?,
            emailjs_service_id: env_required("EMAILJS_SERVICE_ID")?,
            emailjs_template_id: env_required("EMAILJS_TEMPLATE_ID")?,
            emailjs_public_key: env_required("EMAILJS_PUBLIC_KEY")?,
            moderation_policy: moderation_policy_from_env()?,
            max_avatar_bytes: env_or("MAX_AVATAR_BYTES", MAX_AVATAR_BYTES)?,
            success_close_delay_ms: env_or("SUCCESS_CLOSE_DELAY_MS", 2500)?,
            alert_hide_delay_ms: env_or("ALERT_HIDE_DELAY_MS", 5000)?,
            enable_realtime: env_or("ENABLE_REALTIME", true)?,
            realtime_reconnect_seconds: env_or("REALTIME_RECONNECT_SECONDS", 5)?,
        })
    }
}

fn moderation_policy_from_env() -> anyhow::Result<ModerationPolicy> {
    match std::env::var("MODERATION_POLICY") {
        Ok(val) => ModerationPolicy::parse(&val).ok_or_else(|| {
            anyhow::anyhow!(
                "MODERATION_POLICY must be \"require_approval\" or \"auto_publish\", got {:?}",
                val
            )
        }),
        Err(_) => Ok(ModerationPolicy::default()),
    }
}

/// Load a required environment variable.
///
/// # Errors
///
/// Returns an error if the variable is not set.
fn env_required(key: &str) -> anyhow::Result<String> {
    std::env::var(key).map_err(|_| anyhow::anyhow!("Missing required environment variable: {}", key))
}

/// Load an environment variable with a default value.
///
/// Returns the parsed environment variable if set, otherwise returns the default.
///
/// # Errors
///
/// Returns an error if the variable is set but cannot be parsed.
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}
