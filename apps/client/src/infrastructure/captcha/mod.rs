use tokio::sync::Mutex;

/// The rendered CAPTCHA challenge widget. The widget reports a token
/// through its success callback; `reset` forces the visitor to solve a
/// fresh challenge.
pub trait CaptchaWidget: Send + Sync {
    fn reset(&self);
}

/// Holds the one-time challenge token between the widget callback and the
/// next submit attempt.
///
/// `take` consumes the token; every submit attempt takes it, successful or
/// not, so each attempt needs a fresh solve.
#[derive(Default)]
pub struct CaptchaGate {
    token: Mutex<Option<String>>,
}

impl CaptchaGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Widget success callback: store the freshly issued token.
    pub async fn solved(&self, token: String) {
        *self.token.lock().await = Some(token);
    }

    /// Consume the current token, if any.
    pub async fn take(&self) -> Option<String> {
        self.token.lock().await.take()
    }

    pub async fn is_solved(&self) -> bool {
        self.token.lock().await.is_some()
    }
}

/// No-op widget for headless runs and tests.
pub struct NullCaptchaWidget;

impl CaptchaWidget for NullCaptchaWidget {
    fn reset(&self) {}
}
