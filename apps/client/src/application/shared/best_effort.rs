use std::future::Future;
use std::sync::Arc;
use tracing::warn;

/// Hook invoked with the task label and error whenever a best-effort task
/// fails. Lets callers (and tests) observe the fatal/best-effort split
/// without changing the primary outcome.
pub type FailureHook = Arc<dyn Fn(&str, &anyhow::Error) + Send + Sync>;

/// Runs side-effect tasks whose failure must not alter the caller's
/// outcome. Failures are logged and reported through the hook; nothing is
/// propagated or retried.
#[derive(Clone, Default)]
pub struct BestEffort {
    on_failure: Option<FailureHook>,
}

impl BestEffort {
    pub fn new() -> Self {
        Self { on_failure: None }
    }

    pub fn with_failure_hook(hook: FailureHook) -> Self {
        Self {
            on_failure: Some(hook),
        }
    }

    /// Await the task; on failure, log at `warn` and notify the hook.
    pub async fn run<F>(&self, label: &str, task: F)
    where
        F: Future<Output = anyhow::Result<()>>,
    {
        if let Err(err) = task.await {
            warn!(task = label, error = %err, "best-effort task failed");
            if let Some(hook) = &self.on_failure {
                hook(label, &err);
            }
        }
    }
}
