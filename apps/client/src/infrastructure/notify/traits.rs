use crate::application::enquiry::dto::EnquiryMessage;
use crate::domain::review::entity::Review;
use async_trait::async_trait;

/// Best-effort notifications to the site owner's inbox. A 2xx from the
/// relay means the admin was notified; there is no retry contract.
#[async_trait]
pub trait AdminNotifier: Send + Sync {
    async fn review_submitted(&self, review: &Review) -> anyhow::Result<()>;
    async fn enquiry_received(&self, enquiry: &EnquiryMessage) -> anyhow::Result<()>;
}

/// Best-effort transactional email back to the submitter.
#[async_trait]
pub trait AutoReplyMailer: Send + Sync {
    async fn review_received(&self, to_name: &str, to_email: &str) -> anyhow::Result<()>;
}
