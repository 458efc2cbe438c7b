use crate::{
    application::enquiry::dto::EnquiryMessage,
    domain::review::errors::DomainError,
    infrastructure::notify::traits::AdminNotifier,
};
use std::sync::Arc;
use tracing::debug;
use validator::ValidateEmail;

/// What became of an enquiry submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnquiryOutcome {
    /// Relayed to the admin inbox.
    Delivered,
    /// Honeypot tripped; dropped without a network call. The caller shows
    /// no outcome either way, so bots learn nothing.
    Discarded,
}

/// Relays a contact enquiry to the admin inbox through the form-relay
/// service.
pub struct SubmitEnquiryUseCase {
    notifier: Arc<dyn AdminNotifier>,
}

impl SubmitEnquiryUseCase {
    pub fn new(notifier: Arc<dyn AdminNotifier>) -> Self {
        Self { notifier }
    }

    pub async fn execute(&self, enquiry: EnquiryMessage) -> Result<EnquiryOutcome, DomainError> {
        if !enquiry.honeypot.trim().is_empty() {
            debug!("honeypot tripped, discarding enquiry");
            return Ok(EnquiryOutcome::Discarded);
        }
        if enquiry.name.trim().is_empty() || enquiry.message.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "Please fill in your name and a message".into(),
            ));
        }
        if !enquiry.email.validate_email() {
            return Err(DomainError::ValidationError(
                "Please enter a valid email address".into(),
            ));
        }

        self.notifier
            .enquiry_received(&enquiry)
            .await
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
        Ok(EnquiryOutcome::Delivered)
    }
}
