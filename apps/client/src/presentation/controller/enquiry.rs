use crate::{
    application::enquiry::{
        dto::EnquiryMessage,
        use_case::{EnquiryOutcome, SubmitEnquiryUseCase},
    },
    presentation::view::{AlertKind, EnquiryView},
};
use std::sync::Arc;
use std::time::Duration;

/// Drives the enquiry contact form: busy state around the relay round
/// trip, success alert with timed auto-hide, silent drop on a tripped
/// honeypot.
pub struct EnquiryController {
    submit_enquiry: SubmitEnquiryUseCase,
    view: Arc<dyn EnquiryView>,
    alert_hide_delay: Duration,
}

impl EnquiryController {
    pub fn new(
        submit_enquiry: SubmitEnquiryUseCase,
        view: Arc<dyn EnquiryView>,
        alert_hide_delay: Duration,
    ) -> Self {
        Self {
            submit_enquiry,
            view,
            alert_hide_delay,
        }
    }

    pub async fn submit(&self, enquiry: EnquiryMessage) {
        self.view.set_busy(true);
        let outcome = self.submit_enquiry.execute(enquiry).await;
        self.view.set_busy(false);

        match outcome {
            // A tripped honeypot shows nothing at all
            Ok(EnquiryOutcome::Discarded) => {}
            Ok(EnquiryOutcome::Delivered) => {
                self.view.show_alert(
                    AlertKind::Success,
                    "Message sent securely! I'll reply within 24 hours.",
                );
                self.view.reset_form();
                let view = Arc::clone(&self.view);
                let delay = self.alert_hide_delay;
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    view.hide_alert();
                });
            }
            Err(err) => {
                self.view.show_alert(AlertKind::Error, &err.user_message());
            }
        }
    }
}
