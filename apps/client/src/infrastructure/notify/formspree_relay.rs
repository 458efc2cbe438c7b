use super::traits::AdminNotifier;
use crate::application::enquiry::dto::EnquiryMessage;
use crate::domain::review::entity::Review;
use async_trait::async_trait;
use serde_json::json;

/// Formspree form-relay adapter: one POST of form fields per notification.
pub struct FormspreeRelay {
    http: reqwest::Client,
    endpoint: String,
}

impl FormspreeRelay {
    pub fn new(http: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    async fn deliver(&self, fields: serde_json::Value) -> anyhow::Result<()> {
        let response = self
            .http
            .post(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&fields)
            .send()
            .await?;
        if !response.status().is_success() {
            anyhow::bail!("form relay answered {}", response.status());
        }
        Ok(())
    }
}

#[async_trait]
impl AdminNotifier for FormspreeRelay {
    async fn review_submitted(&self, review: &Review) -> anyhow::Result<()> {
        self.deliver(json!({
            "_subject": format!("New review from {}", review.name),
            "name": review.name,
            "email": review.email,
            "rating": review.rating,
            "message": review.message,
        }))
        .await
    }

    async fn enquiry_received(&self, enquiry: &EnquiryMessage) -> anyhow::Result<()> {
        self.deliver(json!({
            "_subject": format!("New enquiry from {}", enquiry.name),
            "name": enquiry.name,
            "email": enquiry.email,
            "service": enquiry.service.as_deref().unwrap_or("not specified"),
            "message": enquiry.message,
        }))
        .await
    }
}
