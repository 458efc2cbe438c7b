use super::traits::AutoReplyMailer;
use async_trait::async_trait;
use serde_json::json;

/// EmailJS adapter for the submission auto-reply: sends a templated
/// message through the hosted send endpoint.
pub struct EmailJsMailer {
    http: reqwest::Client,
    endpoint: String,
    service_id: String,
    template_id: String,
    public_key: String,
}

impl EmailJsMailer {
    pub fn new(
        http: reqwest::Client,
        endpoint: impl Into<String>,
        service_id: impl Into<String>,
        template_id: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
            service_id: service_id.into(),
            template_id: template_id.into(),
            public_key: public_key.into(),
        }
    }
}

#[async_trait]
impl AutoReplyMailer for EmailJsMailer {
    async fn review_received(&self, to_name: &str, to_email: &str) -> anyhow::Result<()> {
        let payload = json!({
            "service_id": self.service_id,
            "template_id": self.template_id,
            "user_id": self.public_key,
            "template_params": {
                "to_name": to_name,
                "to_email": to_email,
            },
        });
        let response = self.http.post(&self.endpoint).json(&payload).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("email service answered {}: {}", status, body);
        }
        Ok(())
    }
}
