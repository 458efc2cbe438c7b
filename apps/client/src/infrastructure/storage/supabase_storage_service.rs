use super::traits::AvatarStorage;
use async_trait::async_trait;
use bytes::Bytes;

/// Supabase Storage adapter. Objects land in a single public bucket;
/// `x-upsert` gives fixed-key overwrite semantics.
pub struct SupabaseStorageService {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    bucket: String,
}

impl SupabaseStorageService {
    pub fn new(
        http: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        bucket: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl AvatarStorage for SupabaseStorageService {
    async fn upload(&self, key: &str, data: Bytes, content_type: &str) -> anyhow::Result<String> {
        let endpoint = format!("{}/storage/v1/object/{}/{}", self.base_url, self.bucket, key);
        let response = self
            .http
            .post(&endpoint)
            .bearer_auth(&self.api_key)
            .header("apikey", &self.api_key)
            .header("x-upsert", "true")
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(data)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("storage upload failed with {}: {}", status, body);
        }
        Ok(self.public_url(key))
    }

    fn public_url(&self, key: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, self.bucket, key
        )
    }
}
