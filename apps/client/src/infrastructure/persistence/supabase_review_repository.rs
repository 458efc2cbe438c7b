use crate::domain::review::{
    entity::{NewReply, NewReview, Reply, Review, ReviewThread},
    errors::DomainError,
    repository::ReviewRepository,
};
use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

/// PostgREST adapter for the `reviews` and `review_replies` tables.
///
/// Inserts ask for `return=representation` so the backend-assigned `id`
/// and `created_at` come back in the same round trip. Error bodies carry a
/// `message` field which is surfaced verbatim as `DomainError::BackendError`.
pub struct SupabaseReviewRepository {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct LikesRow {
    likes: i32,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl SupabaseReviewRepository {
    pub fn new(
        http: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn authed(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    async fn read_rows<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<Vec<T>, DomainError> {
        let response = Self::check(response).await?;
        response
            .json::<Vec<T>>()
            .await
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))
    }

    /// Pass 2xx responses through; decode anything else into a
    /// `BackendError` carrying the backend's own message when present.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, DomainError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|e| e.message)
            .unwrap_or_else(|_| format!("backend answered {}", status));
        Err(DomainError::BackendError(message))
    }

    fn transport(err: reqwest::Error) -> DomainError {
        DomainError::InfrastructureError(err.to_string())
    }
}

#[async_trait]
impl ReviewRepository for SupabaseReviewRepository {
    async fn insert_review(&self, review: NewReview) -> Result<Review, DomainError> {
        let response = self
            .authed(self.http.post(self.table_url("reviews")))
            .header("Prefer", "return=representation")
            .json(&review)
            .send()
            .await
            .map_err(Self::transport)?;
        self.read_rows::<Review>(response)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::BackendError("insert returned no row".into()))
    }

    async fn approved_reviews(&self) -> Result<Vec<ReviewThread>, DomainError> {
        let response = self
            .authed(self.http.get(self.table_url("reviews")))
            .query(&[
                ("select", "*,review_replies(*)"),
                ("approved", "eq.true"),
                ("order", "created_at.desc"),
                ("review_replies.order", "created_at.asc"),
            ])
            .send()
            .await
            .map_err(Self::transport)?;
        self.read_rows::<ReviewThread>(response).await
    }

    async fn set_avatar_url(&self, id: Uuid, url: &str) -> Result<(), DomainError> {
        let response = self
            .authed(self.http.patch(self.table_url("reviews")))
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=minimal")
            .json(&serde_json::json!({ "avatar_url": url }))
            .send()
            .await
            .map_err(Self::transport)?;
        Self::check(response).await.map(|_| ())
    }

    async fn likes(&self, id: Uuid) -> Result<i32, DomainError> {
        let response = self
            .authed(self.http.get(self.table_url("reviews")))
            .query(&[("id", format!("eq.{id}")), ("select", "likes".into())])
            .send()
            .await
            .map_err(Self::transport)?;
        self.read_rows::<LikesRow>(response)
            .await?
            .into_iter()
            .next()
            .map(|row| row.likes)
            .ok_or_else(|| DomainError::NotFound(format!("review {id}")))
    }

    async fn set_likes(&self, id: Uuid, likes: i32) -> Result<(), DomainError> {
        let response = self
            .authed(self.http.patch(self.table_url("reviews")))
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=minimal")
            .json(&serde_json::json!({ "likes": likes }))
            .send()
            .await
            .map_err(Self::transport)?;
        Self::check(response).await.map(|_| ())
    }

    async fn insert_reply(&self, reply: NewReply) -> Result<Reply, DomainError> {
        let response = self
            .authed(self.http.post(self.table_url("review_replies")))
            .header("Prefer", "return=representation")
            .json(&reply)
            .send()
            .await
            .map_err(Self::transport)?;
        self.read_rows::<Reply>(response)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::BackendError("insert returned no row".into()))
    }
}
