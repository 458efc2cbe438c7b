use async_trait::async_trait;
use bytes::Bytes;

/// Object storage for avatar files.
///
/// Uploads are keyed; re-uploading an existing key overwrites it, so the
/// flow can safely retry against the same review id.
#[async_trait]
pub trait AvatarStorage: Send + Sync {
    /// Store the object and return its public URL.
    async fn upload(&self, key: &str, data: Bytes, content_type: &str) -> anyhow::Result<String>;
    fn public_url(&self, key: &str) -> String;
}
