use bytes::Bytes;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Hard ceiling for avatar uploads: 2 MiB.
pub const MAX_AVATAR_BYTES: usize = 2 * 1024 * 1024;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReviewerName {
    #[validate(length(min = 1, max = 80))]
    pub value: String,
}

impl ReviewerName {
    pub fn new(value: String) -> Result<Self, validator::ValidationErrors> {
        let name = Self {
            value: value.trim().to_string(),
        };
        name.validate()?;
        Ok(name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReviewMessage {
    #[validate(length(min = 1, max = 2000))]
    pub value: String,
}

impl ReviewMessage {
    pub fn new(value: String) -> Result<Self, validator::ValidationErrors> {
        let message = Self {
            value: value.trim().to_string(),
        };
        message.validate()?;
        Ok(message)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
pub struct Rating {
    #[validate(range(min = 1, max = 5))]
    pub value: i32,
}

impl Rating {
    pub fn new(value: i32) -> Result<Self, validator::ValidationErrors> {
        let rating = Self { value };
        rating.validate()?;
        Ok(rating)
    }
}

/// An avatar file attached to a submission: raw bytes plus the MIME type
/// the upload is stored under.
#[derive(Debug, Clone)]
pub struct AvatarImage {
    pub data: Bytes,
    pub content_type: String,
}

impl AvatarImage {
    pub fn new(data: Bytes, content_type: impl Into<String>) -> Self {
        Self {
            data,
            content_type: content_type.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }

    /// File extension used when deriving the storage key from the MIME type.
    pub fn extension(&self) -> &'static str {
        match self.content_type.as_str() {
            "image/png" => "png",
            "image/jpeg" => "jpg",
            "image/webp" => "webp",
            "image/gif" => "gif",
            _ => "img",
        }
    }
}
