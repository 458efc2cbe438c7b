use crate::domain::review::value_objects::AvatarImage;
use serde::Serialize;
use ts_rs::TS;
use validator::ValidateEmail;

/// Everything captured from the review modal form.
#[derive(Debug, Clone)]
pub struct ReviewSubmission {
    pub name: String,
    pub email: String,
    pub rating: i32,
    pub message: String,
    pub avatar: AvatarImage,
}

/// A field-level validation failure, addressed to a specific form control.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl ReviewSubmission {
    /// Local validation, run before any network call. Collects every
    /// violation so the form can annotate all offending fields at once.
    pub fn validate(&self, max_avatar_bytes: usize) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError::new("name", "Please enter your name"));
        }
        if !self.email.validate_email() {
            errors.push(FieldError::new("email", "Please enter a valid email address"));
        }
        if !(1..=5).contains(&self.rating) {
            errors.push(FieldError::new("rating", "Please pick a rating from 1 to 5"));
        }
        if self.message.trim().is_empty() {
            errors.push(FieldError::new("message", "Please write a short review"));
        }
        if self.avatar.is_empty() {
            errors.push(FieldError::new("avatar", "Please attach a photo"));
        } else if !self.avatar.is_image() {
            errors.push(FieldError::new("avatar", "The attached file is not an image"));
        } else if self.avatar.len() > max_avatar_bytes {
            errors.push(FieldError::new(
                "avatar",
                format!("Image must be {} MB or smaller", max_avatar_bytes / (1024 * 1024)),
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
