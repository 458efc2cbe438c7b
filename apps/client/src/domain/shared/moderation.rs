use serde::{Deserialize, Serialize};

/// Decides whether a freshly created review or reply is immediately public
/// or waits for out-of-band approval.
///
/// Configured once at startup (`MODERATION_POLICY`); never inferred at the
/// call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModerationPolicy {
    /// New rows are inserted with `approved = true` and show up on the
    /// next listing refresh.
    AutoPublish,
    /// New rows are inserted with `approved = false` and stay hidden until
    /// an admin approves them.
    RequireApproval,
}

impl ModerationPolicy {
    /// The `approved` flag written on insert under this policy.
    pub fn approved_on_create(&self) -> bool {
        matches!(self, Self::AutoPublish)
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "auto_publish" | "auto-publish" => Some(Self::AutoPublish),
            "require_approval" | "require-approval" => Some(Self::RequireApproval),
            _ => None,
        }
    }
}

impl Default for ModerationPolicy {
    fn default() -> Self {
        Self::RequireApproval
    }
}
