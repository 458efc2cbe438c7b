use serde::Deserialize;
use ts_rs::TS;

/// Input captured from the enquiry contact form.
///
/// `honeypot` maps to the hidden form field; humans leave it empty, bots
/// tend to fill it.
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export)]
pub struct EnquiryMessage {
    pub name: String,
    pub email: String,
    /// Service selected from the service cards, if any
    pub service: Option<String>,
    pub message: String,
    #[serde(default)]
    pub honeypot: String,
}
