use crate::core::is_success;

/// Response as delivered by the transport: status line and body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status:      u16,
    pub status_text: String,
    pub body:        String,
}

impl RawResponse {
    pub fn new(status: u16, status_text: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            body: body.into(),
        }
    }

    /// `200 OK` with the given body.
    pub fn ok(body: impl Into<String>) -> Self { Self::new(200, "OK", body) }

    pub fn is_success(&self) -> bool { is_success(self.status) }
}
