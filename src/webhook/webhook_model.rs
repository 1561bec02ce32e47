use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WebhookMethod {
    Get,
    #[default]
    Post,
}

impl WebhookMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            WebhookMethod::Get => "GET",
            WebhookMethod::Post => "POST",
        }
    }
}

/// Post-print notification settings.
///
/// `url` and `body` are templates: `{{payload}}` expands to the whole payload
/// as JSON and `{{payload.some.path}}` (or `{{some.path}}`) to one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookConfig {
    pub url: String,

    #[serde(default)]
    pub method: WebhookMethod,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl WebhookConfig {
    pub fn new(url: &str, method: WebhookMethod) -> Self {
        Self {
            url: url.to_string(),
            method,
            body: None,
        }
    }

    pub fn with_body(mut self, body: &str) -> Self {
        self.body = Some(body.to_string());
        self
    }

    /// A blank URL means notifications are switched off.
    pub fn is_enabled(&self) -> bool {
        !self.url.trim().is_empty()
    }
}

/// A fully expanded request, ready to send.
#[derive(Debug, Clone, PartialEq)]
pub struct WebhookRequest {
    pub method: WebhookMethod,
    pub url: String,

    /// JSON (or interpolated template) body; always `None` for GET
    pub body: Option<String>,
}

/// What happened to a print's notification. Recorded, never raised.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum WebhookOutcome {
    /// No webhook configured, or its URL is blank
    Skipped,
    Delivered { status: u16 },
    Rejected { status: u16 },
    Failed { error: String },
}
