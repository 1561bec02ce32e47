use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::{info, warn};

use crate::error::LabelError;
use crate::payload::payload_model::LabelPayload;
use crate::webhook::request::build_webhook_request;
use crate::webhook::webhook_model::{
    WebhookConfig, WebhookMethod, WebhookOutcome, WebhookRequest,
};

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Delivers an expanded webhook request and reports the HTTP status.
pub trait WebhookSender {
    fn send(&self, request: &WebhookRequest) -> Result<u16, LabelError>;
}

/// Blocking `reqwest` sender.
pub struct HttpWebhookSender {
    client: Client,
}

impl HttpWebhookSender {
    pub fn new(timeout: Duration) -> Result<Self, LabelError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

impl WebhookSender for HttpWebhookSender {
    fn send(&self, request: &WebhookRequest) -> Result<u16, LabelError> {
        let builder = match request.method {
            WebhookMethod::Get => self.client.get(&request.url),
            WebhookMethod::Post => self.client.post(&request.url),
        };
        let builder = match &request.body {
            Some(body) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(body.clone()),
            None => builder,
        };

        let response = builder.send()?;
        Ok(response.status().as_u16())
    }
}

/// Send the post-print notification for `payload`.
///
/// Fire-and-forget: every failure is logged and folded into the returned
/// outcome. Nothing is retried.
pub fn notify_print(
    sender: &dyn WebhookSender,
    config: Option<&WebhookConfig>,
    payload: &LabelPayload,
) -> WebhookOutcome {
    let Some(config) = config else {
        return WebhookOutcome::Skipped;
    };

    let request = match build_webhook_request(config, payload) {
        Ok(Some(request)) => request,
        Ok(None) => return WebhookOutcome::Skipped,
        Err(e) => {
            warn!(error = %e, "failed to serialize payload for webhook");
            return WebhookOutcome::Failed {
                error: e.to_string(),
            };
        }
    };

    match sender.send(&request) {
        Ok(status) if (200..300).contains(&status) => {
            info!(method = request.method.as_str(), url = %request.url, status, "webhook delivered");
            WebhookOutcome::Delivered { status }
        }
        Ok(status) => {
            warn!(method = request.method.as_str(), url = %request.url, status, "webhook rejected");
            WebhookOutcome::Rejected { status }
        }
        Err(e) => {
            warn!(method = request.method.as_str(), url = %request.url, error = %e, "webhook failed");
            WebhookOutcome::Failed {
                error: e.to_string(),
            }
        }
    }
}
