use chrono::Utc;
use serde::Serialize;
use sha1::{Digest, Sha1};

use crate::payload::builder::format_timestamp;
use crate::payload::payload_model::LabelPayload;
use crate::webhook::webhook_model::WebhookOutcome;

/// One line of the print audit log.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintRecord {
    pub logged_at: String,

    pub data_source_id: Option<i64>,
    pub data_source_name: String,
    pub layout_id: i64,
    pub layout_name: String,

    /// SHA-1 of the payload JSON, to spot repeated prints of the same label
    pub payload_sha1: String,

    pub webhook: Option<WebhookOutcome>,
    pub payload: LabelPayload,
}

impl PrintRecord {
    pub fn now(payload: &LabelPayload, payload_json: &str) -> Self {
        Self {
            logged_at: format_timestamp(Utc::now()),
            data_source_id: payload.data_source_id,
            data_source_name: payload.data_source_name.clone(),
            layout_id: payload.layout.id,
            layout_name: payload.layout.name.clone(),
            payload_sha1: payload_fingerprint(payload_json),
            webhook: None,
            payload: payload.clone(),
        }
    }

    pub fn with_webhook(mut self, outcome: WebhookOutcome) -> Self {
        self.webhook = Some(outcome);
        self
    }
}

pub fn payload_fingerprint(payload_json: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(payload_json.as_bytes());
    format!("{:x}", hasher.finalize())
}
