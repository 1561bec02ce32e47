use crate::payload::payload_model::LabelPayload;
use crate::webhook::template::{has_placeholder, interpolate, interpolate_url};
use crate::webhook::webhook_model::{WebhookConfig, WebhookMethod, WebhookRequest};

/// Expand a webhook config into the request for one print.
///
/// Returns `Ok(None)` when the webhook is disabled. URL placeholders are
/// expanded percent-encoded for both methods; a GET carries the payload only
/// through them. A POST sends the interpolated body template when it contains a
/// placeholder, and the raw JSON payload otherwise.
pub fn build_webhook_request(
    config: &WebhookConfig,
    payload: &LabelPayload,
) -> Result<Option<WebhookRequest>, serde_json::Error> {
    if !config.is_enabled() {
        return Ok(None);
    }

    let payload_json = payload.to_json()?;
    let url = interpolate_url(config.url.trim(), payload, &payload_json);

    let body = match config.method {
        WebhookMethod::Get => None,
        WebhookMethod::Post => Some(post_body(config.body.as_deref(), payload, &payload_json)),
    };

    Ok(Some(WebhookRequest {
        method: config.method,
        url,
        body,
    }))
}

fn post_body(template: Option<&str>, payload: &LabelPayload, payload_json: &str) -> String {
    match template {
        Some(t) if has_placeholder(t) => interpolate(t, payload, payload_json),
        _ => payload_json.to_string(),
    }
}
