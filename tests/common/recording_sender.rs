use std::cell::RefCell;

use label_sorcerer::error::LabelError;
use label_sorcerer::webhook::sender::WebhookSender;
use label_sorcerer::webhook::webhook_model::WebhookRequest;

/// Records every request and answers with a fixed status, or fails.
pub struct RecordingSender {
    requests: RefCell<Vec<WebhookRequest>>,
    status: Option<u16>,
}

impl RecordingSender {
    pub fn responding(status: u16) -> Self {
        Self {
            requests: RefCell::new(Vec::new()),
            status: Some(status),
        }
    }

    /// Every delivery fails at the transport level.
    pub fn failing() -> Self {
        Self {
            requests: RefCell::new(Vec::new()),
            status: None,
        }
    }

    pub fn sent(&self) -> Vec<WebhookRequest> {
        self.requests.borrow().clone()
    }
}

impl WebhookSender for RecordingSender {
    fn send(&self, request: &WebhookRequest) -> Result<u16, LabelError> {
        self.requests.borrow_mut().push(request.clone());
        match self.status {
            Some(status) => Ok(status),
            None => Err(LabelError::Io {
                path: request.url.clone(),
                source: std::io::Error::new(
                    std::io::ErrorKind::ConnectionRefused,
                    "connection refused",
                ),
            }),
        }
    }
}
