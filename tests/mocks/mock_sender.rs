use sms_blast::error::{ProviderError, ProviderResult};
use sms_blast::{MessageResource, MessageSender, PhoneNumber};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock message sender for testing.
///
/// Records every send in call order and answers with a configured error for
/// chosen numbers, success for everything else.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockSender {
    calls: Arc<Mutex<Vec<(String, String)>>>,
    failures: Arc<Mutex<HashMap<String, u16>>>,
}

#[allow(dead_code)]
impl MockSender {
    /// Create a sender that accepts every message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sends to `number` fail with the given HTTP status.
    pub fn fail_with_status(&self, number: &str, status: u16) {
        let mut failures = self.failures.lock().unwrap();
        failures.insert(number.to_string(), status);
    }

    /// Numbers sent to, in call order.
    pub fn sent_to(&self) -> Vec<String> {
        let calls = self.calls.lock().unwrap();
        calls.iter().map(|(to, _)| to.clone()).collect()
    }

    /// Bodies sent, in call order.
    pub fn bodies(&self) -> Vec<String> {
        let calls = self.calls.lock().unwrap();
        calls.iter().map(|(_, body)| body.clone()).collect()
    }

    /// Total number of sends attempted.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl MessageSender for MockSender {
    fn send_message(&self, to: &PhoneNumber, body: &str) -> ProviderResult<MessageResource> {
        self.calls
            .lock()
            .unwrap()
            .push((to.to_string(), body.to_string()));

        if let Some(status) = self.failures.lock().unwrap().get(to.as_str()) {
            return Err(ProviderError::Status {
                status: *status,
                status_text: "Bad Request".to_string(),
                message: "rejected by mock".to_string(),
            });
        }

        let mut resource = MessageResource::new();
        resource.insert("to".to_string(), to.to_string().into());
        Ok(resource)
    }
}
