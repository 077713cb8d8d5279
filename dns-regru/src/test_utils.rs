//! 测试辅助模块
//!
//! 提供 mock transport 和便捷的测试工厂方法。

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::credentials::{ClientCertificate, Credentials};
use crate::error::ProviderError;
use crate::providers::RegRuClient;
use crate::traits::Transport;
use crate::types::RequestParams;

pub const TEST_SOURCE: &str = "/usr/local/etc/letsencrypt/regru.ini";
pub const TEST_USERNAME: &str = "test-user";
pub const TEST_PASSWORD: &str = "test-pass";
pub const TEST_BASE_URL: &str = "https://api.test/api/regru2";

// ===== MockTransport =====

/// One call seen by [`MockTransport`].
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub url: String,
    pub params: RequestParams,
    pub client_certificate: Option<ClientCertificate>,
}

impl RecordedCall {
    /// `input_data` parsed back into JSON.
    pub fn input_data(&self) -> Value {
        serde_json::from_str(&self.params.input_data).unwrap_or(Value::Null)
    }
}

/// Records every call and answers from a queue; `{"result":"success"}` once the queue is empty.
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<Value, ProviderError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_response(self, response: Result<Value, ProviderError>) -> Self {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(response);
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(
        &self,
        url: &str,
        params: &RequestParams,
        client_certificate: Option<&ClientCertificate>,
    ) -> Result<Value, ProviderError> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedCall {
                url: url.to_string(),
                params: params.clone(),
                client_certificate: client_certificate.cloned(),
            });

        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| Ok(json!({"result": "success"})))
    }
}

// ===== Factories =====

pub fn test_credentials() -> Credentials {
    Credentials::new(TEST_SOURCE, TEST_USERNAME, TEST_PASSWORD)
}

pub fn http_500() -> ProviderError {
    ProviderError::HttpStatus {
        provider: "regru".to_string(),
        status: 500,
        body: "Internal Server Error".to_string(),
    }
}

pub fn error_envelope() -> Value {
    json!({
        "result": "error",
        "error_code": "INVALID_AUTH",
        "error_text": "Invalid username or password"
    })
}

/// Client wired to `transport` with the test credentials.
pub fn client_with(transport: &Arc<MockTransport>, credentials: Credentials) -> RegRuClient {
    let built = RegRuClient::builder(credentials)
        .base_url(TEST_BASE_URL)
        .transport(transport.clone())
        .build();
    match built {
        Ok(client) => client,
        Err(e) => panic!("test client must build: {e}"),
    }
}
