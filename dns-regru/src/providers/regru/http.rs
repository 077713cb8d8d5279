//! Reg.ru HTTP 请求方法

use serde_json::Value;

use crate::error::ProviderError;
use crate::types::RequestParams;

use super::{PROVIDER_NAME, RESULT_SUCCESS, RegRuClient};

impl RegRuClient {
    /// 执行 Reg.ru API 请求并检查响应 envelope
    pub(crate) async fn request(
        &self,
        path: &str,
        params: &RequestParams,
    ) -> Result<Value, ProviderError> {
        let url = self.endpoint(path);
        let client_certificate = self.credentials.client_certificate();

        let response = self
            .transport
            .send(&url, params, client_certificate.as_ref())
            .await?;

        check_envelope(&response)?;
        Ok(response)
    }
}

/// `result` 必须恰好为 `"success"`，缺失或其他值均视为失败
pub(crate) fn check_envelope(response: &Value) -> Result<(), ProviderError> {
    if response.get("result").and_then(Value::as_str) == Some(RESULT_SUCCESS) {
        return Ok(());
    }

    let text_field = |key: &str| response.get(key).and_then(Value::as_str).map(str::to_string);
    Err(ProviderError::Unsuccessful {
        provider: PROVIDER_NAME.to_string(),
        error_code: text_field("error_code"),
        error_text: text_field("error_text"),
        envelope: response.to_string(),
    })
}
