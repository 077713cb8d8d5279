use async_trait::async_trait;
use serde_json::Value;

use crate::credentials::ClientCertificate;
use crate::error::ProviderError;
use crate::types::RequestParams;

/// HTTP transport used to reach the DNS API.
///
/// Implementations perform exactly one form-encoded POST per call and hand back
/// the decoded JSON body; interpreting the response envelope is up to the caller.
///
/// 实现:
/// - [`HttpTransport`](crate::HttpTransport): reqwest, 可选 mTLS
/// - 测试: 记录调用的 mock
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST `params` to `url`.
    ///
    /// When `client_certificate` is given and both files exist, the request is made
    /// with client certificate authentication; otherwise plain TLS.
    ///
    /// # Errors
    /// - [`ProviderError::HttpStatus`] for a non-2xx response
    /// - [`ProviderError::ParseError`] for an empty or non-JSON body
    /// - [`ProviderError::NetworkError`] / [`ProviderError::Timeout`] for connection failures
    /// - [`ProviderError::TlsIdentity`] when the certificate/key cannot be loaded
    async fn send(
        &self,
        url: &str,
        params: &RequestParams,
        client_certificate: Option<&ClientCertificate>,
    ) -> Result<Value, ProviderError>;
}
