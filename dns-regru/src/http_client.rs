//! Generic HTTP client tools
//!
//! One form-encoded POST per call: sending, logging, status handling and JSON
//! decoding live here, so the record operations only deal with the response
//! envelope.
//!
//! # design principles
//! - **Single attempt** - no retry; a failed add aborts issuance, a failed remove is swallowed upstream
//! - **Errors keep their context** - status code and body travel with the error

use std::path::Path;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Identity, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::credentials::ClientCertificate;
use crate::error::ProviderError;
use crate::providers::common::{Timeouts, create_http_client};
use crate::providers::regru::PROVIDER_NAME;
use crate::traits::Transport;
use crate::types::RequestParams;
#[cfg(feature = "native-tls")]
use crate::utils::key_format::to_pkcs8_pem;
use crate::utils::log_sanitizer::truncate_for_log;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs a POST request and returns response text
    ///
    /// Unified processing: sending requests, logging, error handling
    ///
    /// # Arguments
    /// * `request_builder` - configured request constructor (including URL, headers, body, etc.)
    /// * `provider_name` - Provider name (for logging)
    /// * `url` - request URL (for logging)
    ///
    /// # Returns
    /// * `Ok(response_text)` - body of a 2xx response
    /// * `Err(ProviderError::HttpStatus)` - non-2xx status, with the body
    /// * `Err(ProviderError::NetworkError)` / `Err(ProviderError::Timeout)` - transport failure
    pub async fn execute_request(
        request_builder: RequestBuilder,
        provider_name: &str,
        url: &str,
    ) -> Result<String, ProviderError> {
        log::debug!("[{provider_name}] POST {url}");

        // Send request
        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            } else {
                ProviderError::NetworkError {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        let status_code = status.as_u16();
        log::debug!("[{provider_name}] Response Status: {status_code}");

        // Read response body
        let response_text = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError {
                provider: provider_name.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[{provider_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        if !status.is_success() {
            log::warn!("[{provider_name}] HTTP {status_code} from {url}");
            return Err(ProviderError::HttpStatus {
                provider: provider_name.to_string(),
                status: status_code,
                body: response_text,
            });
        }

        Ok(response_text)
    }

    /// Parse JSON response
    ///
    /// # Type Parameters
    /// * `T` - target type
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(ProviderError::ParseError)` - empty body or parsing failed
    pub fn parse_json<T>(response_text: &str, provider_name: &str) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        if response_text.trim().is_empty() {
            log::error!("[{provider_name}] Empty response body");
            return Err(ProviderError::ParseError {
                provider: provider_name.to_string(),
                detail: "Empty response body".to_string(),
            });
        }

        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{provider_name}] JSON parse failed: {e}");
            log::error!(
                "[{provider_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            ProviderError::ParseError {
                provider: provider_name.to_string(),
                detail: e.to_string(),
            }
        })
    }
}

/// TLS mode of a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TlsMode<'a> {
    /// Server-authenticated TLS only.
    Plain,
    /// Client certificate authentication with the given files.
    Mutual(&'a ClientCertificate),
}

impl<'a> TlsMode<'a> {
    /// Mutual TLS only when a certificate is configured and both files exist.
    pub(crate) fn select(client_certificate: Option<&'a ClientCertificate>) -> Self {
        match client_certificate {
            Some(certificate) if certificate.is_present() => Self::Mutual(certificate),
            _ => Self::Plain,
        }
    }
}

/// reqwest-based [`Transport`].
///
/// Plain requests share one connection pool. Requests that present a client
/// certificate get a client built for that identity, loaded from disk at call time.
pub struct HttpTransport {
    client: Client,
    timeouts: Timeouts,
}

impl HttpTransport {
    pub fn new(timeouts: Timeouts) -> Result<Self, ProviderError> {
        Ok(Self {
            client: create_http_client(PROVIDER_NAME, &timeouts, None)?,
            timeouts,
        })
    }

    fn client_for(&self, mode: TlsMode<'_>) -> Result<Client, ProviderError> {
        match mode {
            TlsMode::Plain => Ok(self.client.clone()),
            TlsMode::Mutual(certificate) => {
                log::debug!(
                    "[{PROVIDER_NAME}] Using client certificate {}",
                    certificate.cert_path.display()
                );
                let identity = load_identity(certificate)?;
                create_http_client(PROVIDER_NAME, &self.timeouts, Some(identity))
            }
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(
        &self,
        url: &str,
        params: &RequestParams,
        client_certificate: Option<&ClientCertificate>,
    ) -> Result<Value, ProviderError> {
        let client = self.client_for(TlsMode::select(client_certificate))?;

        let request = client
            .post(url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(params.to_form_body());

        let response_text = HttpUtils::execute_request(request, PROVIDER_NAME, url).await?;

        HttpUtils::parse_json(&response_text, PROVIDER_NAME)
    }
}

fn load_identity(certificate: &ClientCertificate) -> Result<Identity, ProviderError> {
    let cert_pem = read_pem(&certificate.cert_path)?;
    let key_pem = read_pem(&certificate.key_path)?;

    build_identity(&cert_pem, &key_pem).map_err(|e| ProviderError::TlsIdentity {
        provider: PROVIDER_NAME.to_string(),
        detail: format!(
            "Invalid client certificate/key ({}, {}): {e}",
            certificate.cert_path.display(),
            certificate.key_path.display()
        ),
    })
}

fn read_pem(path: &Path) -> Result<Vec<u8>, ProviderError> {
    std::fs::read(path).map_err(|e| ProviderError::TlsIdentity {
        provider: PROVIDER_NAME.to_string(),
        detail: format!("Failed to read {}: {e}", path.display()),
    })
}

#[cfg(feature = "native-tls")]
fn build_identity(cert_pem: &[u8], key_pem: &[u8]) -> Result<Identity, String> {
    // native-tls 只接受 PKCS#8
    let key_pem = to_pkcs8_pem(key_pem).map_err(|e| e.to_string())?;
    Identity::from_pkcs8_pem(cert_pem, &key_pem).map_err(|e| e.to_string())
}

#[cfg(all(feature = "rustls", not(feature = "native-tls")))]
fn build_identity(cert_pem: &[u8], key_pem: &[u8]) -> Result<Identity, String> {
    // rustls 需要 key 与证书链在同一个 PEM 中
    let mut pem = key_pem.to_vec();
    pem.push(b'\n');
    pem.extend_from_slice(cert_pem);
    Identity::from_pem(&pem).map_err(|e| e.to_string())
}
