//! Provider 公共工具函数

use std::time::Duration;

use reqwest::{Client, Identity};

use crate::error::ProviderError;

// ============ HTTP Client ============

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// HTTP timeouts. `None` leaves the reqwest default (no timeout).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    /// Connection establishment timeout.
    pub connect: Option<Duration>,
    /// Whole-request timeout.
    pub request: Option<Duration>,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            connect: Some(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS)),
            request: Some(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)),
        }
    }
}

/// 创建带超时配置的 HTTP Client，可选附带客户端证书（mTLS）
pub fn create_http_client(
    provider: &str,
    timeouts: &Timeouts,
    identity: Option<Identity>,
) -> Result<Client, ProviderError> {
    let mut builder = Client::builder();
    if let Some(connect) = timeouts.connect {
        builder = builder.connect_timeout(connect);
    }
    if let Some(request) = timeouts.request {
        builder = builder.timeout(request);
    }
    if let Some(identity) = identity {
        builder = builder.identity(identity);
    }

    builder.build().map_err(|e| ProviderError::NetworkError {
        provider: provider.to_string(),
        detail: format!("Failed to create HTTP client: {e}"),
    })
}

// ============ 域名名称处理 ============

/// Number of trailing labels forming the zone in the Reg.ru API schema.
pub const ZONE_LABELS: usize = 2;

/// 去掉域名末尾的一个点
pub fn normalize_domain_name(name: &str) -> String {
    name.strip_suffix('.').unwrap_or(name).to_string()
}

/// 将完整域名拆分为 (subdomain, zone)
/// 如: "_acme-challenge.example.com" -> ("_acme-challenge", "example.com")
/// 如: "example.com" -> ("", "example.com")
pub fn split_record_name(full_name: &str) -> (String, String) {
    let name = normalize_domain_name(full_name);
    let labels: Vec<&str> = name.split('.').collect();
    let cut = labels.len().saturating_sub(ZONE_LABELS);

    (labels[..cut].join("."), labels[cut..].join("."))
}
