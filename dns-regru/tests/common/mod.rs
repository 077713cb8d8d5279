//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

use dns_regru::{Authenticator, Credentials, RegRuClient};

pub const USERNAME: &str = "test-user";
pub const PASSWORD: &str = "test-pass";
pub const API_PATH: &str = "/api/regru2";

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 生成唯一的 challenge 验证值
pub fn generate_validation() -> String {
    format!("_test-{}", uuid::Uuid::new_v4().simple())
}

/// 指向 mock server 的凭证
pub fn test_credentials() -> Credentials {
    Credentials::new("regru-test.ini", USERNAME, PASSWORD)
}

/// API base URL on the mock server.
pub fn api_base(server_uri: &str) -> String {
    format!("{server_uri}{API_PATH}")
}

/// 使用真实 `HttpTransport` 连接 mock server 的客户端
pub fn client_for(server_uri: &str) -> RegRuClient {
    match RegRuClient::builder(test_credentials())
        .base_url(api_base(server_uri))
        .build()
    {
        Ok(client) => client,
        Err(e) => panic!("client must build: {e}"),
    }
}

pub fn authenticator_for(server_uri: &str) -> Authenticator {
    let builder = RegRuClient::builder(test_credentials()).base_url(api_base(server_uri));
    match Authenticator::from_builder(builder) {
        Ok(authenticator) => authenticator,
        Err(e) => panic!("authenticator must build: {e}"),
    }
}

/// `tests/fixtures` 下的测试证书/私钥
pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// 解码 `application/x-www-form-urlencoded` 请求体
pub fn decode_form(body: &[u8]) -> HashMap<String, String> {
    let body = String::from_utf8_lossy(body);
    body.split('&')
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            let key = urlencoding::decode(key).ok()?.into_owned();
            let value = urlencoding::decode(value).ok()?.into_owned();
            Some((key, value))
        })
        .collect()
}

/// `input_data` of a form body, parsed as JSON.
pub fn decode_input_data(body: &[u8]) -> serde_json::Value {
    decode_form(body)
        .get("input_data")
        .and_then(|raw| serde_json::from_str(raw).ok())
        .unwrap_or(serde_json::Value::Null)
}

/// 从环境变量创建真实 API 的认证器
pub struct LiveContext {
    pub authenticator: Authenticator,
    pub domain: String,
}

impl LiveContext {
    pub fn from_env() -> Option<Self> {
        let username = env::var("REGRU_USERNAME").ok()?;
        let password = env::var("REGRU_PASSWORD").ok()?;
        let domain = env::var("TEST_DOMAIN").ok()?;

        let mut credentials = Credentials::new("environment", username, password);
        if let (Ok(cert), Ok(key)) = (env::var("REGRU_CERT"), env::var("REGRU_KEY")) {
            credentials = credentials.with_client_certificate(cert, key);
        }

        Some(Self {
            authenticator: Authenticator::new(credentials).ok()?,
            domain,
        })
    }

    pub fn validation_name(&self) -> String {
        format!("_acme-challenge.{}", self.domain)
    }
}
