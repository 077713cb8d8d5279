//! Utility modules.

/// Log sanitization utilities to prevent sensitive data exposure.
pub mod log_sanitizer;

/// PKCS#1 / SEC1 to PKCS#8 private key conversion for native-tls.
#[cfg(feature = "native-tls")]
pub mod key_format;
