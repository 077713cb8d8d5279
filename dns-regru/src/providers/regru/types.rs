//! Reg.ru zone API type definition

use serde::{Deserialize, Serialize};

// ============ Operation-specific fields ============

/// Fields of `zone/add_txt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddTxtFields {
    pub text: String,
}

/// Fields of `zone/remove_record`; record name and content must both match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveRecordFields {
    pub record_type: String,
    pub content: String,
}

// ============ input_data envelope ============

/// Zone reference inside `domains`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainRef {
    pub dname: String,
}

/// The JSON document carried in the `input_data` form field.
///
/// Operation fields come first, followed by the fields shared by every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputData<T> {
    #[serde(flatten)]
    pub fields: T,
    pub subdomain: String,
    pub domains: Vec<DomainRef>,
    pub output_content_type: String,
    pub username: String,
    pub password: String,
}
