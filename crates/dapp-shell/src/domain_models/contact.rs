//! Address-book contact

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A single address-book entry
///
/// Entries with `is_account` set describe the user's own accounts and are
/// not shown as contacts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Identity key. Missing addresses deserialize to the empty string.
    #[serde(default)]
    pub address: String,

    #[serde(default, deserialize_with = "deserialize_truthy")]
    pub is_account: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Remaining display fields, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Contact {
    #[cfg(test)]
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            is_account: false,
            name: None,
            extra: Map::new(),
        }
    }

    #[cfg(test)]
    pub fn account(address: impl Into<String>) -> Self {
        Self {
            is_account: true,
            ..Self::new(address)
        }
    }

    #[cfg(test)]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Name to show in lists, falling back to the address
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.address)
    }
}

/// Accept any JSON value for a flag, using JavaScript truthiness
fn deserialize_truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}
