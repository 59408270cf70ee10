//! Metafields attached to a resource on create or update.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A namespaced key/value pair stored on another resource.
///
/// Only `namespace`, `key`, `value`, `type` and `description` are sent;
/// Shopify validates them. The remaining fields are filled in when a
/// metafield is echoed back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metafield {
    /// Read-only.
    #[serde(default, skip_serializing)]
    pub id: Option<u64>,

    /// Grouping namespace, e.g. `"inventory"`.
    pub namespace: String,

    /// Key within the namespace.
    pub key: String,

    /// A string or integer value.
    pub value: serde_json::Value,

    /// Shopify type name, e.g. `"single_line_text_field"`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub metafield_type: Option<String>,

    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Read-only.
    #[serde(default, skip_serializing)]
    pub owner_id: Option<u64>,

    /// Read-only.
    #[serde(default, skip_serializing)]
    pub owner_resource: Option<String>,

    /// Read-only.
    #[serde(default, skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// Read-only.
    #[serde(default, skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Metafield {
    /// Creates an untyped metafield.
    #[must_use]
    pub fn new(
        namespace: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        Self {
            id: None,
            namespace: namespace.into(),
            key: key.into(),
            value: value.into(),
            metafield_type: None,
            description: None,
            owner_id: None,
            owner_resource: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Creates a metafield with an explicit Shopify type.
    #[must_use]
    pub fn with_type(
        namespace: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
        metafield_type: impl Into<String>,
    ) -> Self {
        Self {
            metafield_type: Some(metafield_type.into()),
            ..Self::new(namespace, key, value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_only_writable_fields() {
        let mut metafield = Metafield::new("global", "lang", "en");
        metafield.description = Some("Primary language".to_string());
        metafield.id = Some(99);

        assert_eq!(
            serde_json::to_value(&metafield).unwrap(),
            json!({
                "namespace": "global",
                "key": "lang",
                "value": "en",
                "description": "Primary language"
            })
        );
    }

    #[test]
    fn test_type_is_renamed_on_the_wire() {
        let metafield = Metafield::with_type("inventory", "warehouse", 25, "number_integer");
        let value = serde_json::to_value(&metafield).unwrap();
        assert_eq!(value["type"], "number_integer");
        assert_eq!(value["value"], 25);
    }

    #[test]
    fn test_deserializes_echoed_metafield() {
        let metafield: Metafield = serde_json::from_value(json!({
            "id": 721389482,
            "namespace": "affiliates",
            "key": "app_key",
            "value": "app_key",
            "type": "single_line_text_field",
            "description": null,
            "owner_id": 690933842,
            "owner_resource": "shop",
            "created_at": "2024-01-02T09:28:43-05:00",
            "updated_at": "2024-01-02T09:28:43-05:00"
        }))
        .unwrap();

        assert_eq!(metafield.id, Some(721_389_482));
        assert_eq!(metafield.metafield_type.as_deref(), Some("single_line_text_field"));
        assert_eq!(metafield.owner_resource.as_deref(), Some("shop"));
        assert!(metafield.description.is_none());
    }
}
