//! The [`RestResource`] trait: what a record type declares so that
//! [`ResourceService`](crate::rest::ResourceService) can serve it.
//!
//! # Example
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use shopify_rest::clients::HttpMethod;
//! use shopify_rest::rest::{Field, ResourceOperation, ResourcePath, RestResource};
//!
//! #[derive(Debug, Clone, Default, Serialize, Deserialize)]
//! pub struct Redirect {
//!     #[serde(default, skip_serializing)]
//!     pub id: Option<u64>,
//!     #[serde(default, skip_serializing_if = "Field::is_absent")]
//!     pub path: Field<String>,
//! }
//!
//! impl RestResource for Redirect {
//!     type ListParams = ();
//!     type CountParams = ();
//!
//!     const NAME: &'static str = "Redirect";
//!     const KEY: &'static str = "redirect";
//!     const PLURAL: &'static str = "redirects";
//!     const PATHS: &'static [ResourcePath] = &[
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::List, "redirects"),
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::Get, "redirects/{id}"),
//!     ];
//!
//!     fn get_id(&self) -> Option<u64> {
//!         self.id
//!     }
//! }
//! ```

use std::collections::HashMap;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::clients::ApiError;
use crate::rest::ResourcePath;

/// A record type served by the REST Admin API.
///
/// Resources must be serializable, deserializable, cloneable, and
/// thread-safe. Request bodies are produced by `Serialize`, so read-only
/// fields should be marked `skip_serializing` and writable fields should be
/// [`Field`](crate::rest::Field)s skipped when absent.
pub trait RestResource: Serialize + DeserializeOwned + Clone + Send + Sync + Sized {
    /// Query parameters for list operations. Use `()` if there are none.
    type ListParams: Serialize + Default + Send + Sync;

    /// Query parameters for count operations. Use `()` if there are none.
    type CountParams: Serialize + Default + Send + Sync;

    /// Human-readable name used in error messages, e.g. `"ApplicationCharge"`.
    const NAME: &'static str;

    /// Singular envelope key, e.g. `"application_charge"`.
    const KEY: &'static str;

    /// Collection envelope key, e.g. `"application_charges"`.
    const PLURAL: &'static str;

    /// Operations this resource supports and their URL templates.
    const PATHS: &'static [ResourcePath];

    /// Returns the record's id, `None` until it has been persisted.
    fn get_id(&self) -> Option<u64>;
}

/// Converts a parameter struct into query parameters.
///
/// `null` values and empty strings are skipped, arrays become
/// comma-separated lists and nested objects are sent as JSON text.
///
/// # Errors
///
/// Returns [`ApiError::Encode`] if `params` cannot be serialized.
pub fn serialize_to_query<T: Serialize>(params: &T) -> Result<HashMap<String, String>, ApiError> {
    let value = serde_json::to_value(params).map_err(|source| ApiError::Encode {
        context: "query parameters".to_string(),
        source,
    })?;

    let mut query = HashMap::new();

    if let Value::Object(map) = value {
        for (key, val) in map {
            match val {
                Value::Null => {}
                Value::String(s) => {
                    if !s.is_empty() {
                        query.insert(key, s);
                    }
                }
                Value::Number(n) => {
                    query.insert(key, n.to_string());
                }
                Value::Bool(b) => {
                    query.insert(key, b.to_string());
                }
                Value::Array(arr) => {
                    let values: Vec<String> = arr
                        .iter()
                        .filter_map(|v| match v {
                            Value::String(s) => Some(s.clone()),
                            Value::Number(n) => Some(n.to_string()),
                            _ => None,
                        })
                        .collect();
                    if !values.is_empty() {
                        query.insert(key, values.join(","));
                    }
                }
                Value::Object(_) => {
                    query.insert(key, val.to_string());
                }
            }
        }
    }

    Ok(query)
}
