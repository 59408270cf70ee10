//! Request body shaping for create and update operations.

use serde_json::Value;

use crate::clients::ApiError;
use crate::rest::resources::Metafield;
use crate::rest::RestResource;

/// Builds the `{"<key>": {...}}` envelope for a mutation of `resource`.
///
/// Absent fields are omitted and explicit nulls are kept. When `metafields`
/// holds at least one entry it is inserted as `"metafields"` next to the
/// record's own attributes; `None` and an empty slice are equivalent.
///
/// # Errors
///
/// Returns [`ApiError::Encode`] if the record cannot be serialized, and
/// [`ApiError::Validation`] if it does not serialize to a JSON object.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use shopify_rest::rest::resources::{Blog, Metafield};
/// use shopify_rest::rest::shape_body;
///
/// let blog = Blog {
///     title: "News".to_string().into(),
///     ..Blog::default()
/// };
/// let metafields = [Metafield::new("global", "lang", json!("en"))];
///
/// let body = shape_body(&blog, Some(&metafields)).unwrap();
/// assert_eq!(body["blog"]["title"], "News");
/// assert_eq!(body["blog"]["metafields"][0]["key"], "lang");
/// ```
pub fn shape_body<R: RestResource>(
    resource: &R,
    metafields: Option<&[Metafield]>,
) -> Result<Value, ApiError> {
    let value = serde_json::to_value(resource).map_err(|source| ApiError::Encode {
        context: format!("{} request body", R::NAME),
        source,
    })?;

    let Value::Object(mut object) = value else {
        return Err(ApiError::Validation {
            resource: R::NAME,
            reason: "record does not serialize to a JSON object".to_string(),
        });
    };

    if let Some(metafields) = metafields.filter(|m| !m.is_empty()) {
        let metafields = serde_json::to_value(metafields).map_err(|source| ApiError::Encode {
            context: format!("{} metafields", R::NAME),
            source,
        })?;
        object.insert("metafields".to_string(), metafields);
    }

    let mut envelope = serde_json::Map::new();
    envelope.insert(R::KEY.to_string(), Value::Object(object));
    Ok(Value::Object(envelope))
}
