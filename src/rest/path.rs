//! URL templates for resource operations.
//!
//! Each resource declares a `PATHS` table mapping an operation to an HTTP
//! method and a template relative to `/admin/api/{version}/`. Templates use a
//! single `{id}` placeholder. Lifecycle endpoints such as
//! `application_charges/{id}/activate` are declared as
//! [`ResourceOperation::Action`] rows.
//!
//! # Example
//!
//! ```rust
//! use shopify_rest::clients::HttpMethod;
//! use shopify_rest::rest::{get_path, ResourceOperation, ResourcePath};
//!
//! const PATHS: &[ResourcePath] = &[
//!     ResourcePath::new(HttpMethod::Get, ResourceOperation::List, "blogs"),
//!     ResourcePath::new(HttpMethod::Get, ResourceOperation::Get, "blogs/{id}"),
//! ];
//!
//! let path = get_path(PATHS, ResourceOperation::Get).unwrap();
//! assert_eq!(path.render(Some(42)), "blogs/42");
//! assert!(get_path(PATHS, ResourceOperation::Delete).is_none());
//! ```

use std::fmt;

use crate::clients::HttpMethod;

/// Operations a resource service can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// GET the collection.
    List,
    /// GET `{collection}/count`.
    Count,
    /// GET a single record.
    Get,
    /// POST a new record.
    Create,
    /// PUT changes to a record.
    Update,
    /// DELETE a record.
    Delete,
    /// A named lifecycle action on a record, e.g. `activate`.
    Action(&'static str),
}

impl ResourceOperation {
    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Count => "count",
            Self::Get => "get",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Action(name) => *name,
        }
    }

    /// Returns `true` if the template of this operation needs an id.
    #[must_use]
    pub const fn requires_id(&self) -> bool {
        matches!(
            self,
            Self::Get | Self::Update | Self::Delete | Self::Action(_)
        )
    }
}

impl fmt::Display for ResourceOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of a resource's path table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// The HTTP method for this path.
    pub http_method: HttpMethod,
    /// The operation this path is used for.
    pub operation: ResourceOperation,
    /// The URL template, e.g. `blogs/{id}`.
    pub template: &'static str,
}

impl ResourcePath {
    /// Creates a new `ResourcePath`. Usable in `const` tables.
    #[must_use]
    pub const fn new(
        http_method: HttpMethod,
        operation: ResourceOperation,
        template: &'static str,
    ) -> Self {
        Self {
            http_method,
            operation,
            template,
        }
    }

    /// Substitutes `id` into the template. Without an id the template is
    /// returned as is.
    #[must_use]
    pub fn render(&self, id: Option<u64>) -> String {
        id.map_or_else(
            || self.template.to_string(),
            |id| self.template.replace("{id}", &id.to_string()),
        )
    }
}

/// Returns the row for `operation`, if the resource supports it.
#[must_use]
pub fn get_path(paths: &[ResourcePath], operation: ResourceOperation) -> Option<&ResourcePath> {
    paths.iter().find(|path| path.operation == operation)
}

/// Returns the row declaring the lifecycle action `name`, if any.
#[must_use]
pub fn get_action_path<'a>(paths: &'a [ResourcePath], name: &str) -> Option<&'a ResourcePath> {
    paths
        .iter()
        .find(|path| matches!(path.operation, ResourceOperation::Action(action) if action == name))
}
