//! Typed REST resources and the services that operate on them.
//!
//! - [`RestResource`]: what a record type declares (name, envelope keys,
//!   path table, parameter types)
//! - [`ResourceService`]: list/count/get/create/update/delete/perform for any
//!   [`RestResource`]
//! - [`Field`]: three-state writable attribute (absent, null, value)
//! - [`shape_body`]: builds the request envelope, metafields included
//! - [`resources`]: concrete resources and their services
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::resources::{Blog, BlogService, Metafield};
//! use shopify_rest::rest::Field;
//! use serde_json::json;
//!
//! let blogs = BlogService::new(&config)?;
//! let mut blog = blogs.get(241253187).await?;
//!
//! blog.title = Field::Value("Renamed".to_string());
//! blog.template_suffix = Field::Null; // cleared on the server
//!
//! let metafields = [Metafield::new("seo", "hidden", json!(1))];
//! let saved = blogs.update(&blog, Some(&metafields)).await?;
//! ```

mod body;
mod field;
mod path;
mod resource;
pub mod resources;
mod service;

pub use body::shape_body;
pub use field::Field;
pub use path::{get_action_path, get_path, ResourceOperation, ResourcePath};
pub use resource::{serialize_to_query, RestResource};
pub use service::ResourceService;
