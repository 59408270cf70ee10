//! Blogs: containers for a store's articles.
//!
//! # API Endpoints
//!
//! - `GET /blogs.json`
//! - `GET /blogs/count.json`
//! - `GET /blogs/{id}.json`
//! - `POST /blogs.json`
//! - `PUT /blogs/{id}.json`
//! - `DELETE /blogs/{id}.json`
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::resources::{Blog, BlogCommentable, BlogListParams, BlogService};
//!
//! let blogs = BlogService::new(&config)?;
//!
//! let created = blogs
//!     .create(
//!         &Blog {
//!             title: "News".to_string().into(),
//!             commentable: BlogCommentable::Moderate.into(),
//!             ..Blog::default()
//!         },
//!         None,
//!     )
//!     .await?;
//!
//! let recent = blogs
//!     .list(&BlogListParams { since_id: created.id, ..Default::default() })
//!     .await?;
//! println!("{} blogs, {} newer", blogs.count().await?, recent.len());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{ApiError, HttpMethod, RestClient};
use crate::config::ShopifyConfig;
use crate::rest::resources::Metafield;
use crate::rest::{Field, ResourceOperation, ResourcePath, ResourceService, RestResource};

/// Comment setting of a blog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlogCommentable {
    /// Comments are disabled.
    No,
    /// Comments appear after moderation.
    Moderate,
    /// Comments appear immediately.
    Yes,
}

/// A blog in a Shopify store.
///
/// `id` and the timestamps are assigned by Shopify and never sent. Writable
/// attributes are [`Field`]s: leave one [`Field::Absent`] to keep the stored
/// value, set it to [`Field::Null`] to clear it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    /// Read-only.
    #[serde(default, skip_serializing)]
    pub id: Option<u64>,

    /// The title of the blog.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub title: Field<String>,

    /// URL-friendly handle, generated from the title when not set.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub handle: Field<String>,

    /// Comment setting.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub commentable: Field<BlogCommentable>,

    /// Suffix of the Liquid template, e.g. `custom` for `blog.custom.liquid`.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub template_suffix: Field<String>,

    /// Feedburner URL the RSS feed is redirected through.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub feedburner: Field<String>,

    /// Feedburner location.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub feedburner_location: Field<String>,

    /// Comma-separated tags.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub tags: Field<String>,

    /// Read-only.
    #[serde(default, skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// Read-only.
    #[serde(default, skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,

    /// Read-only.
    #[serde(default, skip_serializing)]
    pub admin_graphql_api_id: Option<String>,
}

impl RestResource for Blog {
    type ListParams = BlogListParams;
    type CountParams = ();

    const NAME: &'static str = "Blog";
    const KEY: &'static str = "blog";
    const PLURAL: &'static str = "blogs";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::List, "blogs"),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::Count, "blogs/count"),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::Get, "blogs/{id}"),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, "blogs"),
        ResourcePath::new(HttpMethod::Put, ResourceOperation::Update, "blogs/{id}"),
        ResourcePath::new(HttpMethod::Delete, ResourceOperation::Delete, "blogs/{id}"),
    ];

    fn get_id(&self) -> Option<u64> {
        self.id
    }
}

/// Filters for [`BlogService::list`]. Unset filters are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BlogListParams {
    /// Only blogs with an id greater than this.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    /// Only the blog with this handle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    /// Comma-separated list of fields to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

/// Blog operations for one shop.
#[derive(Clone, Debug)]
pub struct BlogService {
    inner: ResourceService<Blog>,
}

impl BlogService {
    /// Creates a service with its own client.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] if the HTTP client cannot be created.
    pub fn new(config: &ShopifyConfig) -> Result<Self, ApiError> {
        Ok(Self {
            inner: ResourceService::new(config)?,
        })
    }

    /// Creates a service sharing an existing client.
    #[must_use]
    pub const fn with_client(client: RestClient) -> Self {
        Self {
            inner: ResourceService::with_client(client),
        }
    }

    /// Lists blogs.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn list(&self, params: &BlogListParams) -> Result<Vec<Blog>, ApiError> {
        self.inner.list(params).await
    }

    /// Counts the shop's blogs.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn count(&self) -> Result<u64, ApiError> {
        self.inner.count(&()).await
    }

    /// Fetches one blog.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if no blog has this id.
    pub async fn get(&self, id: u64) -> Result<Blog, ApiError> {
        self.inner.get(id, None).await
    }

    /// Creates a blog, optionally with metafields.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if Shopify rejects the blog.
    pub async fn create(
        &self,
        blog: &Blog,
        metafields: Option<&[Metafield]>,
    ) -> Result<Blog, ApiError> {
        self.inner.create(blog, metafields).await
    }

    /// Updates the blog named by `blog.id`, optionally adding metafields.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] if `blog.id` is `None`.
    pub async fn update(
        &self,
        blog: &Blog,
        metafields: Option<&[Metafield]>,
    ) -> Result<Blog, ApiError> {
        self.inner.update(blog, metafields).await
    }

    /// Deletes a blog.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if no blog has this id.
    pub async fn delete(&self, id: u64) -> Result<(), ApiError> {
        self.inner.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::{get_path, serialize_to_query};
    use serde_json::json;

    #[test]
    fn test_blog_deserializes_server_record() {
        let blog: Blog = serde_json::from_value(json!({
            "id": 241253187,
            "handle": "apple-blog",
            "title": "Mah Blog",
            "updated_at": "2024-01-02T09:28:43-05:00",
            "commentable": "no",
            "feedburner": null,
            "feedburner_location": null,
            "created_at": "2024-01-02T09:28:43-05:00",
            "template_suffix": null,
            "tags": "Announcing, Mystery",
            "admin_graphql_api_id": "gid://shopify/OnlineStoreBlog/241253187"
        }))
        .unwrap();

        assert_eq!(blog.id, Some(241_253_187));
        assert_eq!(blog.title.as_ref().map(String::as_str), Some("Mah Blog"));
        assert_eq!(blog.commentable, Field::Value(BlogCommentable::No));
        assert_eq!(blog.feedburner, Field::Null);
        assert_eq!(blog.tags.as_ref().map(String::as_str), Some("Announcing, Mystery"));
        assert!(blog.created_at.is_some());
    }

    #[test]
    fn test_read_only_fields_are_never_serialized() {
        let blog = Blog {
            id: Some(1),
            title: Field::Value("News".to_string()),
            created_at: Some(Utc::now()),
            updated_at: Some(Utc::now()),
            admin_graphql_api_id: Some("gid://shopify/OnlineStoreBlog/1".to_string()),
            ..Blog::default()
        };
        assert_eq!(serde_json::to_value(&blog).unwrap(), json!({"title": "News"}));
    }

    #[test]
    fn test_blog_paths() {
        let path = get_path(Blog::PATHS, ResourceOperation::Count).unwrap();
        assert_eq!(path.render(None), "blogs/count");

        let path = get_path(Blog::PATHS, ResourceOperation::Update).unwrap();
        assert_eq!(path.http_method, HttpMethod::Put);
        assert_eq!(path.render(Some(7)), "blogs/7");

        let path = get_path(Blog::PATHS, ResourceOperation::Delete).unwrap();
        assert_eq!(path.http_method, HttpMethod::Delete);
    }

    #[test]
    fn test_list_params_skip_unset() {
        assert!(serialize_to_query(&BlogListParams::default())
            .unwrap()
            .is_empty());

        let query = serialize_to_query(&BlogListParams {
            since_id: Some(5),
            handle: Some("news".to_string()),
            fields: Some("id,title".to_string()),
        })
        .unwrap();
        assert_eq!(query.len(), 3);
        assert_eq!(query["since_id"], "5");
        assert_eq!(query["handle"], "news");
        assert_eq!(query["fields"], "id,title");
    }

    #[test]
    fn test_commentable_wire_values() {
        assert_eq!(serde_json::to_value(BlogCommentable::Moderate).unwrap(), json!("moderate"));
        let yes: BlogCommentable = serde_json::from_value(json!("yes")).unwrap();
        assert_eq!(yes, BlogCommentable::Yes);
    }
}
