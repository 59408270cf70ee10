//! Generic list/count/get/create/update/delete service.

use std::fmt;
use std::marker::PhantomData;

use serde::Deserialize;

use crate::clients::{ApiError, RestClient};
use crate::config::ShopifyConfig;
use crate::rest::resources::Metafield;
use crate::rest::{
    get_action_path, get_path, serialize_to_query, shape_body, ResourceOperation, ResourcePath,
    RestResource,
};

/// Count responses arrive either bare (`5`) or wrapped (`{"count": 5}`).
#[derive(Deserialize)]
#[serde(untagged)]
enum CountBody {
    Bare(u64),
    Wrapped { count: u64 },
}

impl CountBody {
    const fn value(&self) -> u64 {
        match self {
            Self::Bare(count) | Self::Wrapped { count } => *count,
        }
    }
}

/// Operations shared by every REST resource, driven by the resource's
/// [`RestResource`] declaration.
///
/// An operation the resource does not list in its `PATHS` fails with
/// [`ApiError::Validation`] before any I/O.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_rest::rest::ResourceService;
/// use shopify_rest::rest::resources::Blog;
///
/// let blogs: ResourceService<Blog> = ResourceService::new(&config)?;
/// let blog = blogs.get(241253187, Some("id,title")).await?;
/// ```
pub struct ResourceService<R: RestResource> {
    client: RestClient,
    _resource: PhantomData<fn() -> R>,
}

impl<R: RestResource> Clone for ResourceService<R> {
    fn clone(&self) -> Self {
        Self::with_client(self.client.clone())
    }
}

impl<R: RestResource> fmt::Debug for ResourceService<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceService")
            .field("resource", &R::NAME)
            .field("client", &self.client)
            .finish()
    }
}

impl<R: RestResource> ResourceService<R> {
    /// Creates a service with its own [`RestClient`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] if the HTTP client cannot be created.
    pub fn new(config: &ShopifyConfig) -> Result<Self, ApiError> {
        Ok(Self::with_client(RestClient::new(config)?))
    }

    /// Creates a service sharing an existing client.
    #[must_use]
    pub const fn with_client(client: RestClient) -> Self {
        Self {
            client,
            _resource: PhantomData,
        }
    }

    /// Returns the underlying client.
    #[must_use]
    pub const fn client(&self) -> &RestClient {
        &self.client
    }

    fn path(operation: ResourceOperation) -> Result<&'static ResourcePath, ApiError> {
        get_path(R::PATHS, operation).ok_or_else(|| ApiError::Validation {
            resource: R::NAME,
            reason: format!("{operation} is not supported"),
        })
    }

    fn render(path: &ResourcePath, id: Option<u64>) -> Result<String, ApiError> {
        if path.operation.requires_id() && id.is_none() {
            return Err(ApiError::Validation {
                resource: R::NAME,
                reason: format!("{} requires an id", path.operation),
            });
        }
        Ok(path.render(id))
    }

    /// Lists records. Unset parameters are not sent.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the response cannot be
    /// decoded.
    pub async fn list(&self, params: &R::ListParams) -> Result<Vec<R>, ApiError> {
        let path = Self::path(ResourceOperation::List)?;
        let query = serialize_to_query(params)?;
        let request = self
            .client
            .request(path.http_method, &Self::render(path, None)?, Some(R::PLURAL))?
            .query(query)
            .build();
        self.client.execute_list(request).await
    }

    /// Counts records.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the body is not a count.
    pub async fn count(&self, params: &R::CountParams) -> Result<u64, ApiError> {
        let path = Self::path(ResourceOperation::Count)?;
        let query = serialize_to_query(params)?;
        let request = self
            .client
            .request(path.http_method, &Self::render(path, None)?, None)?
            .query(query)
            .build();
        let body: CountBody = self.client.execute(request).await?;
        Ok(body.value())
    }

    /// Fetches one record, optionally restricted to a comma-separated list of
    /// `fields`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if no record has this id.
    pub async fn get(&self, id: u64, fields: Option<&str>) -> Result<R, ApiError> {
        let path = Self::path(ResourceOperation::Get)?;
        let mut builder = self
            .client
            .request(path.http_method, &Self::render(path, Some(id))?, Some(R::KEY))?;
        if let Some(fields) = fields.filter(|f| !f.is_empty()) {
            builder = builder.query_param("fields", fields);
        }
        self.client.execute(builder.build()).await
    }

    /// Creates a record, with optional metafields, and returns the stored
    /// record.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the server rejects the record.
    pub async fn create(
        &self,
        resource: &R,
        metafields: Option<&[Metafield]>,
    ) -> Result<R, ApiError> {
        let path = Self::path(ResourceOperation::Create)?;
        let body = shape_body(resource, metafields)?;
        let request = self
            .client
            .request(path.http_method, &Self::render(path, None)?, Some(R::KEY))?
            .body(body)
            .build();
        self.client.execute(request).await
    }

    /// Sends the record's present fields, with optional metafields, to the
    /// record named by its id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] without any I/O if the record has
    /// no id, and [`ApiError`] if the server rejects the update.
    pub async fn update(
        &self,
        resource: &R,
        metafields: Option<&[Metafield]>,
    ) -> Result<R, ApiError> {
        let id = resource.get_id().ok_or_else(|| ApiError::Validation {
            resource: R::NAME,
            reason: "cannot update a record without an id".to_string(),
        })?;
        let path = Self::path(ResourceOperation::Update)?;
        let body = shape_body(resource, metafields)?;
        let request = self
            .client
            .request(path.http_method, &Self::render(path, Some(id))?, Some(R::KEY))?
            .body(body)
            .build();
        self.client.execute(request).await
    }

    /// Deletes a record.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if no record has this id.
    pub async fn delete(&self, id: u64) -> Result<(), ApiError> {
        let path = Self::path(ResourceOperation::Delete)?;
        let request = self
            .client
            .request(path.http_method, &Self::render(path, Some(id))?, None)?
            .build();
        self.client.execute_unit(request).await
    }

    /// Triggers a lifecycle action declared in the resource's `PATHS` as
    /// [`ResourceOperation::Action`], e.g. `POST {plural}/{id}/activate.json`.
    /// No body is sent.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] without any I/O if the resource does
    /// not declare `action`, and [`ApiError`] if the server rejects it.
    pub async fn perform(&self, id: u64, action: &str) -> Result<(), ApiError> {
        let path = get_action_path(R::PATHS, action).ok_or_else(|| ApiError::Validation {
            resource: R::NAME,
            reason: format!("action '{action}' is not supported"),
        })?;
        let request = self
            .client
            .request(path.http_method, &Self::render(path, Some(id))?, None)?
            .build();
        self.client.execute_unit(request).await
    }
}

// Verify services are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceService<crate::rest::resources::Blog>>();
};
