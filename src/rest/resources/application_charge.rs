//! One-time application charges.
//!
//! A charge is created by the app, approved by the merchant at
//! `confirmation_url`, and then activated by the app. Charges cannot be
//! updated or deleted.
//!
//! # API Endpoints
//!
//! - `GET /application_charges.json`
//! - `GET /application_charges/{id}.json`
//! - `POST /application_charges.json`
//! - `POST /application_charges/{id}/activate.json`

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{ApiError, HttpMethod, RestClient};
use crate::config::ShopifyConfig;
use crate::rest::{Field, ResourceOperation, ResourcePath, ResourceService, RestResource};

/// Lifecycle state of a charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargeStatus {
    /// Waiting for the merchant.
    Pending,
    /// Approved by the merchant, not yet activated.
    Accepted,
    /// Activated and billed.
    Active,
    /// Declined by the merchant.
    Declined,
    /// Not acted on in time.
    Expired,
    /// A status this crate does not know.
    #[serde(other)]
    Unknown,
}

/// A one-time application charge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationCharge {
    /// Read-only.
    #[serde(default, skip_serializing)]
    pub id: Option<u64>,

    /// Name shown to the merchant.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub name: Field<String>,

    /// Monetary amount as a decimal string, e.g. `"9.99"`.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub price: Field<String>,

    /// Test charges are never billed.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub test: Field<bool>,

    /// Where the merchant is sent after approving or declining.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub return_url: Field<String>,

    /// Read-only.
    #[serde(default, skip_serializing)]
    pub status: Option<ChargeStatus>,

    /// Read-only. Where the merchant approves the charge.
    #[serde(default, skip_serializing)]
    pub confirmation_url: Option<String>,

    /// Read-only.
    #[serde(default, skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// Read-only.
    #[serde(default, skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ApplicationCharge {
    /// `true` once the charge has been activated.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == Some(ChargeStatus::Active)
    }

    /// `true` if the merchant approved and the charge awaits activation.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.status == Some(ChargeStatus::Accepted)
    }
}

impl RestResource for ApplicationCharge {
    type ListParams = ApplicationChargeListParams;
    type CountParams = ();

    const NAME: &'static str = "ApplicationCharge";
    const KEY: &'static str = "application_charge";
    const PLURAL: &'static str = "application_charges";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::List, "application_charges"),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::Get, "application_charges/{id}"),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, "application_charges"),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Action("activate"),
            "application_charges/{id}/activate",
        ),
    ];

    fn get_id(&self) -> Option<u64> {
        self.id
    }
}

/// Filters for [`ApplicationChargeService::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ApplicationChargeListParams {
    /// Only charges with an id greater than this.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    /// Comma-separated list of fields to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

/// Application charge operations for one shop.
#[derive(Clone, Debug)]
pub struct ApplicationChargeService {
    inner: ResourceService<ApplicationCharge>,
}

impl ApplicationChargeService {
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

    /// Creates a charge. The returned record carries the `confirmation_url`
    /// to send the merchant to.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if Shopify rejects the charge.
    pub async fn create(&self, charge: &ApplicationCharge) -> Result<ApplicationCharge, ApiError> {
        self.inner.create(charge, None).await
    }

    /// Fetches one charge, optionally restricted to `fields`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if no charge has this id.
    pub async fn get(&self, id: u64, fields: Option<&str>) -> Result<ApplicationCharge, ApiError> {
        self.inner.get(id, fields).await
    }

    /// Lists charges.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn list(
        &self,
        params: &ApplicationChargeListParams,
    ) -> Result<Vec<ApplicationCharge>, ApiError> {
        self.inner.list(params).await
    }

    /// Activates a charge the merchant has accepted.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the charge is unknown or not yet accepted.
    pub async fn activate(&self, id: u64) -> Result<(), ApiError> {
        self.inner.perform(id, "activate").await
    }
}
