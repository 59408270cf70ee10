//! Resource models and their services.
//!
//! - [`Blog`] / [`BlogService`]
//! - [`ApplicationCharge`] / [`ApplicationChargeService`]
//! - [`Metafield`], sent alongside blog creates and updates

mod application_charge;
mod blog;
mod metafield;

pub use application_charge::{
    ApplicationCharge, ApplicationChargeListParams, ApplicationChargeService, ChargeStatus,
};
pub use blog::{Blog, BlogCommentable, BlogListParams, BlogService};
pub use metafield::Metafield;
