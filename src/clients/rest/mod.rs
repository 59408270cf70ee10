//! REST Admin API request pipeline.
//!
//! [`RestClient`] turns a path, verb and optional root property into a
//! prepared request, sends it, and unwraps the named envelope property from
//! the response. Resource services in [`crate::rest`] are thin layers over
//! it.
//!
//! # Deprecation Notice
//!
//! Shopify recommends the GraphQL Admin API for new development. A warning is
//! logged whenever a [`RestClient`] is constructed. See
//! <https://www.shopify.com/ca/partners/blog/all-in-on-graphql>.

mod client;

pub use client::RestClient;
