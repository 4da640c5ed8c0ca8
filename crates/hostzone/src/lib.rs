//! Hosted zone facade for AWS Route 53
//!
//! This crate resolves a Route 53 hosted zone and upserts A, AAAA, CNAME and
//! TXT records on it.
//!
//! # Usage
//!
//! ```ignore
//! use hostzone::{HostedZone, Route53Client, Route53Credentials};
//! use std::sync::Arc;
//!
//! let client = Route53Client::new(Route53Credentials::from_env()?)?;
//! let zone = HostedZone::find_by_name(Arc::new(client), "example.com")
//!     .await?
//!     .expect("listing is empty");
//!
//! // UPSERT www.example.com. A 192.0.2.1
//! zone.a("www", 300, ["192.0.2.1"]).await?;
//! // TXT values are quoted for you
//! zone.txt("_acme-challenge", 60, ["token"]).await?;
//! ```
//!
//! # Lookup by name
//!
//! `HostedZone::find_by_name` only looks at the first zone Route 53 returns for
//! the name. If that zone's name differs, the lookup fails with
//! `ZoneError::ZoneNotFound` without searching further; an empty listing
//! returns `Ok(None)`.

pub mod api;
pub mod client;
pub mod config;
pub mod errors;
mod resolver;
pub mod resource;
mod signing;
pub mod types;
pub mod zone;

// Re-export main types
pub use api::{Route53Api, ZoneStream};
pub use client::Route53Client;
pub use config::Route53Credentials;
pub use errors::ZoneError;
pub use resource::ResourceIdentity;
pub use types::{
    Change, ChangeAction, ChangeBatch, ChangeInfo, GetHostedZoneRequest, HostedZoneConfig,
    HostedZoneInfo, RecordType, ResourceRecordSet,
};
pub use zone::HostedZone;
