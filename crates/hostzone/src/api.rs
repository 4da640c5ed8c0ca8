//! Route53 API trait
//!
//! The zone handle only ever talks to the provider through this trait, so the
//! HTTP transport in [`crate::client`] can be swapped for a test double.

use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::errors::ZoneError;
use crate::types::{ChangeBatch, ChangeInfo, GetHostedZoneRequest, HostedZoneInfo};

/// Lazily paginated sequence of zone summaries.
///
/// Each poll may trigger a page fetch. Dropping the stream leaves the remaining
/// pages unrequested.
pub type ZoneStream = BoxStream<'static, Result<HostedZoneInfo, ZoneError>>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Route53Api: Send + Sync {
    /// Fetch one zone by id
    async fn get_hosted_zone(
        &self,
        request: GetHostedZoneRequest,
    ) -> Result<HostedZoneInfo, ZoneError>;

    /// Zones in provider order, starting at `dns_name`
    fn list_hosted_zones_by_name(&self, dns_name: &str) -> ZoneStream;

    /// Apply a batch of record set mutations to a zone
    async fn change_resource_record_sets(
        &self,
        zone_id: &str,
        batch: ChangeBatch,
    ) -> Result<ChangeInfo, ZoneError>;
}
