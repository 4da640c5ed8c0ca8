//! Hosted zone lookup by id or by name

use futures::StreamExt;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info};

use crate::api::Route53Api;
use crate::errors::ZoneError;
use crate::types::GetHostedZoneRequest;
use crate::zone::HostedZone;

impl HostedZone {
    /// Fetch a zone by id.
    ///
    /// `extra_params` are sent alongside the id. The returned handle carries the
    /// id from the provider's response, which is not necessarily the string
    /// passed in (Route53 answers `Z123` with `/hostedzone/Z123`).
    pub async fn get(
        api: Arc<dyn Route53Api>,
        id: &str,
        extra_params: BTreeMap<String, String>,
    ) -> Result<HostedZone, ZoneError> {
        let info = api
            .get_hosted_zone(GetHostedZoneRequest {
                id: id.to_string(),
                extra_params,
            })
            .await?;

        info!("Resolved hosted zone {} by id {}", info.name, id);
        Ok(HostedZone::new(api, info))
    }

    /// Find a zone by its DNS name.
    ///
    /// Only the first zone of the by-name listing is inspected: it is returned
    /// when its name equals `name` (with a trailing dot appended if missing),
    /// otherwise this fails with `ZoneNotFound` even if a later zone would
    /// match. An empty listing yields `Ok(None)`.
    pub async fn find_by_name(
        api: Arc<dyn Route53Api>,
        name: &str,
    ) -> Result<Option<HostedZone>, ZoneError> {
        let dns_name = fully_qualified(name);
        let mut zones = api.list_hosted_zones_by_name(&dns_name);

        let Some(first) = zones.next().await else {
            debug!("Hosted zone listing for {} is empty", dns_name);
            return Ok(None);
        };
        let zone = first?;

        if zone.name != dns_name {
            return Err(ZoneError::ZoneNotFound(dns_name));
        }

        info!("Resolved hosted zone {} by name", dns_name);
        Ok(Some(HostedZone::new(api, zone)))
    }
}

fn fully_qualified(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{}.", name)
    }
}
