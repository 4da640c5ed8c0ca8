//! Hosted zone handle and record changes
//!
//! Every record method builds one `UPSERT` change for one resource record set
//! and submits it on its own; nothing is batched across calls and existing
//! record state is never read first.

use std::sync::Arc;
use tracing::info;

use crate::api::Route53Api;
use crate::errors::ZoneError;
use crate::resource::ResourceIdentity;
use crate::types::{
    Change, ChangeAction, ChangeBatch, ChangeInfo, HostedZoneInfo, RecordType, ResourceRecordSet,
};

/// Handle on a single hosted zone
#[derive(Clone)]
pub struct HostedZone {
    api: Arc<dyn Route53Api>,
    identity: ResourceIdentity,
    info: HostedZoneInfo,
}

impl std::fmt::Debug for HostedZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostedZone")
            .field("identity", &self.identity)
            .field("info", &self.info)
            .finish()
    }
}

impl HostedZone {
    /// Wrap zone data. A zone built from data without an `Id` is unidentified
    /// and every record method on it fails.
    pub fn new(api: Arc<dyn Route53Api>, info: HostedZoneInfo) -> Self {
        let identity = ResourceIdentity::new("HostedZone", info.id.clone());
        Self { api, identity, info }
    }

    pub fn id(&self) -> Option<&str> {
        self.identity.id()
    }

    /// Zone name with its trailing dot
    pub fn name(&self) -> &str {
        &self.info.name
    }

    pub fn is_identified(&self) -> bool {
        self.identity.is_identified()
    }

    pub fn info(&self) -> &HostedZoneInfo {
        &self.info
    }

    pub async fn a<I, S>(&self, name: &str, ttl: u32, values: I) -> Result<ChangeInfo, ZoneError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.record(RecordType::A, name, ttl, values).await
    }

    pub async fn aaaa<I, S>(
        &self,
        name: &str,
        ttl: u32,
        values: I,
    ) -> Result<ChangeInfo, ZoneError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.record(RecordType::AAAA, name, ttl, values).await
    }

    pub async fn cname<I, S>(
        &self,
        name: &str,
        ttl: u32,
        values: I,
    ) -> Result<ChangeInfo, ZoneError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.record(RecordType::CNAME, name, ttl, values).await
    }

    /// Upsert a TXT record. Each value is wrapped in double quotes; quotes
    /// already inside a value are sent as-is.
    pub async fn txt<I, S>(&self, name: &str, ttl: u32, values: I) -> Result<ChangeInfo, ZoneError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let quoted: Vec<String> = values.into_iter().map(|v| quote_txt(v.into())).collect();
        self.record(RecordType::TXT, name, ttl, quoted).await
    }

    /// Upsert the record set `<name>.<zone name>` of the given type.
    ///
    /// `name` is relative to the zone and must not carry a trailing dot. An
    /// empty `values` list is submitted unchanged; rejecting it is up to the
    /// provider.
    pub async fn record<I, S>(
        &self,
        record_type: RecordType,
        name: &str,
        ttl: u32,
        values: I,
    ) -> Result<ChangeInfo, ZoneError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let record_set = ResourceRecordSet {
            name: qualify(name, &self.info.name),
            record_type,
            ttl,
            values: values.into_iter().map(Into::into).collect(),
        };

        let fqdn = record_set.name.clone();
        let change = self
            .change_resource_record_sets(vec![Change {
                action: ChangeAction::Upsert,
                record_set,
            }])
            .await?;

        info!(
            "Upserted {} record {} (change {}, {})",
            record_type, fqdn, change.id, change.status
        );

        Ok(change)
    }

    async fn change_resource_record_sets(
        &self,
        changes: Vec<Change>,
    ) -> Result<ChangeInfo, ZoneError> {
        let zone_id = self.identity.ensure_identified()?;

        self.api
            .change_resource_record_sets(
                zone_id,
                ChangeBatch {
                    comment: None,
                    changes,
                },
            )
            .await
    }
}

fn qualify(name: &str, zone_name: &str) -> String {
    format!("{}.{}", name, zone_name)
}

fn quote_txt(value: String) -> String {
    format!("\"{}\"", value)
}
