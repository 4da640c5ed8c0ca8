//! Hosted zone and record change types
//!
//! These mirror the Route53 `2013-04-01` data model closely enough that zone
//! data returned by the provider can be carried through without loss.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::errors::ZoneError;

/// Zone data as returned by the provider
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostedZoneInfo {
    #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Fully-qualified zone name, including the trailing dot
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(
        rename = "CallerReference",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub caller_reference: Option<String>,

    #[serde(rename = "Config", default, skip_serializing_if = "Option::is_none")]
    pub config: Option<HostedZoneConfig>,

    #[serde(
        rename = "ResourceRecordSetCount",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub resource_record_set_count: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostedZoneConfig {
    #[serde(rename = "Comment", default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    #[serde(rename = "PrivateZone", default)]
    pub private_zone: bool,
}

/// Parameters for fetching a single zone
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetHostedZoneRequest {
    pub id: String,
    /// Additional provider-specific query parameters sent alongside the id
    pub extra_params: BTreeMap<String, String>,
}

impl GetHostedZoneRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            extra_params: BTreeMap::new(),
        }
    }
}

/// DNS record types accepted by record changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[allow(clippy::upper_case_acronyms)]
pub enum RecordType {
    A,
    AAAA,
    CNAME,
    TXT,
    MX,
    NS,
    SRV,
    CAA,
    PTR,
    SPF,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::CNAME => "CNAME",
            RecordType::TXT => "TXT",
            RecordType::MX => "MX",
            RecordType::NS => "NS",
            RecordType::SRV => "SRV",
            RecordType::CAA => "CAA",
            RecordType::PTR => "PTR",
            RecordType::SPF => "SPF",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = ZoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "A" => Ok(RecordType::A),
            "AAAA" => Ok(RecordType::AAAA),
            "CNAME" => Ok(RecordType::CNAME),
            "TXT" => Ok(RecordType::TXT),
            "MX" => Ok(RecordType::MX),
            "NS" => Ok(RecordType::NS),
            "SRV" => Ok(RecordType::SRV),
            "CAA" => Ok(RecordType::CAA),
            "PTR" => Ok(RecordType::PTR),
            "SPF" => Ok(RecordType::SPF),
            _ => Err(ZoneError::InvalidRequest(format!(
                "Unsupported record type: {}",
                s
            ))),
        }
    }
}

/// Action applied to a resource record set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeAction {
    Create,
    Delete,
    Upsert,
}

impl ChangeAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeAction::Create => "CREATE",
            ChangeAction::Delete => "DELETE",
            ChangeAction::Upsert => "UPSERT",
        }
    }
}

impl fmt::Display for ChangeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecordSet {
    pub name: String,
    pub record_type: RecordType,
    pub ttl: u32,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub action: ChangeAction,
    pub record_set: ResourceRecordSet,
}

/// A list of record set mutations applied atomically by the provider
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeBatch {
    pub comment: Option<String>,
    pub changes: Vec<Change>,
}

/// Provider confirmation of a submitted change batch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeInfo {
    #[serde(rename = "Id")]
    pub id: String,

    /// `PENDING` until the change has propagated, then `INSYNC`
    #[serde(rename = "Status")]
    pub status: String,

    #[serde(rename = "SubmittedAt", default)]
    pub submitted_at: String,

    #[serde(rename = "Comment", default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_type_wire_tokens() {
        assert_eq!(RecordType::A.to_string(), "A");
        assert_eq!(RecordType::AAAA.to_string(), "AAAA");
        assert_eq!(RecordType::CNAME.as_str(), "CNAME");
        assert_eq!(RecordType::TXT.as_str(), "TXT");
    }

    #[test]
    fn test_record_type_parse_is_case_insensitive() {
        assert_eq!("aaaa".parse::<RecordType>().unwrap(), RecordType::AAAA);
        assert_eq!("Txt".parse::<RecordType>().unwrap(), RecordType::TXT);
        assert!(matches!(
            "ALIAS".parse::<RecordType>(),
            Err(ZoneError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_change_action_tokens() {
        assert_eq!(ChangeAction::Upsert.to_string(), "UPSERT");
        assert_eq!(ChangeAction::Create.to_string(), "CREATE");
        assert_eq!(ChangeAction::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_get_request_defaults_to_no_extra_params() {
        let request = GetHostedZoneRequest::new("Z1");
        assert_eq!(request.id, "Z1");
        assert!(request.extra_params.is_empty());
    }
}
