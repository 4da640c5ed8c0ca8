//! AWS Route 53 HTTP client
//!
//! Implements [`Route53Api`] against the Route 53 REST API (`2013-04-01`),
//! signing every request with AWS Signature V4 and speaking XML.
//!
//! Required IAM Policy:
//! - route53:GetHostedZone
//! - route53:ListHostedZonesByName
//! - route53:ChangeResourceRecordSets

use async_trait::async_trait;
use futures::{Stream, StreamExt};
use reqwest::{Client, Method, Url};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::{Route53Api, ZoneStream};
use crate::config::{Route53Credentials, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
use crate::errors::ZoneError;
use crate::signing::{canonical_query_string, Signer, SigningRequest};
use crate::types::{ChangeBatch, ChangeInfo, GetHostedZoneRequest, HostedZoneInfo};

const API_VERSION_PATH: &str = "/2013-04-01";
const ROUTE53_XMLNS: &str = "https://route53.amazonaws.com/doc/2013-04-01/";
const SERVICE: &str = "route53";

/// Route 53 API client
#[derive(Clone)]
pub struct Route53Client {
    client: Client,
    credentials: Route53Credentials,
    endpoint: String,
    host: String,
}

/// Route 53 API response structures
#[derive(Debug, Deserialize)]
struct GetHostedZoneResponse {
    #[serde(rename = "HostedZone")]
    hosted_zone: HostedZoneInfo,
}

#[derive(Debug, Deserialize)]
struct ListHostedZonesByNameResponse {
    #[serde(rename = "HostedZones", default)]
    hosted_zones: Option<HostedZonesWrapper>,
    #[serde(rename = "IsTruncated", default)]
    is_truncated: bool,
    #[serde(rename = "NextDNSName", default)]
    next_dns_name: Option<String>,
    #[serde(rename = "NextHostedZoneId", default)]
    next_hosted_zone_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct HostedZonesWrapper {
    #[serde(rename = "HostedZone", default)]
    hosted_zone: Vec<HostedZoneInfo>,
}

#[derive(Debug, Deserialize)]
struct ChangeResourceRecordSetsResponse {
    #[serde(rename = "ChangeInfo")]
    change_info: ChangeInfo,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(rename = "Error")]
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(rename = "Code")]
    code: String,
    #[serde(rename = "Message", default)]
    message: String,
}

/// Change batch request for Route 53
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(Deserialize))]
#[serde(rename = "ChangeResourceRecordSetsRequest")]
struct ChangeResourceRecordSetsRequest {
    #[serde(rename = "@xmlns")]
    #[cfg_attr(test, serde(default))]
    xmlns: String,
    #[serde(rename = "ChangeBatch")]
    change_batch: XmlChangeBatch,
}

#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(Deserialize))]
struct XmlChangeBatch {
    #[serde(rename = "Comment", skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
    #[serde(rename = "Changes")]
    changes: XmlChanges,
}

#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(Deserialize))]
struct XmlChanges {
    #[serde(rename = "Change")]
    change: Vec<XmlChange>,
}

#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(Deserialize))]
struct XmlChange {
    #[serde(rename = "Action")]
    action: String,
    #[serde(rename = "ResourceRecordSet")]
    resource_record_set: XmlResourceRecordSet,
}

#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(Deserialize))]
struct XmlResourceRecordSet {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Type")]
    record_type: String,
    #[serde(rename = "TTL")]
    ttl: u32,
    #[serde(rename = "ResourceRecords")]
    resource_records: XmlResourceRecords,
}

#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(Deserialize))]
struct XmlResourceRecords {
    #[serde(rename = "ResourceRecord")]
    #[cfg_attr(test, serde(default))]
    resource_record: Vec<XmlResourceRecord>,
}

#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(Deserialize))]
struct XmlResourceRecord {
    #[serde(rename = "Value")]
    value: String,
}

impl Route53Client {
    /// Create a client for the public Route 53 endpoint
    pub fn new(credentials: Route53Credentials) -> Result<Self, ZoneError> {
        Self::with_endpoint(credentials, DEFAULT_ENDPOINT)
    }

    /// Create a client for a custom endpoint (emulators, tests)
    pub fn with_endpoint(
        credentials: Route53Credentials,
        endpoint: impl Into<String>,
    ) -> Result<Self, ZoneError> {
        credentials.validate()?;

        let endpoint = endpoint.into().trim_end_matches('/').to_string();
        let url = Url::parse(&endpoint).map_err(|e| {
            ZoneError::InvalidRequest(format!("Invalid endpoint {}: {}", endpoint, e))
        })?;
        let host = match (url.host_str(), url.port()) {
            (Some(host), Some(port)) => format!("{}:{}", host, port),
            (Some(host), None) => host.to_string(),
            (None, _) => {
                return Err(ZoneError::InvalidRequest(format!(
                    "Endpoint has no host: {}",
                    endpoint
                )))
            }
        };

        let client = Client::builder().timeout(DEFAULT_TIMEOUT).build()?;

        Ok(Self {
            client,
            credentials,
            endpoint,
            host,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Make a signed request to the Route 53 API and return the response body
    async fn api_request(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<String>,
    ) -> Result<String, ZoneError> {
        let query_string = canonical_query_string(query);
        let url = if query_string.is_empty() {
            format!("{}{}", self.endpoint, path)
        } else {
            format!("{}{}?{}", self.endpoint, path, query_string)
        };

        let signer = Signer {
            credentials: &self.credentials,
            region: self.credentials.region(),
            service: SERVICE,
        };
        let signed_headers = signer.sign(
            &SigningRequest {
                method: method.as_str(),
                host: &self.host,
                path,
                query,
                payload: body.as_deref().unwrap_or(""),
            },
            chrono::Utc::now(),
        );

        let mut request = self.client.request(method.clone(), &url);
        for (name, value) in signed_headers {
            request = request.header(name, value);
        }
        if let Some(body) = body {
            request = request.header("Content-Type", "application/xml").body(body);
        }

        debug!("Route53 API request: {} {}", method, path);

        let response = request.send().await?;
        let status = response.status();
        let response_body = response.text().await?;

        if !status.is_success() {
            return Err(parse_error(status.as_u16(), &response_body));
        }

        Ok(response_body)
    }
}

#[async_trait]
impl Route53Api for Route53Client {
    async fn get_hosted_zone(
        &self,
        request: GetHostedZoneRequest,
    ) -> Result<HostedZoneInfo, ZoneError> {
        let path = format!(
            "{}/hostedzone/{}",
            API_VERSION_PATH,
            zone_path_id(&request.id)?
        );
        let query: Vec<(String, String)> = request.extra_params.into_iter().collect();

        let response = self.api_request(Method::GET, &path, &query, None).await?;
        let parsed: GetHostedZoneResponse = from_xml(&response)?;

        Ok(parsed.hosted_zone)
    }

    fn list_hosted_zones_by_name(&self, dns_name: &str) -> ZoneStream {
        zone_pages(self.clone(), dns_name.to_string()).boxed()
    }

    async fn change_resource_record_sets(
        &self,
        zone_id: &str,
        batch: ChangeBatch,
    ) -> Result<ChangeInfo, ZoneError> {
        let path = format!(
            "{}/hostedzone/{}/rrset",
            API_VERSION_PATH,
            zone_path_id(zone_id)?
        );
        let body = render_change_batch(batch)?;

        let response = self.api_request(Method::POST, &path, &[], Some(body)).await?;
        let parsed: ChangeResourceRecordSetsResponse = from_xml(&response)?;

        Ok(parsed.change_info)
    }
}

/// Walk `ListHostedZonesByName` pages lazily, one request per exhausted page
fn zone_pages(
    client: Route53Client,
    start: String,
) -> impl Stream<Item = Result<HostedZoneInfo, ZoneError>> + Send {
    async_stream::try_stream! {
        let path = format!("{}/hostedzonesbyname", API_VERSION_PATH);
        let mut next_name = start;
        let mut next_zone_id: Option<String> = None;

        loop {
            let mut query = vec![("dnsname".to_string(), next_name.clone())];
            if let Some(zone_id) = &next_zone_id {
                query.push(("hostedzoneid".to_string(), zone_id.clone()));
            }

            debug!("Fetching hosted zones by name starting at {}", next_name);
            let response = client.api_request(Method::GET, &path, &query, None).await?;
            let page: ListHostedZonesByNameResponse = from_xml(&response)?;

            for zone in page.hosted_zones.unwrap_or_default().hosted_zone {
                yield zone;
            }

            match (page.is_truncated, page.next_dns_name) {
                (true, Some(name)) => {
                    next_name = name;
                    next_zone_id = page.next_hosted_zone_id;
                }
                _ => break,
            }
        }
    }
}

/// Route 53 returns ids as `/hostedzone/Z123`; paths only take `Z123`
fn zone_path_id(id: &str) -> Result<&str, ZoneError> {
    let id = id.trim_start_matches("/hostedzone/");
    if id.is_empty() || id.contains('/') {
        return Err(ZoneError::InvalidRequest(format!("Invalid hosted zone id: {}", id)));
    }
    Ok(id)
}

fn render_change_batch(batch: ChangeBatch) -> Result<String, ZoneError> {
    let request = ChangeResourceRecordSetsRequest {
        xmlns: ROUTE53_XMLNS.to_string(),
        change_batch: XmlChangeBatch {
            comment: batch.comment,
            changes: XmlChanges {
                change: batch
                    .changes
                    .into_iter()
                    .map(|change| XmlChange {
                        action: change.action.to_string(),
                        resource_record_set: XmlResourceRecordSet {
                            name: change.record_set.name,
                            record_type: change.record_set.record_type.to_string(),
                            ttl: change.record_set.ttl,
                            resource_records: XmlResourceRecords {
                                resource_record: change
                                    .record_set
                                    .values
                                    .into_iter()
                                    .map(|value| XmlResourceRecord { value })
                                    .collect(),
                            },
                        },
                    })
                    .collect(),
            },
        },
    };

    quick_xml::se::to_string(&request)
        .map_err(|e| ZoneError::Xml(format!("Failed to serialize request: {}", e)))
}

fn from_xml<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, ZoneError> {
    quick_xml::de::from_str(body)
        .map_err(|e| ZoneError::Xml(format!("Failed to parse response: {}", e)))
}

fn parse_error(status: u16, body: &str) -> ZoneError {
    match quick_xml::de::from_str::<ErrorResponse>(body) {
        Ok(parsed) => ZoneError::Api {
            status,
            code: parsed.error.code,
            message: parsed.error.message,
        },
        Err(_) => ZoneError::Api {
            status,
            code: reqwest::StatusCode::from_u16(status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .unwrap_or("Unknown")
                .to_string(),
            message: body.to_string(),
        },
    }
}
