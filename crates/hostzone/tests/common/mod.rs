//! In-memory Route53 double shared by the integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use futures::{stream, StreamExt};
use hostzone::{
    ChangeBatch, ChangeInfo, GetHostedZoneRequest, HostedZoneInfo, Route53Api, ZoneError,
    ZoneStream,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Default)]
pub struct FakeRoute53 {
    /// Returned by `get_hosted_zone`; `None` answers NoSuchHostedZone
    pub zone: Option<HostedZoneInfo>,
    /// Listing pages in provider order
    pub pages: Vec<Vec<HostedZoneInfo>>,
    pub pages_fetched: Arc<AtomicUsize>,
    pub get_requests: Mutex<Vec<GetHostedZoneRequest>>,
    pub listed_names: Mutex<Vec<String>>,
    pub submissions: Mutex<Vec<(String, ChangeBatch)>>,
}

impl FakeRoute53 {
    pub fn with_zone(zone: HostedZoneInfo) -> Self {
        Self {
            zone: Some(zone),
            ..Default::default()
        }
    }

    pub fn with_pages(pages: Vec<Vec<HostedZoneInfo>>) -> Self {
        Self {
            pages,
            ..Default::default()
        }
    }

    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched.load(Ordering::SeqCst)
    }

    pub fn submissions(&self) -> Vec<(String, ChangeBatch)> {
        self.submissions.lock().unwrap().clone()
    }
}

#[async_trait]
impl Route53Api for FakeRoute53 {
    async fn get_hosted_zone(
        &self,
        request: GetHostedZoneRequest,
    ) -> Result<HostedZoneInfo, ZoneError> {
        let id = request.id.clone();
        self.get_requests.lock().unwrap().push(request);

        self.zone.clone().ok_or_else(|| ZoneError::Api {
            status: 404,
            code: "NoSuchHostedZone".to_string(),
            message: format!("No hosted zone found with ID: {}", id),
        })
    }

    fn list_hosted_zones_by_name(&self, dns_name: &str) -> ZoneStream {
        self.listed_names.lock().unwrap().push(dns_name.to_string());

        let fetched = self.pages_fetched.clone();
        stream::iter(self.pages.clone())
            .map(move |page| {
                fetched.fetch_add(1, Ordering::SeqCst);
                stream::iter(page.into_iter().map(Ok))
            })
            .flatten()
            .boxed()
    }

    async fn change_resource_record_sets(
        &self,
        zone_id: &str,
        batch: ChangeBatch,
    ) -> Result<ChangeInfo, ZoneError> {
        let mut submissions = self.submissions.lock().unwrap();
        submissions.push((zone_id.to_string(), batch));

        Ok(ChangeInfo {
            id: format!("/change/C{}", submissions.len()),
            status: "PENDING".to_string(),
            submitted_at: "2024-01-01T00:00:00.000Z".to_string(),
            comment: None,
        })
    }
}

pub fn zone(id: Option<&str>, name: &str) -> HostedZoneInfo {
    HostedZoneInfo {
        id: id.map(str::to_string),
        name: name.to_string(),
        caller_reference: Some(format!("ref-{}", name)),
        ..Default::default()
    }
}
