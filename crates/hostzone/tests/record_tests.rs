mod common;

use common::{zone, FakeRoute53};
use hostzone::{ChangeAction, HostedZone, RecordType, ResourceRecordSet, ZoneError};
use std::sync::Arc;

fn identified() -> (Arc<FakeRoute53>, HostedZone) {
    let api = Arc::new(FakeRoute53::default());
    let hosted = HostedZone::new(api.clone(), zone(Some("/hostedzone/Z1"), "example.com."));
    (api, hosted)
}

fn only_record_set(api: &FakeRoute53) -> ResourceRecordSet {
    let submissions = api.submissions();
    assert_eq!(submissions.len(), 1);

    let (zone_id, batch) = &submissions[0];
    assert_eq!(zone_id, "/hostedzone/Z1");
    assert_eq!(batch.changes.len(), 1);
    assert_eq!(batch.changes[0].action, ChangeAction::Upsert);
    batch.changes[0].record_set.clone()
}

#[tokio::test]
async fn test_record_a() {
    let (api, hosted) = identified();

    let change = hosted
        .record(RecordType::A, "www", 300, ["1.2.3.4"])
        .await
        .unwrap();

    assert_eq!(change.id, "/change/C1");
    assert_eq!(
        only_record_set(&api),
        ResourceRecordSet {
            name: "www.example.com.".to_string(),
            record_type: RecordType::A,
            ttl: 300,
            values: vec!["1.2.3.4".to_string()],
        }
    );
}

#[tokio::test]
async fn test_typed_helpers_pass_values_through() {
    let (api, hosted) = identified();

    hosted.a("a", 60, ["192.0.2.1", "192.0.2.2"]).await.unwrap();
    hosted.aaaa("b", 120, ["2001:db8::1"]).await.unwrap();
    hosted.cname("c", 3600, ["target.example.net."]).await.unwrap();

    let submissions = api.submissions();
    assert_eq!(submissions.len(), 3);

    let sets: Vec<&ResourceRecordSet> = submissions
        .iter()
        .map(|(_, batch)| &batch.changes[0].record_set)
        .collect();

    assert_eq!(sets[0].record_type, RecordType::A);
    assert_eq!(sets[0].name, "a.example.com.");
    assert_eq!(sets[0].ttl, 60);
    assert_eq!(sets[0].values, vec!["192.0.2.1", "192.0.2.2"]);

    assert_eq!(sets[1].record_type, RecordType::AAAA);
    assert_eq!(sets[1].name, "b.example.com.");
    assert_eq!(sets[1].values, vec!["2001:db8::1"]);

    assert_eq!(sets[2].record_type, RecordType::CNAME);
    assert_eq!(sets[2].ttl, 3600);
    assert_eq!(sets[2].values, vec!["target.example.net."]);
}

#[tokio::test]
async fn test_txt_quotes_without_escaping() {
    let (api, hosted) = identified();

    hosted.txt("x", 60, ["hello", "wor\"ld"]).await.unwrap();

    let set = only_record_set(&api);
    assert_eq!(set.record_type, RecordType::TXT);
    assert_eq!(set.name, "x.example.com.");
    assert_eq!(set.values, vec!["\"hello\"", "\"wor\"ld\""]);
}

#[tokio::test]
async fn test_empty_values_are_submitted() {
    let (api, hosted) = identified();

    hosted.txt("empty", 300, Vec::<String>::new()).await.unwrap();

    let set = only_record_set(&api);
    assert!(set.values.is_empty());
}

#[tokio::test]
async fn test_each_call_is_its_own_batch() {
    let (api, hosted) = identified();

    hosted.a("www", 300, ["192.0.2.1"]).await.unwrap();
    hosted.a("www", 300, ["192.0.2.1"]).await.unwrap();

    let submissions = api.submissions();
    assert_eq!(submissions.len(), 2);
    assert!(submissions.iter().all(|(_, batch)| batch.changes.len() == 1));
}

#[tokio::test]
async fn test_other_record_types_via_record() {
    let (api, hosted) = identified();

    hosted
        .record(RecordType::MX, "mail", 300, ["10 mx.example.com."])
        .await
        .unwrap();

    let set = only_record_set(&api);
    assert_eq!(set.record_type, RecordType::MX);
    assert_eq!(set.values, vec!["10 mx.example.com."]);
}

#[tokio::test]
async fn test_unidentified_zone_fails_before_submission() {
    let api = Arc::new(FakeRoute53::default());
    let hosted = HostedZone::new(api.clone(), zone(None, "example.com."));

    let errors = vec![
        hosted.a("www", 300, ["192.0.2.1"]).await.unwrap_err(),
        hosted.aaaa("www", 300, ["2001:db8::1"]).await.unwrap_err(),
        hosted.cname("www", 300, ["example.net."]).await.unwrap_err(),
        hosted.txt("www", 300, ["hello"]).await.unwrap_err(),
        hosted
            .record(RecordType::A, "www", 300, ["192.0.2.1"])
            .await
            .unwrap_err(),
    ];

    for err in errors {
        assert!(matches!(err, ZoneError::UnidentifiedResource("HostedZone")));
    }
    assert!(api.submissions().is_empty());
}

#[tokio::test]
async fn test_empty_id_counts_as_unidentified() {
    let api = Arc::new(FakeRoute53::default());
    let hosted = HostedZone::new(api.clone(), zone(Some(""), "example.com."));

    assert!(!hosted.is_identified());
    assert!(hosted.a("www", 300, ["192.0.2.1"]).await.is_err());
    assert!(api.submissions().is_empty());
}
