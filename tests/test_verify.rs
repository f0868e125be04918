// s3-crr: Cross-Region Replication for Amazon S3 Compatible Cloud Storage
// Copyright 2025 MinIO, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

mod common;

use common::{FakeStorage, spacing};
use crr::replication::{
    BucketEndpoint, PROBE_PAYLOAD, PollPolicy, ProvisionError, ReplicationVerifier,
    VerifyOptions, desired_rule,
};
use crr::s3::error_response::S3ErrorCode;
use crr::s3::types::ReplicationConfig;
use std::time::Duration;
use tokio::time::Instant;

fn replicating_to(buckets: &[&str]) -> ReplicationConfig {
    ReplicationConfig {
        role: Some("arn:aws:iam::123456789012:role/role-x".into()),
        rules: buckets
            .iter()
            .enumerate()
            .map(|(i, b)| desired_rule(b, i as i32 + 1))
            .collect(),
    }
}

fn source() -> BucketEndpoint {
    BucketEndpoint::new("src", "us-east-1")
}

fn verifier(storage: &FakeStorage) -> ReplicationVerifier<FakeStorage> {
    ReplicationVerifier::new(storage.clone(), VerifyOptions::default())
}

#[tokio::test(start_paused = true)]
async fn missing_probe_uses_the_whole_budget() {
    let storage = FakeStorage::new()
        .with_bucket("src", "")
        .with_bucket("dst", "us-west-2")
        .with_replication("src", replicating_to(&["dst"]));

    let start = Instant::now();
    let report = verifier(&storage).verify(&source(), "p.txt").await.unwrap();

    let dst = &report.destinations[0];
    assert!(!dst.found);
    assert_eq!(dst.attempts, 12);
    assert!(!report.all_found());

    let checks = storage.checks_of("dst");
    assert_eq!(checks.len(), 12);
    assert_eq!(spacing(&checks), vec![Duration::from_secs(10); 11]);
    assert_eq!(checks[11] - start, Duration::from_secs(120));
}

#[tokio::test(start_paused = true)]
async fn uploads_the_probe_payload() {
    let storage = FakeStorage::new()
        .with_bucket("src", "")
        .with_bucket("dst", "us-west-2")
        .with_replication("src", replicating_to(&["dst"]))
        .replicate_on_check("dst", 1);

    let report = verifier(&storage).verify(&source(), "p.txt").await.unwrap();

    assert_eq!(report.probe.key, "p.txt");
    assert_eq!(report.probe.payload.as_ref(), PROBE_PAYLOAD.as_bytes());
    assert!(storage.state().buckets["src"].contains("p.txt"));
    assert_eq!(report.destinations[0].attempts, 1);
    assert_eq!(storage.checks_of("dst").len(), 1);
}

#[tokio::test(start_paused = true)]
async fn normalizes_destination_regions() {
    let storage = FakeStorage::new()
        .with_bucket("src", "")
        .with_bucket("dst-eu", "EU")
        .with_bucket("dst-us", "")
        .with_bucket("dst-legacy", "US")
        .with_bucket("dst-tokyo", "ap-northeast-1")
        .with_replication(
            "src",
            replicating_to(&["dst-eu", "dst-us", "dst-legacy", "dst-tokyo"]),
        )
        .replicate_on_check("dst-eu", 1)
        .replicate_on_check("dst-us", 1)
        .replicate_on_check("dst-legacy", 1)
        .replicate_on_check("dst-tokyo", 1);

    let report = verifier(&storage).verify(&source(), "p.txt").await.unwrap();

    let regions: Vec<(&str, &str)> = report
        .destinations
        .iter()
        .map(|d| (d.bucket.as_str(), d.region.as_str()))
        .collect();
    assert_eq!(
        regions,
        vec![
            ("dst-eu", "eu-west-1"),
            ("dst-us", "us-east-1"),
            ("dst-legacy", "us-east-1"),
            ("dst-tokyo", "ap-northeast-1"),
        ]
    );
    assert!(report.all_found());
}

#[tokio::test(start_paused = true)]
async fn unknown_region_falls_back_to_source_region() {
    let storage = FakeStorage::new()
        .with_bucket("src", "")
        .with_replication("src", replicating_to(&["dst"]))
        .replicate_on_check("dst", 1);
    storage.state().buckets.insert("dst".into(), Default::default());

    let source = BucketEndpoint::new("src", "ap-south-1");
    let report = verifier(&storage).verify(&source, "p.txt").await.unwrap();

    assert_eq!(report.destinations[0].region, "ap-south-1");
    assert_eq!(storage.state().location_lookups, vec!["dst"]);
}

#[tokio::test(start_paused = true)]
async fn duplicate_rules_are_polled_once() {
    let mut config = replicating_to(&["dst", "dst"]);
    config.rules[1].id = Some("manual".into());
    let storage = FakeStorage::new()
        .with_bucket("src", "")
        .with_bucket("dst", "us-west-2")
        .with_replication("src", config)
        .replicate_on_check("dst", 2);

    let report = verifier(&storage).verify(&source(), "p.txt").await.unwrap();

    assert_eq!(report.destinations.len(), 1);
    assert_eq!(storage.checks_of("dst").len(), 2);
}

#[tokio::test(start_paused = true)]
async fn no_destinations_is_an_error() {
    let storage = FakeStorage::new().with_bucket("src", "");

    let err = verifier(&storage)
        .verify(&source(), "p.txt")
        .await
        .unwrap_err();

    assert!(matches!(err, ProvisionError::NoDestinations(ref b) if b == "src"));
}

#[tokio::test(start_paused = true)]
async fn failed_upload_aborts_before_polling() {
    let storage = FakeStorage::new()
        .with_bucket("dst", "us-west-2")
        .replicate_on_check("dst", 1);

    let err = verifier(&storage)
        .verify(&source(), "p.txt")
        .await
        .unwrap_err();

    match err {
        ProvisionError::Storage(e) => assert!(e.is_s3_code(&S3ErrorCode::NoSuchBucket)),
        other => panic!("unexpected error: {other}"),
    }
    assert!(storage.checks_of("dst").is_empty());
}

#[tokio::test(start_paused = true)]
async fn listing_failure_is_fatal() {
    let storage = FakeStorage::new()
        .with_bucket("src", "")
        .with_bucket("dst", "us-west-2")
        .with_replication("src", replicating_to(&["dst"]))
        .replicate_on_check("dst", 1);
    storage.state().unlistable.insert("dst".into());

    let err = verifier(&storage)
        .verify(&source(), "p.txt")
        .await
        .unwrap_err();

    match err {
        ProvisionError::Storage(e) => assert!(e.is_s3_code(&S3ErrorCode::AccessDenied)),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test(start_paused = true)]
async fn explicit_destination_reports_counts() {
    let storage = FakeStorage::new()
        .with_bucket("src", "")
        .with_objects("src", &["a", "b"])
        .with_bucket("other", "eu-central-1")
        .with_objects("other", &["x"]);
    let options = VerifyOptions {
        poll: PollPolicy::new(2, Duration::from_secs(1)),
    };

    let report = ReplicationVerifier::new(storage.clone(), options)
        .verify_destination(
            &source(),
            "p.txt",
            BucketEndpoint::new("other", "eu-central-1"),
        )
        .await
        .unwrap();

    let dst = &report.destinations[0];
    assert!(!dst.found);
    assert_eq!(dst.attempts, 2);
    assert_eq!(dst.source_count, 3);
    assert_eq!(dst.dest_count, 1);
    assert!(!dst.caught_up);
    assert!(storage.state().location_lookups.is_empty());
}

#[tokio::test(start_paused = true)]
async fn counts_compare_sizes_only() {
    let storage = FakeStorage::new()
        .with_bucket("src", "")
        .with_bucket("dst", "us-west-2")
        .with_objects("dst", &["unrelated-1", "unrelated-2"])
        .with_replication("src", replicating_to(&["dst"]))
        .replicate_on_check("dst", 1);

    let report = verifier(&storage).verify(&source(), "p.txt").await.unwrap();

    let dst = &report.destinations[0];
    assert_eq!((dst.source_count, dst.dest_count), (1, 3));
    assert!(dst.caught_up);
}

