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

use common::{FakeIdentity, FakeStorage, role_arn, spacing};
use crr::iam::error::IamErrorCode;
use crr::iam::policy::PolicyDocument;
use crr::replication::{
    BucketEndpoint, PollPolicy, ProvisionError, ReplicationSetup, ReplicationVerifier,
    SetupOptions, SetupStage, VerifyOptions, desired_rule, policy_name, rule_id,
};
use crr::s3::types::ReplicationConfig;
use std::time::Duration;

fn source() -> BucketEndpoint {
    BucketEndpoint::new("src", "us-east-1")
}

fn destination() -> BucketEndpoint {
    BucketEndpoint::new("dst", "us-west-2")
}

fn setup(
    storage: &FakeStorage,
    identity: &FakeIdentity,
) -> ReplicationSetup<FakeStorage, FakeIdentity> {
    ReplicationSetup::new(storage.clone(), identity.clone(), SetupOptions::default())
}

#[tokio::test(start_paused = true)]
async fn provisions_and_verifies_from_scratch() {
    let storage = FakeStorage::new().with_bucket("src", "");
    let identity = FakeIdentity::new();

    let mut stages = Vec::new();
    let outcome = setup(&storage, &identity)
        .run_with_progress(source(), destination(), "role-x", |s| stages.push(s))
        .await
        .unwrap();

    assert_eq!(
        stages,
        vec![
            SetupStage::DestinationReady {
                bucket: "dst".into(),
                created: true
            },
            SetupStage::VersioningEnabled {
                bucket: "src".into()
            },
            SetupStage::VersioningEnabled {
                bucket: "dst".into()
            },
            SetupStage::RoleReady {
                arn: role_arn("role-x"),
                created: true
            },
            SetupStage::ReplicationApplied {
                source: "src".into(),
                rules: 1
            },
        ]
    );

    assert!(outcome.destination.is_created());
    assert!(outcome.role_created);
    assert!(outcome.source.versioning_enabled);
    assert!(outcome.destination.handle().versioning_enabled);
    assert_eq!(outcome.policy_name, policy_name("role-x", "src", "dst"));
    assert_eq!(
        outcome.config,
        ReplicationConfig {
            role: Some(role_arn("role-x")),
            rules: vec![desired_rule("dst", 1)],
        }
    );
    assert_eq!(storage.replication_of("src"), outcome.config);

    let role = identity.role("role-x").unwrap();
    assert_eq!(role.trust, PolicyDocument::s3_trust_policy());
    assert_eq!(
        role.policies.get(&outcome.policy_name),
        Some(&PolicyDocument::replication_permissions("src", "dst"))
    );

    let storage = storage.replicate_on_check("dst", 3);
    let verifier = ReplicationVerifier::new(storage.clone(), VerifyOptions::default());
    let report = verifier.verify(&source(), "p.txt").await.unwrap();

    assert!(report.all_found());
    assert_eq!(report.source_keys, vec!["p.txt"]);
    let dst = &report.destinations[0];
    assert_eq!(dst.bucket, "dst");
    assert_eq!(dst.region, "us-west-2");
    assert_eq!(dst.attempts, 3);
    assert_eq!(dst.keys, vec!["p.txt"]);
    assert!(dst.caught_up);
}

#[tokio::test(start_paused = true)]
async fn second_run_changes_nothing() {
    let storage = FakeStorage::new().with_bucket("src", "");
    let identity = FakeIdentity::new();
    let setup = setup(&storage, &identity);

    let first = setup.run(source(), destination(), "role-x").await.unwrap();
    let second = setup.run(source(), destination(), "role-x").await.unwrap();

    assert_eq!(first.config, second.config);
    assert_eq!(storage.replication_of("src").rules.len(), 1);
    assert!(!second.destination.is_created());
    assert!(!second.role_created);
    assert_eq!(first.role, second.role);
    assert_eq!(storage.state().created, vec!["dst"]);
    assert_eq!(identity.role("role-x").unwrap().policies.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn adds_rule_after_existing_ones() {
    let existing = ReplicationConfig {
        role: Some(role_arn("old-role")),
        rules: vec![desired_rule("dst-a", 1), desired_rule("dst-b", 2)],
    };
    let storage = FakeStorage::new()
        .with_bucket("src", "")
        .with_replication("src", existing.clone());
    let identity = FakeIdentity::new();

    let outcome = setup(&storage, &identity)
        .run(source(), destination(), "role-x")
        .await
        .unwrap();

    let rules = &outcome.config.rules;
    assert_eq!(rules.len(), 3);
    assert_eq!(rules[..2], existing.rules[..]);
    assert_eq!(rules[2].id.as_deref(), Some(rule_id("dst").as_str()));
    assert_eq!(rules[2].priority, Some(3));
    assert_eq!(outcome.config.role, Some(role_arn("role-x")));
}

#[tokio::test(start_paused = true)]
async fn foreign_destination_stops_the_run() {
    let storage = FakeStorage::new()
        .with_bucket("src", "")
        .with_foreign_bucket("dst");
    let identity = FakeIdentity::new();

    let mut stages = Vec::new();
    let err = setup(&storage, &identity)
        .run_with_progress(source(), destination(), "role-x", |s| stages.push(s))
        .await
        .unwrap_err();

    assert!(matches!(err, ProvisionError::OwnershipConflict { ref bucket } if bucket == "dst"));
    assert!(stages.is_empty());
    assert!(storage.state().versioning_calls.is_empty());
    assert_eq!(storage.state().replication_puts, 0);
    assert_eq!(identity.state().create_calls, 0);
}

#[tokio::test(start_paused = true)]
async fn role_failure_keeps_earlier_stages() {
    let storage = FakeStorage::new().with_bucket("src", "");
    let identity = FakeIdentity::new().failing_create(IamErrorCode::AccessDenied);

    let err = setup(&storage, &identity)
        .run(source(), destination(), "role-x")
        .await
        .unwrap_err();

    match err {
        ProvisionError::Identity(e) => assert!(e.is_iam_code(&IamErrorCode::AccessDenied)),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(storage.state().versioning_calls, vec!["src", "dst"]);
    assert!(storage.state().buckets.contains_key("dst"));
    assert_eq!(storage.state().replication_puts, 0);
}

#[tokio::test(start_paused = true)]
async fn waits_for_new_bucket_to_show_up() {
    let storage = FakeStorage::new()
        .with_bucket("src", "")
        .with_visibility_delay(3);
    let identity = FakeIdentity::new();

    let outcome = setup(&storage, &identity)
        .run(source(), destination(), "role-x")
        .await
        .unwrap();
    assert!(outcome.destination.is_created());
}

#[tokio::test(start_paused = true)]
async fn gives_up_on_invisible_bucket() {
    let storage = FakeStorage::new()
        .with_bucket("src", "")
        .with_visibility_delay(1000);
    let identity = FakeIdentity::new();

    let err = setup(&storage, &identity)
        .run(source(), destination(), "role-x")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ProvisionError::BucketNotVisible { ref bucket, attempts: 20 } if bucket == "dst"
    ));
    assert!(storage.state().versioning_calls.is_empty());
}

#[tokio::test(start_paused = true)]
async fn waits_for_role_policy_to_propagate() {
    let storage = FakeStorage::new().with_bucket("src", "");
    let identity = FakeIdentity::new().with_propagation_delay(2);

    setup(&storage, &identity)
        .run(source(), destination(), "role-x")
        .await
        .unwrap();

    let reads = identity.state().policy_reads.clone();
    assert_eq!(reads.len(), 3);
    assert_eq!(spacing(&reads), vec![Duration::from_secs(1); 2]);
}

#[tokio::test(start_paused = true)]
async fn unusable_role_stops_before_replication() {
    let storage = FakeStorage::new().with_bucket("src", "");
    let identity = FakeIdentity::new().with_propagation_delay(1000);
    let options = SetupOptions {
        role_usability: PollPolicy::new(4, Duration::from_secs(2)),
        ..Default::default()
    };

    let err = ReplicationSetup::new(storage.clone(), identity.clone(), options)
        .run(source(), destination(), "role-x")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ProvisionError::RoleNotUsable { ref role, attempts: 4, .. } if role == "role-x"
    ));
    assert_eq!(storage.state().replication_puts, 0);
}

#[tokio::test(start_paused = true)]
async fn adopts_existing_role() {
    let storage = FakeStorage::new()
        .with_bucket("src", "")
        .with_bucket("dst", "us-west-2");
    let identity = FakeIdentity::new().with_role("role-x");

    let outcome = setup(&storage, &identity)
        .run(source(), destination(), "role-x")
        .await
        .unwrap();

    assert!(!outcome.role_created);
    assert!(!outcome.destination.is_created());
    assert_eq!(outcome.role.arn, role_arn("role-x"));
    assert!(storage.state().created.is_empty());
}

