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

use crate::replication::backend::{BucketEndpoint, StorageBackend};
use crate::replication::error::ProvisionError;
use crate::s3::types::{Destination, Filter, ReplicationConfig, ReplicationRule};

/// Identifier of the rule replicating into `dst_bucket`.
pub fn rule_id(dst_bucket: &str) -> String {
    format!("replicate-to-{dst_bucket}")
}

/// Destination reference of `dst_bucket` as stored in a replication rule.
pub fn destination_arn(dst_bucket: &str) -> String {
    format!("arn:aws:s3:::{dst_bucket}")
}

/// The rule written for `dst_bucket`: enabled, matching every key, delete markers not
/// replicated.
pub fn desired_rule(dst_bucket: &str, priority: i32) -> ReplicationRule {
    ReplicationRule {
        id: Some(rule_id(dst_bucket)),
        priority: Some(priority),
        filter: Some(Filter::with_prefix("")),
        status: true,
        destination: Destination::new(destination_arn(dst_bucket)),
        delete_marker_replication_status: Some(false),
        ..Default::default()
    }
}

/// Merges the rule for `dst_bucket` into `config` and sets the role.
///
/// Rules are matched by destination reference, never by id. A matching rule is
/// replaced where it stands and keeps its priority; otherwise the rule is appended
/// with one more than the highest priority present (missing priorities count as 0).
/// Later rules for the same destination are dropped. Rules for other destinations
/// are left untouched.
pub fn merge_rule(
    mut config: ReplicationConfig,
    dst_bucket: &str,
    role_arn: &str,
) -> ReplicationConfig {
    let arn = destination_arn(dst_bucket);
    let max_priority = config
        .rules
        .iter()
        .map(|r| r.priority.unwrap_or(0))
        .max()
        .unwrap_or(0)
        .max(0);

    let mut replaced = false;
    config.rules.retain_mut(|rule| {
        if rule.destination.bucket_arn != arn {
            return true;
        }
        if replaced {
            return false;
        }
        let priority = rule.priority.unwrap_or(max_priority + 1);
        *rule = desired_rule(dst_bucket, priority);
        replaced = true;
        true
    });
    if !replaced {
        config.rules.push(desired_rule(dst_bucket, max_priority + 1));
    }

    config.role = Some(role_arn.to_string());
    config
}

/// Upserts the replication rule of one destination on a source bucket.
#[derive(Debug)]
pub struct RuleReconciler<'a, S: ?Sized> {
    storage: &'a S,
}

impl<'a, S: StorageBackend + ?Sized> RuleReconciler<'a, S> {
    pub fn new(storage: &'a S) -> Self {
        Self { storage }
    }

    /// Reads the configuration of `source`, merges the rule for `dst_bucket` with
    /// [`merge_rule`] and writes the whole configuration back. Returns what was written.
    ///
    /// A bucket without configuration starts from an empty rule set. The write is last
    /// writer wins.
    pub async fn upsert_rule(
        &self,
        source: &BucketEndpoint,
        dst_bucket: &str,
        role_arn: &str,
    ) -> Result<ReplicationConfig, ProvisionError> {
        let current = self.storage.get_replication(source).await?;
        log::debug!(
            "bucket '{}' has {} replication rule(s)",
            source.name,
            current.rules.len()
        );

        let merged = merge_rule(current, dst_bucket, role_arn);
        self.storage.put_replication(source, &merged).await?;
        log::info!(
            "applied replication to '{dst_bucket}' on bucket '{}' ({} rule(s))",
            source.name,
            merged.rules.len()
        );
        Ok(merged)
    }
}
