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
use crate::replication::poll::PollPolicy;
use crate::s3::types::ReplicationConfig;
use bytes::Bytes;
use chrono::{DateTime, Utc};

/// Content of every probe object.
pub const PROBE_PAYLOAD: &str = "Hello extended replication test. Hello to CRR! Bye.";

/// Polling budget of a verification run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VerifyOptions {
    pub poll: PollPolicy,
}

impl Default for VerifyOptions {
    fn default() -> Self {
        Self {
            poll: PollPolicy::VERIFY,
        }
    }
}

/// The object written to the source bucket for one verification run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerificationProbe {
    pub key: String,
    pub payload: Bytes,
    pub uploaded_at: DateTime<Utc>,
}

impl VerificationProbe {
    /// A probe key unique to this run.
    pub fn generate_key() -> String {
        format!("crr-probe-{}.txt", uuid::Uuid::new_v4())
    }
}

/// Result of checking a single destination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DestinationReport {
    pub bucket: String,
    pub region: String,
    /// Whether the probe showed up within the polling budget.
    pub found: bool,
    pub attempts: u32,
    /// Keys listed in the destination after polling.
    pub keys: Vec<String>,
    pub source_count: usize,
    pub dest_count: usize,
    /// `dest_count >= source_count`. This compares counts only, not the keys themselves.
    pub caught_up: bool,
}

/// Result of a verification run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerificationReport {
    pub source: BucketEndpoint,
    pub probe: VerificationProbe,
    /// Keys listed in the source after polling.
    pub source_keys: Vec<String>,
    pub destinations: Vec<DestinationReport>,
}

impl VerificationReport {
    /// `true` when every destination received the probe.
    pub fn all_found(&self) -> bool {
        self.destinations.iter().all(|d| d.found)
    }
}

/// Every distinct destination bucket across all rules, in rule order.
pub fn discover_destinations(config: &ReplicationConfig) -> Vec<String> {
    let mut buckets: Vec<String> = Vec::new();
    for rule in &config.rules {
        let bucket = rule.destination_bucket();
        if !bucket.is_empty() && !buckets.iter().any(|b| b == bucket) {
            buckets.push(bucket.to_string());
        }
    }
    buckets
}

/// Writes a probe object and polls each destination for it.
///
/// A destination that never shows the probe is reported with `found == false`; only
/// failures to upload the probe, read the configuration or list keys abort the run.
#[derive(Debug)]
pub struct ReplicationVerifier<S> {
    storage: S,
    options: VerifyOptions,
}

impl<S: StorageBackend> ReplicationVerifier<S> {
    pub fn new(storage: S, options: VerifyOptions) -> Self {
        Self { storage, options }
    }

    /// Verifies replication from `source` to every destination found in its
    /// replication configuration.
    pub async fn verify(
        &self,
        source: &BucketEndpoint,
        key: &str,
    ) -> Result<VerificationReport, ProvisionError> {
        let probe = self.upload_probe(source, key).await?;

        let config = self.storage.get_replication(source).await?;
        let buckets = discover_destinations(&config);
        if buckets.is_empty() {
            return Err(ProvisionError::NoDestinations(source.name.clone()));
        }

        let mut destinations = Vec::with_capacity(buckets.len());
        for bucket in buckets {
            let region = self.resolve_region(&bucket, &source.region).await;
            destinations.push(BucketEndpoint::new(bucket, region));
        }

        self.check(source, probe, destinations).await
    }

    /// Verifies replication from `source` into the single, explicitly named
    /// `destination`, skipping discovery and region lookup.
    pub async fn verify_destination(
        &self,
        source: &BucketEndpoint,
        key: &str,
        destination: BucketEndpoint,
    ) -> Result<VerificationReport, ProvisionError> {
        let probe = self.upload_probe(source, key).await?;
        self.check(source, probe, vec![destination]).await
    }

    async fn upload_probe(
        &self,
        source: &BucketEndpoint,
        key: &str,
    ) -> Result<VerificationProbe, ProvisionError> {
        let payload = Bytes::from_static(PROBE_PAYLOAD.as_bytes());
        self.storage.put_object(source, key, payload.clone()).await?;
        log::info!("uploaded probe '{key}' to bucket '{}'", source.name);
        Ok(VerificationProbe {
            key: key.to_string(),
            payload,
            uploaded_at: Utc::now(),
        })
    }

    /// Region of `bucket`, or `fallback` when the lookup fails.
    async fn resolve_region(&self, bucket: &str, fallback: &str) -> String {
        match self.storage.bucket_region(bucket).await {
            Ok(region) => region,
            Err(e) => {
                log::warn!("cannot look up region of bucket '{bucket}', using {fallback}: {e}");
                fallback.to_string()
            }
        }
    }

    async fn check(
        &self,
        source: &BucketEndpoint,
        probe: VerificationProbe,
        destinations: Vec<BucketEndpoint>,
    ) -> Result<VerificationReport, ProvisionError> {
        let mut polled = Vec::with_capacity(destinations.len());
        for dest in destinations {
            let storage = &self.storage;
            let key = probe.key.as_str();
            let target = &dest;
            let outcome = self
                .options
                .poll
                .poll(|attempt| async move {
                    match storage.object_exists(target, key).await {
                        Ok(found) => {
                            log::debug!(
                                "attempt {attempt}: probe {} in '{}'",
                                if found { "present" } else { "absent" },
                                target.name
                            );
                            found
                        }
                        Err(e) => {
                            log::warn!("attempt {attempt}: checking '{}' failed: {e}", target.name);
                            false
                        }
                    }
                })
                .await;

            if outcome.found {
                log::info!(
                    "probe replicated to '{}' after {} attempt(s)",
                    dest.name,
                    outcome.attempts
                );
            } else {
                log::warn!(
                    "probe not found in '{}' after {} attempt(s)",
                    dest.name,
                    outcome.attempts
                );
            }
            polled.push((dest, outcome));
        }

        let source_keys = self.storage.list_keys(source).await?;
        let source_count = source_keys.len();

        let mut reports = Vec::with_capacity(polled.len());
        for (dest, outcome) in polled {
            let keys = self.storage.list_keys(&dest).await?;
            let dest_count = keys.len();
            reports.push(DestinationReport {
                bucket: dest.name,
                region: dest.region,
                found: outcome.found,
                attempts: outcome.attempts,
                keys,
                source_count,
                dest_count,
                caught_up: dest_count >= source_count,
            });
        }

        Ok(VerificationReport {
            source: source.clone(),
            probe,
            source_keys,
            destinations: reports,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::replication::reconciler::desired_rule;
    use crate::s3::types::{Destination, ReplicationRule};

    #[test]
    fn destinations_are_distinct_and_ordered() {
        let config = ReplicationConfig {
            role: None,
            rules: vec![
                desired_rule("b", 1),
                desired_rule("a", 2),
                ReplicationRule {
                    id: Some("second-rule-for-b".into()),
                    destination: Destination::new("arn:aws:s3:::b"),
                    ..Default::default()
                },
            ],
        };
        assert_eq!(discover_destinations(&config), vec!["b", "a"]);
    }

    #[test]
    fn no_rules_no_destinations() {
        assert!(discover_destinations(&ReplicationConfig::default()).is_empty());
    }

    #[test]
    fn generated_keys_are_unique() {
        let a = VerificationProbe::generate_key();
        let b = VerificationProbe::generate_key();
        assert_ne!(a, b);
        assert!(a.starts_with("crr-probe-"));
    }
}

