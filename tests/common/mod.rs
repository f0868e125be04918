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

//! In-memory storage and identity services shared by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use crr::iam::error::{IamError, IamErrorCode, IamErrorResponse};
use crr::iam::policy::PolicyDocument;
use crr::iam::types::Role;
use crr::replication::{BucketEndpoint, IdentityBackend, StorageBackend};
use crr::s3::error::Error;
use crr::s3::error_response::{S3ErrorCode, S3ErrorResponse};
use crr::s3::types::ReplicationConfig;
use crr::s3::utils::normalize_location_constraint;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::time::Instant;

pub const ACCOUNT: &str = "123456789012";

fn s3_error(code: S3ErrorCode, message: &str) -> Error {
    Error::from(S3ErrorResponse::from_code(code, message))
}

fn iam_error(code: IamErrorCode, status: u16) -> IamError {
    let message = code.to_string();
    IamErrorResponse::new(code, message, status).into()
}

#[derive(Debug, Default)]
pub struct StorageState {
    /// Buckets owned by the caller, with their keys.
    pub buckets: BTreeMap<String, BTreeSet<String>>,
    /// Buckets owned by some other account.
    pub foreign_buckets: HashSet<String>,
    /// Raw location constraint per bucket.
    pub locations: HashMap<String, String>,
    pub versioned: BTreeSet<String>,
    pub replication: HashMap<String, ReplicationConfig>,

    /// HEAD calls that still answer "missing" after a bucket was created.
    pub visibility_delay: u32,
    pending_visibility: HashMap<String, u32>,

    /// Destination bucket -> the probe check on which replicated objects appear.
    pub replicate_on_check: HashMap<String, u32>,
    /// Times at which each bucket was checked for an object.
    pub object_checks: HashMap<String, Vec<Instant>>,

    /// Buckets whose listing fails.
    pub unlistable: HashSet<String>,

    pub created: Vec<String>,
    pub versioning_calls: Vec<String>,
    pub replication_puts: u32,
    pub location_lookups: Vec<String>,
}

/// An S3-like service whose replication is driven by the test.
#[derive(Clone, Debug, Default)]
pub struct FakeStorage {
    state: Arc<Mutex<StorageState>>,
}

impl FakeStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MutexGuard<'_, StorageState> {
        self.state.lock().unwrap()
    }

    pub fn with_bucket(self, name: &str, location: &str) -> Self {
        {
            let mut st = self.state();
            st.buckets.entry(name.to_string()).or_default();
            st.locations.insert(name.to_string(), location.to_string());
        }
        self
    }

    pub fn with_foreign_bucket(self, name: &str) -> Self {
        self.state().foreign_buckets.insert(name.to_string());
        self
    }

    pub fn with_objects(self, bucket: &str, keys: &[&str]) -> Self {
        self.state()
            .buckets
            .entry(bucket.to_string())
            .or_default()
            .extend(keys.iter().map(|k| k.to_string()));
        self
    }

    pub fn with_replication(self, bucket: &str, config: ReplicationConfig) -> Self {
        self.state().replication.insert(bucket.to_string(), config);
        self
    }

    /// Makes objects of the replication sources appear in `bucket` on the `check`-th
    /// object check against it.
    pub fn replicate_on_check(self, bucket: &str, check: u32) -> Self {
        self.state()
            .replicate_on_check
            .insert(bucket.to_string(), check);
        self
    }

    pub fn with_visibility_delay(self, calls: u32) -> Self {
        self.state().visibility_delay = calls;
        self
    }

    pub fn replication_of(&self, bucket: &str) -> ReplicationConfig {
        self.state()
            .replication
            .get(bucket)
            .cloned()
            .unwrap_or_default()
    }

    pub fn checks_of(&self, bucket: &str) -> Vec<Instant> {
        self.state()
            .object_checks
            .get(bucket)
            .cloned()
            .unwrap_or_default()
    }

    /// Copies every object of the buckets replicating into `dst`.
    fn replicate_into(st: &mut StorageState, dst: &str) {
        let arn = format!("arn:aws:s3:::{dst}");
        let sources: Vec<String> = st
            .replication
            .iter()
            .filter(|(_, c)| c.rules.iter().any(|r| r.destination.bucket_arn == arn))
            .map(|(b, _)| b.clone())
            .collect();
        let mut keys = BTreeSet::new();
        for src in sources {
            if let Some(k) = st.buckets.get(&src) {
                keys.extend(k.iter().cloned());
            }
        }
        st.buckets.entry(dst.to_string()).or_default().extend(keys);
    }
}

#[async_trait]
impl StorageBackend for FakeStorage {
    async fn bucket_exists(&self, bucket: &BucketEndpoint) -> Result<bool, Error> {
        let mut st = self.state();
        if st.foreign_buckets.contains(&bucket.name) {
            return Err(s3_error(S3ErrorCode::AccessDenied, "Access denied"));
        }
        if let Some(pending) = st.pending_visibility.get_mut(&bucket.name) {
            if *pending > 0 {
                *pending -= 1;
                return Ok(false);
            }
        }
        Ok(st.buckets.contains_key(&bucket.name))
    }

    async fn create_bucket(&self, bucket: &BucketEndpoint) -> Result<(), Error> {
        let mut st = self.state();
        if st.foreign_buckets.contains(&bucket.name) {
            return Err(s3_error(S3ErrorCode::BucketAlreadyExists, "taken"));
        }
        if st.buckets.contains_key(&bucket.name) {
            return Err(s3_error(S3ErrorCode::BucketAlreadyOwnedByYou, "yours"));
        }
        st.buckets.insert(bucket.name.clone(), BTreeSet::new());
        let location = if bucket.region == "us-east-1" {
            String::new()
        } else {
            bucket.region.clone()
        };
        st.locations.insert(bucket.name.clone(), location);
        let delay = st.visibility_delay;
        st.pending_visibility.insert(bucket.name.clone(), delay);
        st.created.push(bucket.name.clone());
        Ok(())
    }

    async fn enable_versioning(&self, bucket: &BucketEndpoint) -> Result<(), Error> {
        let mut st = self.state();
        if !st.buckets.contains_key(&bucket.name) {
            return Err(s3_error(S3ErrorCode::NoSuchBucket, "no bucket"));
        }
        st.versioned.insert(bucket.name.clone());
        st.versioning_calls.push(bucket.name.clone());
        Ok(())
    }

    async fn get_replication(&self, bucket: &BucketEndpoint) -> Result<ReplicationConfig, Error> {
        let st = self.state();
        if !st.buckets.contains_key(&bucket.name) {
            return Err(s3_error(S3ErrorCode::NoSuchBucket, "no bucket"));
        }
        Ok(st.replication.get(&bucket.name).cloned().unwrap_or_default())
    }

    async fn put_replication(
        &self,
        bucket: &BucketEndpoint,
        config: &ReplicationConfig,
    ) -> Result<(), Error> {
        let mut st = self.state();
        if !st.versioned.contains(&bucket.name) {
            return Err(s3_error(
                S3ErrorCode::Other("InvalidRequest".into()),
                "versioning must be enabled",
            ));
        }
        st.replication.insert(bucket.name.clone(), config.clone());
        st.replication_puts += 1;
        Ok(())
    }

    async fn put_object(
        &self,
        bucket: &BucketEndpoint,
        key: &str,
        _data: Bytes,
    ) -> Result<(), Error> {
        let mut st = self.state();
        match st.buckets.get_mut(&bucket.name) {
            Some(keys) => {
                keys.insert(key.to_string());
                Ok(())
            }
            None => Err(s3_error(S3ErrorCode::NoSuchBucket, "no bucket")),
        }
    }

    async fn object_exists(&self, bucket: &BucketEndpoint, key: &str) -> Result<bool, Error> {
        let mut st = self.state();
        let checks = st.object_checks.entry(bucket.name.clone()).or_default();
        checks.push(Instant::now());
        let count = checks.len() as u32;

        if let Some(on) = st.replicate_on_check.get(&bucket.name).copied() {
            if count >= on {
                Self::replicate_into(&mut st, &bucket.name);
            }
        }
        match st.buckets.get(&bucket.name) {
            Some(keys) => Ok(keys.contains(key)),
            None => Err(s3_error(S3ErrorCode::NoSuchBucket, "no bucket")),
        }
    }

    async fn list_keys(&self, bucket: &BucketEndpoint) -> Result<Vec<String>, Error> {
        let st = self.state();
        if st.unlistable.contains(&bucket.name) {
            return Err(s3_error(S3ErrorCode::AccessDenied, "Access denied"));
        }
        match st.buckets.get(&bucket.name) {
            Some(keys) => Ok(keys.iter().cloned().collect()),
            None => Err(s3_error(S3ErrorCode::NoSuchBucket, "no bucket")),
        }
    }

    async fn bucket_region(&self, bucket: &str) -> Result<String, Error> {
        let mut st = self.state();
        st.location_lookups.push(bucket.to_string());
        match st.locations.get(bucket) {
            Some(v) => Ok(normalize_location_constraint(v)),
            None => Err(s3_error(S3ErrorCode::NoSuchBucket, "no bucket")),
        }
    }
}

#[derive(Clone, Debug)]
pub struct FakeRole {
    pub role: Role,
    pub trust: PolicyDocument,
    pub policies: BTreeMap<String, PolicyDocument>,
}

#[derive(Debug, Default)]
pub struct IdentityState {
    pub roles: BTreeMap<String, FakeRole>,
    /// Policy reads that still fail after a policy was written.
    pub propagation_delay: u32,
    pending_reads: u32,
    pub fail_create: Option<IamErrorCode>,
    pub create_calls: u32,
    pub policy_puts: u32,
    pub policy_reads: Vec<Instant>,
}

/// An IAM-like service.
#[derive(Clone, Debug, Default)]
pub struct FakeIdentity {
    state: Arc<Mutex<IdentityState>>,
}

impl FakeIdentity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MutexGuard<'_, IdentityState> {
        self.state.lock().unwrap()
    }

    pub fn with_role(self, name: &str) -> Self {
        self.state().roles.insert(
            name.to_string(),
            FakeRole {
                role: role(name),
                trust: PolicyDocument::s3_trust_policy(),
                policies: BTreeMap::new(),
            },
        );
        self
    }

    pub fn with_propagation_delay(self, reads: u32) -> Self {
        self.state().propagation_delay = reads;
        self
    }

    pub fn failing_create(self, code: IamErrorCode) -> Self {
        self.state().fail_create = Some(code);
        self
    }

    pub fn role(&self, name: &str) -> Option<FakeRole> {
        self.state().roles.get(name).cloned()
    }
}

pub fn role_arn(name: &str) -> String {
    format!("arn:aws:iam::{ACCOUNT}:role/{name}")
}

fn role(name: &str) -> Role {
    Role {
        role_name: name.to_string(),
        role_id: format!("AROA{}", name.len()),
        arn: role_arn(name),
        path: "/".to_string(),
        ..Default::default()
    }
}

#[async_trait]
impl IdentityBackend for FakeIdentity {
    async fn create_role(
        &self,
        name: &str,
        trust_policy: &PolicyDocument,
        _description: &str,
    ) -> Result<Role, IamError> {
        let mut st = self.state();
        st.create_calls += 1;
        if let Some(code) = st.fail_create.clone() {
            return Err(iam_error(code, 400));
        }
        if st.roles.contains_key(name) {
            return Err(iam_error(IamErrorCode::EntityAlreadyExists, 409));
        }
        let created = role(name);
        st.roles.insert(
            name.to_string(),
            FakeRole {
                role: created.clone(),
                trust: trust_policy.clone(),
                policies: BTreeMap::new(),
            },
        );
        Ok(created)
    }

    async fn get_role(&self, name: &str) -> Result<Role, IamError> {
        match self.state().roles.get(name) {
            Some(r) => Ok(r.role.clone()),
            None => Err(iam_error(IamErrorCode::NoSuchEntity, 404)),
        }
    }

    async fn put_role_policy(
        &self,
        role_name: &str,
        policy_name: &str,
        document: &PolicyDocument,
    ) -> Result<(), IamError> {
        let mut st = self.state();
        let delay = st.propagation_delay;
        let Some(r) = st.roles.get_mut(role_name) else {
            return Err(iam_error(IamErrorCode::NoSuchEntity, 404));
        };
        r.policies.insert(policy_name.to_string(), document.clone());
        st.pending_reads = delay;
        st.policy_puts += 1;
        Ok(())
    }

    async fn get_role_policy(
        &self,
        role_name: &str,
        policy_name: &str,
    ) -> Result<PolicyDocument, IamError> {
        let mut st = self.state();
        st.policy_reads.push(Instant::now());
        if st.pending_reads > 0 {
            st.pending_reads -= 1;
            return Err(iam_error(IamErrorCode::NoSuchEntity, 404));
        }
        st.roles
            .get(role_name)
            .and_then(|r| r.policies.get(policy_name).cloned())
            .ok_or_else(|| iam_error(IamErrorCode::NoSuchEntity, 404))
    }
}

/// Differences between consecutive instants.
pub fn spacing(times: &[Instant]) -> Vec<Duration> {
    times.windows(2).map(|w| w[1] - w[0]).collect()
}

