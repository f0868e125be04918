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

use crate::iam::types::Role;
use crate::replication::backend::{BucketEndpoint, IdentityBackend, StorageBackend};
use crate::replication::ensurer::{Provisioned, ResourceEnsurer};
use crate::replication::error::ProvisionError;
use crate::replication::poll::PollPolicy;
use crate::replication::provisioner::AccessProvisioner;
use crate::replication::reconciler::RuleReconciler;
use crate::s3::types::ReplicationConfig;
use std::time::Duration;

/// Waiting budgets of the provisioning flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SetupOptions {
    /// How long to wait for a newly created destination bucket to become visible.
    pub bucket_visibility: PollPolicy,
    /// Pause after attaching the role policy, before polling it.
    pub role_settle: Duration,
    pub role_usability: PollPolicy,
}

impl Default for SetupOptions {
    fn default() -> Self {
        Self {
            bucket_visibility: PollPolicy::BUCKET_VISIBILITY,
            role_settle: Duration::from_secs(5),
            role_usability: PollPolicy::ROLE_USABILITY,
        }
    }
}

/// Progress reported after each completed stage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SetupStage {
    DestinationReady { bucket: String, created: bool },
    VersioningEnabled { bucket: String },
    RoleReady { arn: String, created: bool },
    ReplicationApplied { source: String, rules: usize },
}

/// What a successful provisioning run left behind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetupOutcome {
    pub source: BucketEndpoint,
    pub destination: Provisioned<BucketEndpoint>,
    pub role: Role,
    pub role_created: bool,
    pub policy_name: String,
    /// The replication configuration as written to the source bucket.
    pub config: ReplicationConfig,
}

/// The provisioning flow: destination bucket, versioning, delegation role, replication
/// rule. Each stage runs only if the previous one succeeded and nothing is rolled back.
///
/// Running it again with the same inputs leaves the same configuration behind.
#[derive(Debug)]
pub struct ReplicationSetup<S, I> {
    storage: S,
    identity: I,
    options: SetupOptions,
}

impl<S: StorageBackend, I: IdentityBackend> ReplicationSetup<S, I> {
    pub fn new(storage: S, identity: I, options: SetupOptions) -> Self {
        Self {
            storage,
            identity,
            options,
        }
    }

    pub async fn run(
        &self,
        source: BucketEndpoint,
        destination: BucketEndpoint,
        role_name: &str,
    ) -> Result<SetupOutcome, ProvisionError> {
        self.run_with_progress(source, destination, role_name, |_| {})
            .await
    }

    /// Like [`run`](Self::run), calling `progress` after every completed stage.
    pub async fn run_with_progress<F: FnMut(SetupStage)>(
        &self,
        mut source: BucketEndpoint,
        destination: BucketEndpoint,
        role_name: &str,
        mut progress: F,
    ) -> Result<SetupOutcome, ProvisionError> {
        let ensurer = ResourceEnsurer::new(&self.storage, self.options.bucket_visibility);

        let destination = ensurer.ensure_bucket(&destination).await?;
        progress(SetupStage::DestinationReady {
            bucket: destination.handle().name.clone(),
            created: destination.is_created(),
        });

        ensurer.enable_versioning(&mut source).await?;
        progress(SetupStage::VersioningEnabled {
            bucket: source.name.clone(),
        });
        let dst_created = destination.is_created();
        let mut dst = destination.into_inner();
        ensurer.enable_versioning(&mut dst).await?;
        progress(SetupStage::VersioningEnabled {
            bucket: dst.name.clone(),
        });

        let provisioner = AccessProvisioner::new(
            &self.identity,
            self.options.role_settle,
            self.options.role_usability,
        );
        let role = provisioner.ensure_role(role_name).await?;
        let role_created = role.is_created();
        let role = role.into_inner();
        let policy_name = provisioner
            .attach_policy(&role, &source.name, &dst.name)
            .await?;
        progress(SetupStage::RoleReady {
            arn: role.arn.clone(),
            created: role_created,
        });

        let config = RuleReconciler::new(&self.storage)
            .upsert_rule(&source, &dst.name, &role.arn)
            .await?;
        progress(SetupStage::ReplicationApplied {
            source: source.name.clone(),
            rules: config.rules.len(),
        });

        let destination = if dst_created {
            Provisioned::Created(dst)
        } else {
            Provisioned::Adopted(dst)
        };
        Ok(SetupOutcome {
            source,
            destination,
            role,
            role_created,
            policy_name,
            config,
        })
    }
}

