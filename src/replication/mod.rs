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

//! Provisioning and verification of cross-region replication
//!
//! [`ReplicationSetup`] runs the four provisioning stages in order, stopping at the
//! first failure. [`ReplicationVerifier`] is the separate, later check that writes a
//! probe object and watches every configured destination for it.
//!
//! Everything here is generic over [`StorageBackend`] and [`IdentityBackend`], which
//! [`S3Client`](crate::s3::S3Client) and [`IamClient`](crate::iam::IamClient) implement.
//!
//! The replication configuration of a bucket is read, modified and written back
//! without any concurrency control. Callers must not reconcile the same source
//! bucket from two places at once.

mod backend;
mod ensurer;
mod error;
mod poll;
mod provisioner;
mod reconciler;
mod setup;
mod verifier;

pub use backend::{BucketEndpoint, IdentityBackend, StorageBackend};
pub use ensurer::{Provisioned, ResourceEnsurer};
pub use error::ProvisionError;
pub use poll::{PollOutcome, PollPolicy};
pub use provisioner::{AccessProvisioner, ROLE_DESCRIPTION, policy_name};
pub use reconciler::{RuleReconciler, desired_rule, destination_arn, merge_rule, rule_id};
pub use setup::{ReplicationSetup, SetupOptions, SetupOutcome, SetupStage};
pub use verifier::{
    DestinationReport, PROBE_PAYLOAD, ReplicationVerifier, VerificationProbe, VerificationReport,
    VerifyOptions, discover_destinations,
};

