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

//! # Cross-region replication provisioning (`s3-crr`)
//!
//! This crate sets up and verifies cross-region replication (CRR) between two
//! S3 compatible buckets. Provisioning runs four fail-fast stages:
//!
//! 1. ensure the destination bucket exists (create-or-adopt),
//! 2. enable versioning on the source and destination buckets,
//! 3. create-or-adopt a delegation role and attach a least-privilege inline policy,
//! 4. merge a replication rule for the destination into the source bucket's
//!    replication configuration without disturbing other rules.
//!
//! Verification is a separate step: a probe object is uploaded to the source bucket
//! and every destination found in the replication configuration is polled for it.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use crr::iam::IamClient;
//! use crr::replication::{BucketEndpoint, ReplicationSetup, SetupOptions};
//! use crr::s3::S3Client;
//! use crr::s3::creds::StaticProvider;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//!     let provider = StaticProvider::new("AKIA...", "secret", None);
//!     let s3 = S3Client::new("https://s3.amazonaws.com".parse()?, Some(provider.clone()))?;
//!     let iam = IamClient::new("https://iam.amazonaws.com".parse()?, Some(provider))?;
//!
//!     let setup = ReplicationSetup::new(s3, iam, SetupOptions::default());
//!     let outcome = setup
//!         .run(
//!             BucketEndpoint::new("src-bucket", "us-east-1"),
//!             BucketEndpoint::new("dst-bucket", "us-west-2"),
//!             "s3-replication-role",
//!         )
//!         .await?;
//!     println!("replicating with role {}", outcome.role.arn);
//!     Ok(())
//! }
//! ```
//!
//! ## Design
//! - [`s3`] and [`iam`] are thin signed HTTP clients in the request-builder style
//! - [`replication`] holds the reconciliation logic, generic over the
//!   [`StorageBackend`](replication::StorageBackend) and
//!   [`IdentityBackend`](replication::IdentityBackend) traits
//! - Reconciliation of one source bucket must not run concurrently; the service
//!   offers no conditional write for replication configurations

#![allow(clippy::result_large_err)]
#![allow(clippy::too_many_arguments)]

pub mod iam;
pub mod replication;
pub mod s3;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;

