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

use crate::iam::error::IamError;
use crate::s3::error::Error;
use thiserror::Error;

/// Fatal errors of the provisioning and verification flows.
///
/// None of these are retried; every stage aborts the run on the first one.
#[derive(Error, Debug)]
pub enum ProvisionError {
    #[error("bucket '{bucket}' already exists and is owned by another account")]
    OwnershipConflict { bucket: String },

    #[error("bucket '{bucket}' was created but not visible after {attempts} attempts")]
    BucketNotVisible { bucket: String, attempts: u32 },

    #[error("policy '{policy}' of role '{role}' was not readable after {attempts} attempts")]
    RoleNotUsable {
        role: String,
        policy: String,
        attempts: u32,
    },

    #[error("no replication destinations configured on bucket '{0}'")]
    NoDestinations(String),

    #[error(transparent)]
    Storage(#[from] Error),

    #[error(transparent)]
    Identity(#[from] IamError),
}

