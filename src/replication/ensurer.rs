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
use crate::s3::error_response::S3ErrorCode;

/// Outcome of a create-or-adopt step.
///
/// A resource owned by someone else is never a `Provisioned`; it surfaces as
/// [`ProvisionError::OwnershipConflict`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Provisioned<T> {
    /// The resource did not exist and was created by this run.
    Created(T),
    /// The resource already existed under the caller's ownership and was reused.
    Adopted(T),
}

impl<T> Provisioned<T> {
    pub fn is_created(&self) -> bool {
        matches!(self, Provisioned::Created(_))
    }

    pub fn handle(&self) -> &T {
        match self {
            Provisioned::Created(v) | Provisioned::Adopted(v) => v,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            Provisioned::Created(v) | Provisioned::Adopted(v) => v,
        }
    }
}

/// Creates-or-confirms buckets and turns on versioning.
#[derive(Debug)]
pub struct ResourceEnsurer<'a, S: ?Sized> {
    storage: &'a S,
    visibility: PollPolicy,
}

impl<'a, S: StorageBackend + ?Sized> ResourceEnsurer<'a, S> {
    pub fn new(storage: &'a S, visibility: PollPolicy) -> Self {
        Self {
            storage,
            visibility,
        }
    }

    /// Makes sure `bucket` exists in its region.
    ///
    /// A missing bucket is created and then polled until it is visible, so the next
    /// stage can use it at once. A bucket owned by another account aborts with
    /// [`ProvisionError::OwnershipConflict`].
    pub async fn ensure_bucket(
        &self,
        bucket: &BucketEndpoint,
    ) -> Result<Provisioned<BucketEndpoint>, ProvisionError> {
        match self.storage.bucket_exists(bucket).await {
            Ok(true) => {
                log::debug!("bucket '{}' already exists", bucket.name);
                return Ok(Provisioned::Adopted(bucket.clone()));
            }
            Ok(false) => {}
            // HEAD answers 403 both for foreign buckets and for missing permissions;
            // the create call tells them apart.
            Err(e) => log::debug!("checking bucket '{}' failed: {e}", bucket.name),
        }

        match self.storage.create_bucket(bucket).await {
            Ok(()) => {
                log::info!("created bucket '{}' in {}", bucket.name, bucket.region);
            }
            Err(e) if e.is_s3_code(&S3ErrorCode::BucketAlreadyOwnedByYou) => {
                log::debug!("bucket '{}' is already owned by us", bucket.name);
                return Ok(Provisioned::Adopted(bucket.clone()));
            }
            Err(e) if e.is_s3_code(&S3ErrorCode::BucketAlreadyExists) => {
                return Err(ProvisionError::OwnershipConflict {
                    bucket: bucket.name.clone(),
                });
            }
            Err(e) => return Err(e.into()),
        }

        self.wait_until_visible(bucket).await?;
        Ok(Provisioned::Created(bucket.clone()))
    }

    async fn wait_until_visible(&self, bucket: &BucketEndpoint) -> Result<(), ProvisionError> {
        let storage = self.storage;
        let outcome = self
            .visibility
            .poll(|attempt| async move {
                match storage.bucket_exists(bucket).await {
                    Ok(exists) => exists,
                    Err(e) => {
                        log::debug!(
                            "bucket '{}' not visible yet (attempt {attempt}): {e}",
                            bucket.name
                        );
                        false
                    }
                }
            })
            .await;

        if outcome.found {
            Ok(())
        } else {
            Err(ProvisionError::BucketNotVisible {
                bucket: bucket.name.clone(),
                attempts: outcome.attempts,
            })
        }
    }

    /// Sets versioning to `Enabled`. Enabling an already versioned bucket is a no-op at
    /// the service, so there is no read before the write.
    pub async fn enable_versioning(
        &self,
        bucket: &mut BucketEndpoint,
    ) -> Result<(), ProvisionError> {
        self.storage.enable_versioning(bucket).await?;
        bucket.versioning_enabled = true;
        log::info!("enabled versioning on bucket '{}'", bucket.name);
        Ok(())
    }
}

