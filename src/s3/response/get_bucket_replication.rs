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

use crate::impl_has_s3fields;
use crate::s3::error::{Error, S3ServerError, ValidationErr};
use crate::s3::error_response::S3ErrorCode;
use crate::s3::response_traits::{HasBucket, HasRegion, HasS3Fields};
use crate::s3::types::{FromS3Response, ReplicationConfig, S3Request};
use async_trait::async_trait;
use bytes::{Buf, Bytes};
use http::HeaderMap;
use std::mem;
use xmltree::Element;

/// Response of the [get_bucket_replication()](crate::s3::client::S3Client::get_bucket_replication)
/// API call, providing the replication configuration of a bucket.
///
/// A bucket without any replication configuration yields an empty configuration
/// rather than an error.
#[derive(Clone, Debug)]
pub struct GetBucketReplicationResponse {
    request: S3Request,
    headers: HeaderMap,
    body: Bytes,
}

impl_has_s3fields!(GetBucketReplicationResponse);

impl HasBucket for GetBucketReplicationResponse {}
impl HasRegion for GetBucketReplicationResponse {}

#[async_trait]
impl FromS3Response for GetBucketReplicationResponse {
    async fn from_s3response(
        request: S3Request,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        match response {
            Ok(mut resp) => Ok(Self {
                request,
                headers: mem::take(resp.headers_mut()),
                body: resp.bytes().await?,
            }),
            Err(Error::S3Server(S3ServerError::S3Error(mut e)))
                if matches!(e.code(), S3ErrorCode::ReplicationConfigurationNotFoundError) =>
            {
                Ok(Self {
                    request,
                    headers: e.take_headers(),
                    body: Bytes::new(),
                })
            }
            Err(e) => Err(e),
        }
    }
}

impl GetBucketReplicationResponse {
    /// Returns the replication configuration of the bucket.
    pub fn config(&self) -> Result<ReplicationConfig, ValidationErr> {
        if self.body().is_empty() {
            return Ok(ReplicationConfig::default());
        }
        let root = Element::parse(self.body().clone().reader())?;
        ReplicationConfig::from_xml(&root)
    }
}

