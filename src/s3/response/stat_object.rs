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

use crate::s3::header_constants::{CONTENT_LENGTH, X_AMZ_REPLICATION_STATUS};
use crate::s3::response_traits::{
    HasBucket, HasEtagFromHeaders, HasObject, HasRegion, HasS3Fields, HasVersion,
};
use crate::s3::types::S3Request;
use crate::{impl_from_s3response, impl_has_s3fields};
use bytes::Bytes;
use http::HeaderMap;

/// Response of the [stat_object()](crate::s3::client::S3Client::stat_object) API call.
#[derive(Clone, Debug)]
pub struct StatObjectResponse {
    request: S3Request,
    headers: HeaderMap,
    body: Bytes,
}

impl_from_s3response!(StatObjectResponse);
impl_has_s3fields!(StatObjectResponse);

impl HasBucket for StatObjectResponse {}
impl HasRegion for StatObjectResponse {}
impl HasObject for StatObjectResponse {}
impl HasVersion for StatObjectResponse {}
impl HasEtagFromHeaders for StatObjectResponse {}

impl StatObjectResponse {
    /// Size of the object in bytes, as reported by `Content-Length`.
    pub fn size(&self) -> u64 {
        self.headers()
            .get(CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    }

    /// `PENDING`, `COMPLETED`, `FAILED` or `REPLICA` for objects covered by a replication rule.
    pub fn replication_status(&self) -> Option<&str> {
        self.headers()
            .get(X_AMZ_REPLICATION_STATUS)
            .and_then(|v| v.to_str().ok())
    }
}

