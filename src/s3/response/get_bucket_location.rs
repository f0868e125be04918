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

use crate::s3::error::ValidationErr;
use crate::s3::response_traits::{HasBucket, HasS3Fields};
use crate::s3::types::S3Request;
use crate::s3::utils::normalize_location_constraint;
use crate::{impl_from_s3response, impl_has_s3fields};
use bytes::{Buf, Bytes};
use http::HeaderMap;
use xmltree::Element;

/// Response of the [get_bucket_location()](crate::s3::client::S3Client::get_bucket_location) API call.
#[derive(Clone, Debug)]
pub struct GetBucketLocationResponse {
    request: S3Request,
    headers: HeaderMap,
    body: Bytes,
}

impl_from_s3response!(GetBucketLocationResponse);
impl_has_s3fields!(GetBucketLocationResponse);

impl HasBucket for GetBucketLocationResponse {}

impl GetBucketLocationResponse {
    /// The raw `LocationConstraint`, which is empty for buckets in `us-east-1`.
    pub fn location_constraint(&self) -> Result<String, ValidationErr> {
        let root = Element::parse(self.body().clone().reader())?;
        Ok(root.get_text().unwrap_or_default().trim().to_string())
    }

    /// The region of the bucket with legacy aliases resolved.
    pub fn bucket_region(&self) -> Result<String, ValidationErr> {
        Ok(normalize_location_constraint(&self.location_constraint()?))
    }
}

