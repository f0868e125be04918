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

use crate::s3::builders::{BucketCommon, BucketCommonBuilder};
use crate::s3::client::S3Client;
use crate::s3::error::ValidationErr;
use crate::s3::response::GetBucketReplicationResponse;
use crate::s3::types::{S3Api, S3Request, ToS3Request};
use crate::s3::utils::{check_bucket_name, insert};
use http::Method;

/// Argument builder for the [`GetBucketReplication`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_GetBucketReplication.html) S3 API operation.
pub type GetBucketReplication = BucketCommon<GetBucketReplicationPhantomData>;

#[doc(hidden)]
#[derive(Clone, Debug)]
pub struct GetBucketReplicationPhantomData;

pub type GetBucketReplicationBldr = BucketCommonBuilder<
    GetBucketReplicationPhantomData,
    ((S3Client,), (), (), (), (String,), ()),
>;

impl S3Api for GetBucketReplication {
    type S3Response = GetBucketReplicationResponse;
}

impl ToS3Request for GetBucketReplication {
    fn to_s3request(self) -> Result<S3Request, ValidationErr> {
        check_bucket_name(&self.bucket, true)?;

        Ok(S3Request::builder()
            .client(self.client)
            .method(Method::GET)
            .region(self.region)
            .bucket(self.bucket)
            .query_params(insert(self.extra_query_params, "replication"))
            .headers(self.extra_headers.unwrap_or_default())
            .build())
    }
}

