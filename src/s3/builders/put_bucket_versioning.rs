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

use crate::s3::client::S3Client;
use crate::s3::error::ValidationErr;
use crate::s3::header_constants::CONTENT_MD5;
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::response::PutBucketVersioningResponse;
use crate::s3::types::{S3Api, S3Request, ToS3Request, VersioningStatus};
use crate::s3::utils::{check_bucket_name, insert, md5sum_hash};
use bytes::Bytes;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for the [`PutBucketVersioning`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_PutBucketVersioning.html) S3 API operation.
///
/// This struct constructs the parameters required for the [`S3Client::put_bucket_versioning`](crate::s3::client::S3Client::put_bucket_versioning) method.
#[derive(Clone, Debug, TypedBuilder)]
pub struct PutBucketVersioning {
    #[builder(!default)] // force required
    client: S3Client,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    #[builder(default, setter(into))]
    region: Option<String>,
    #[builder(setter(into))] // force required + accept Into<String>
    bucket: String,
    /// Desired versioning status for the bucket.
    #[builder(!default)]
    versioning_status: VersioningStatus,
}

pub type PutBucketVersioningBldr =
    PutBucketVersioningBuilder<((S3Client,), (), (), (), (String,), ())>;

impl S3Api for PutBucketVersioning {
    type S3Response = PutBucketVersioningResponse;
}

impl ToS3Request for PutBucketVersioning {
    fn to_s3request(self) -> Result<S3Request, ValidationErr> {
        check_bucket_name(&self.bucket, true)?;

        let data = format!(
            "<VersioningConfiguration><Status>{}</Status></VersioningConfiguration>",
            self.versioning_status
        );
        let mut headers: Multimap = self.extra_headers.unwrap_or_default();
        headers.add(CONTENT_MD5, md5sum_hash(data.as_bytes()));

        Ok(S3Request::builder()
            .client(self.client)
            .method(Method::PUT)
            .region(self.region)
            .bucket(self.bucket)
            .query_params(insert(self.extra_query_params, "versioning"))
            .headers(headers)
            .body(Bytes::from(data))
            .build())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::s3::creds::StaticProvider;

    #[test]
    fn body_carries_versioning_status() {
        let client =
            S3Client::new::<StaticProvider>("https://s3.amazonaws.com".parse().unwrap(), None)
                .unwrap();
        let req = client
            .put_bucket_versioning("src")
            .versioning_status(VersioningStatus::Suspended)
            .build()
            .to_s3request()
            .unwrap();
        let body = req.body().cloned().unwrap();
        assert_eq!(
            std::str::from_utf8(&body).unwrap(),
            "<VersioningConfiguration><Status>Suspended</Status></VersioningConfiguration>"
        );
    }
}
