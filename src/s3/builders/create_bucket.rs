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

use crate::s3::client::{DEFAULT_REGION, S3Client};
use crate::s3::error::ValidationErr;
use crate::s3::multimap_ext::Multimap;
use crate::s3::response::CreateBucketResponse;
use crate::s3::types::{S3Api, S3Request, ToS3Request};
use crate::s3::utils::check_bucket_name;
use bytes::Bytes;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for the [`CreateBucket`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_CreateBucket.html) S3 API operation.
///
/// This struct constructs the parameters required for the [`S3Client::create_bucket`](crate::s3::client::S3Client::create_bucket) method.
#[derive(Clone, Debug, TypedBuilder)]
pub struct CreateBucket {
    #[builder(!default)] // force required
    client: S3Client,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    /// Region to create the bucket in; the endpoint's region or `us-east-1` when absent.
    #[builder(default, setter(into))]
    region: Option<String>,
    #[builder(setter(into))] // force required + accept Into<String>
    bucket: String,
}

pub type CreateBucketBldr = CreateBucketBuilder<((S3Client,), (), (), (), (String,))>;

impl S3Api for CreateBucket {
    type S3Response = CreateBucketResponse;
}

impl ToS3Request for CreateBucket {
    fn to_s3request(self) -> Result<S3Request, ValidationErr> {
        check_bucket_name(&self.bucket, true)?;

        let region: String = match self.region {
            Some(r) if !r.is_empty() => r,
            _ => self
                .client
                .get_region_from_url()
                .unwrap_or(DEFAULT_REGION)
                .to_string(),
        };

        // The default region rejects an explicit location constraint.
        let body: Option<Bytes> = match region.as_str() {
            DEFAULT_REGION => None,
            _ => Some(Bytes::from(format!(
                "<CreateBucketConfiguration><LocationConstraint>{region}</LocationConstraint></CreateBucketConfiguration>"
            ))),
        };

        Ok(S3Request::builder()
            .client(self.client)
            .method(Method::PUT)
            .region(Some(region))
            .bucket(self.bucket)
            .query_params(self.extra_query_params.unwrap_or_default())
            .headers(self.extra_headers.unwrap_or_default())
            .body(body)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::s3::creds::StaticProvider;

    fn client(endpoint: &str) -> S3Client {
        S3Client::new::<StaticProvider>(endpoint.parse().unwrap(), None).unwrap()
    }

    fn body_for(client: S3Client, region: Option<&str>) -> Option<Bytes> {
        let builder = CreateBucket::builder().client(client).bucket("dst");
        let req = match region {
            Some(r) => builder.region(Some(r.to_string())).build(),
            None => builder.build(),
        };
        req.to_s3request().unwrap().body().cloned()
    }

    #[test]
    fn default_region_sends_no_location_constraint() {
        let s3 = client("https://s3.amazonaws.com");
        assert_eq!(body_for(s3.clone(), Some("us-east-1")), None);
        assert_eq!(body_for(s3, None), None);
    }

    #[test]
    fn other_regions_send_location_constraint() {
        let body = body_for(client("https://s3.amazonaws.com"), Some("us-west-2")).unwrap();
        let body = std::str::from_utf8(&body).unwrap();
        assert!(body.contains("<LocationConstraint>us-west-2</LocationConstraint>"));
        assert!(body.starts_with("<CreateBucketConfiguration>"));
    }

    #[test]
    fn endpoint_region_is_used_when_none_is_given() {
        let body = body_for(client("https://s3.eu-central-1.amazonaws.com"), None).unwrap();
        assert!(
            std::str::from_utf8(&body)
                .unwrap()
                .contains("<LocationConstraint>eu-central-1</LocationConstraint>")
        );
    }
}

