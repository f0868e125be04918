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

use crate::iam::IamClient;
use crate::iam::error::IamError;
use crate::iam::policy::PolicyDocument;
use crate::iam::types::{IamApi, Role};
use crate::s3::S3Client;
use crate::s3::error::Error;
use crate::s3::error_response::S3ErrorCode;
use crate::s3::types::{ReplicationConfig, S3Api, ToStream, VersioningStatus};
use async_trait::async_trait;
use bytes::Bytes;
use futures_util::StreamExt;

/// A bucket together with the region it lives in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BucketEndpoint {
    pub name: String,
    pub region: String,
    /// Set once versioning has been enabled by this process; never cleared.
    pub versioning_enabled: bool,
}

impl BucketEndpoint {
    pub fn new(name: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            region: region.into(),
            versioning_enabled: false,
        }
    }
}

/// Object storage operations the provisioning and verification flows depend on.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    async fn bucket_exists(&self, bucket: &BucketEndpoint) -> Result<bool, Error>;

    /// Creates the bucket in `bucket.region`. An existing bucket is reported through
    /// the `BucketAlreadyOwnedByYou` and `BucketAlreadyExists` error codes.
    async fn create_bucket(&self, bucket: &BucketEndpoint) -> Result<(), Error>;

    async fn enable_versioning(&self, bucket: &BucketEndpoint) -> Result<(), Error>;

    /// Returns the replication configuration, empty when the bucket has none.
    async fn get_replication(&self, bucket: &BucketEndpoint) -> Result<ReplicationConfig, Error>;

    /// Replaces the whole replication configuration.
    async fn put_replication(
        &self,
        bucket: &BucketEndpoint,
        config: &ReplicationConfig,
    ) -> Result<(), Error>;

    async fn put_object(&self, bucket: &BucketEndpoint, key: &str, data: Bytes)
    -> Result<(), Error>;

    /// Returns `false` for a missing object rather than an error.
    async fn object_exists(&self, bucket: &BucketEndpoint, key: &str) -> Result<bool, Error>;

    /// Every key in the bucket, following pagination to the end.
    async fn list_keys(&self, bucket: &BucketEndpoint) -> Result<Vec<String>, Error>;

    /// The region the bucket lives in, with legacy aliases resolved.
    async fn bucket_region(&self, bucket: &str) -> Result<String, Error>;
}

/// Identity operations needed to delegate replication to the storage service.
#[async_trait]
pub trait IdentityBackend: Send + Sync {
    /// Creates a role; an existing role fails with `EntityAlreadyExists`.
    async fn create_role(
        &self,
        name: &str,
        trust_policy: &PolicyDocument,
        description: &str,
    ) -> Result<Role, IamError>;

    async fn get_role(&self, name: &str) -> Result<Role, IamError>;

    /// Stores an inline policy, overwriting one of the same name.
    async fn put_role_policy(
        &self,
        role_name: &str,
        policy_name: &str,
        document: &PolicyDocument,
    ) -> Result<(), IamError>;

    async fn get_role_policy(
        &self,
        role_name: &str,
        policy_name: &str,
    ) -> Result<PolicyDocument, IamError>;
}

/// `NoSuchKey` means absent; every other error is passed on.
fn object_presence<T>(stat: Result<T, Error>) -> Result<bool, Error> {
    match stat {
        Ok(_) => Ok(true),
        Err(e) if e.is_s3_code(&S3ErrorCode::NoSuchKey) => Ok(false),
        Err(e) => Err(e),
    }
}

#[async_trait]
impl StorageBackend for S3Client {
    async fn bucket_exists(&self, bucket: &BucketEndpoint) -> Result<bool, Error> {
        let resp = S3Client::bucket_exists(self, &bucket.name)
            .region(bucket.region.clone())
            .build()
            .send()
            .await?;
        Ok(resp.exists())
    }

    async fn create_bucket(&self, bucket: &BucketEndpoint) -> Result<(), Error> {
        S3Client::create_bucket(self, &bucket.name)
            .region(bucket.region.clone())
            .build()
            .send()
            .await?;
        Ok(())
    }

    async fn enable_versioning(&self, bucket: &BucketEndpoint) -> Result<(), Error> {
        self.put_bucket_versioning(&bucket.name)
            .region(bucket.region.clone())
            .versioning_status(VersioningStatus::Enabled)
            .build()
            .send()
            .await?;
        Ok(())
    }

    async fn get_replication(&self, bucket: &BucketEndpoint) -> Result<ReplicationConfig, Error> {
        let resp = self
            .get_bucket_replication(&bucket.name)
            .region(bucket.region.clone())
            .build()
            .send()
            .await?;
        Ok(resp.config()?)
    }

    async fn put_replication(
        &self,
        bucket: &BucketEndpoint,
        config: &ReplicationConfig,
    ) -> Result<(), Error> {
        self.put_bucket_replication(&bucket.name)
            .region(bucket.region.clone())
            .replication_config(config.clone())
            .build()
            .send()
            .await?;
        Ok(())
    }

    async fn put_object(
        &self,
        bucket: &BucketEndpoint,
        key: &str,
        data: Bytes,
    ) -> Result<(), Error> {
        S3Client::put_object(self, &bucket.name, key, data)
            .region(bucket.region.clone())
            .content_type("text/plain".to_string())
            .build()
            .send()
            .await?;
        Ok(())
    }

    async fn object_exists(&self, bucket: &BucketEndpoint, key: &str) -> Result<bool, Error> {
        let stat = self
            .stat_object(&bucket.name, key)
            .region(bucket.region.clone())
            .build()
            .send()
            .await;
        object_presence(stat)
    }

    async fn list_keys(&self, bucket: &BucketEndpoint) -> Result<Vec<String>, Error> {
        let mut pages = self
            .list_objects(&bucket.name)
            .region(bucket.region.clone())
            .build()
            .to_stream()
            .await;

        let mut keys = Vec::new();
        while let Some(page) = pages.next().await {
            keys.extend(page?.contents.into_iter().map(|entry| entry.name));
        }
        Ok(keys)
    }

    async fn bucket_region(&self, bucket: &str) -> Result<String, Error> {
        let resp = self.get_bucket_location(bucket).build().send().await?;
        Ok(resp.bucket_region()?)
    }
}

#[async_trait]
impl IdentityBackend for IamClient {
    async fn create_role(
        &self,
        name: &str,
        trust_policy: &PolicyDocument,
        description: &str,
    ) -> Result<Role, IamError> {
        let resp = IamClient::create_role(self, name, trust_policy.to_string())
            .description(description.to_string())
            .build()
            .send()
            .await?;
        Ok(resp.role)
    }

    async fn get_role(&self, name: &str) -> Result<Role, IamError> {
        Ok(IamClient::get_role(self, name).build().send().await?.role)
    }

    async fn put_role_policy(
        &self,
        role_name: &str,
        policy_name: &str,
        document: &PolicyDocument,
    ) -> Result<(), IamError> {
        IamClient::put_role_policy(self, role_name, policy_name, document.to_string())
            .build()
            .send()
            .await?;
        Ok(())
    }

    async fn get_role_policy(
        &self,
        role_name: &str,
        policy_name: &str,
    ) -> Result<PolicyDocument, IamError> {
        IamClient::get_role_policy(self, role_name, policy_name)
            .build()
            .send()
            .await?
            .policy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::s3::client::create_s3_error_response;
    use crate::s3::error_response::S3ErrorResponse;
    use crate::s3::http::BaseUrl;
    use crate::s3::response::GetBucketLocationResponse;
    use crate::s3::types::{FromS3Response, ToS3Request};
    use http::HeaderMap;

    const S3_NS: &str = "http://s3.amazonaws.com/doc/2006-03-01/";

    fn client() -> S3Client {
        let base_url: BaseUrl = "https://s3.amazonaws.com".parse().unwrap();
        S3Client::new::<crate::s3::creds::StaticProvider>(base_url, None).unwrap()
    }

    /// Region reported for a bucket whose location answer holds `constraint`.
    async fn region_from(constraint: &str) -> String {
        let request = client()
            .get_bucket_location("dst")
            .build()
            .to_s3request()
            .unwrap();
        let body = match constraint {
            "" => format!("<LocationConstraint xmlns=\"{S3_NS}\"/>"),
            c => format!("<LocationConstraint xmlns=\"{S3_NS}\">{c}</LocationConstraint>"),
        };
        let response = http::Response::builder().status(200).body(body).unwrap();
        GetBucketLocationResponse::from_s3response(request, Ok(response.into()))
            .await
            .unwrap()
            .bucket_region()
            .unwrap()
    }

    #[test]
    fn head_404_on_object_reads_as_absent() {
        let e = create_s3_error_response(
            Bytes::new(),
            404,
            HeaderMap::new(),
            "/dst/p.txt",
            Some("dst"),
            Some("p.txt"),
        )
        .unwrap();
        assert!(!object_presence::<()>(Err(e.into())).unwrap());
        assert!(object_presence(Ok(())).unwrap());
    }

    #[test]
    fn other_stat_errors_are_passed_on() {
        let e: Error = S3ErrorResponse::from_code(S3ErrorCode::AccessDenied, "denied").into();
        let err = object_presence::<()>(Err(e)).unwrap_err();
        assert!(err.is_s3_code(&S3ErrorCode::AccessDenied));

        let e: Error = S3ErrorResponse::from_code(S3ErrorCode::NoSuchBucket, "gone").into();
        assert!(object_presence::<()>(Err(e)).is_err());
    }

    #[tokio::test]
    async fn bucket_region_resolves_location_aliases() {
        assert_eq!(region_from("EU").await, "eu-west-1");
        assert_eq!(region_from("US").await, "us-east-1");
        assert_eq!(region_from("").await, "us-east-1");
        assert_eq!(region_from("us-west-2").await, "us-west-2");
    }
}

