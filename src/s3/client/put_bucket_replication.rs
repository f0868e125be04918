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

use crate::s3::builders::{PutBucketReplication, PutBucketReplicationBldr};
use crate::s3::client::S3Client;

impl S3Client {
    /// Creates a [`PutBucketReplication`] request builder.
    ///
    /// To execute the request, call [`PutBucketReplication::send()`](crate::s3::types::S3Api::send),
    /// which returns a [`Result`] containing a [`PutBucketReplicationResponse`](crate::s3::response::PutBucketReplicationResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use crr::s3::S3Client;
    /// use crr::s3::creds::StaticProvider;
    /// use crr::s3::http::BaseUrl;
    /// use crr::s3::response::PutBucketReplicationResponse;
    /// use crr::s3::types::{Destination, Filter, ReplicationConfig, ReplicationRule, S3Api};
    /// use crr::s3::response_traits::HasBucket;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let base_url = "https://s3.amazonaws.com".parse::<BaseUrl>().unwrap();
    ///     let static_provider = StaticProvider::new("AKIA...", "secret", None);
    ///     let client = S3Client::new(base_url, Some(static_provider)).unwrap();
    ///
    ///     let rule = ReplicationRule {
    ///         id: Some("replicate-to-dst".to_string()),
    ///         priority: Some(1),
    ///         filter: Some(Filter::with_prefix("")),
    ///         status: true,
    ///         delete_marker_replication_status: Some(false),
    ///         destination: Destination::new("arn:aws:s3:::dst"),
    ///         ..Default::default()
    ///     };
    ///     let config = ReplicationConfig {
    ///         role: Some("arn:aws:iam::123456789012:role/replication".to_string()),
    ///         rules: vec![rule],
    ///     };
    ///     let resp: PutBucketReplicationResponse = client
    ///         .put_bucket_replication("src")
    ///         .replication_config(config)
    ///         .build().send().await.unwrap();
    ///     println!("replication configured on bucket '{}'", resp.bucket());
    /// }
    /// ```
    pub fn put_bucket_replication<S: Into<String>>(&self, bucket: S) -> PutBucketReplicationBldr {
        PutBucketReplication::builder().client(self.clone()).bucket(bucket)
    }
}

