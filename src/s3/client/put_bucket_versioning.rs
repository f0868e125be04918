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

use crate::s3::builders::{PutBucketVersioning, PutBucketVersioningBldr};
use crate::s3::client::S3Client;

impl S3Client {
    /// Creates a [`PutBucketVersioning`] request builder.
    ///
    /// To execute the request, call [`PutBucketVersioning::send()`](crate::s3::types::S3Api::send),
    /// which returns a [`Result`] containing a [`PutBucketVersioningResponse`](crate::s3::response::PutBucketVersioningResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use crr::s3::S3Client;
    /// use crr::s3::creds::StaticProvider;
    /// use crr::s3::http::BaseUrl;
    /// use crr::s3::response::PutBucketVersioningResponse;
    /// use crr::s3::types::{S3Api, VersioningStatus};
    /// use crr::s3::response_traits::HasBucket;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let base_url = "http://localhost:9000/".parse::<BaseUrl>().unwrap();
    ///     let static_provider = StaticProvider::new("minioadmin", "minioadmin", None);
    ///     let client = S3Client::new(base_url, Some(static_provider)).unwrap();
    ///     let resp: PutBucketVersioningResponse = client
    ///         .put_bucket_versioning("bucket-name")
    ///         .versioning_status(VersioningStatus::Enabled)
    ///         .build().send().await.unwrap();
    ///     println!("enabled versioning on bucket '{}'", resp.bucket());
    /// }
    /// ```
    pub fn put_bucket_versioning<S: Into<String>>(&self, bucket: S) -> PutBucketVersioningBldr {
        PutBucketVersioning::builder().client(self.clone()).bucket(bucket)
    }
}

