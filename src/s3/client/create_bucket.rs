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

use crate::s3::builders::{CreateBucket, CreateBucketBldr};
use crate::s3::client::S3Client;

impl S3Client {
    /// Creates a [`CreateBucket`] request builder.
    ///
    /// To execute the request, call [`CreateBucket::send()`](crate::s3::types::S3Api::send),
    /// which returns a [`Result`] containing a [`CreateBucketResponse`](crate::s3::response::CreateBucketResponse).
    ///
    /// A bucket that already exists is reported as `BucketAlreadyOwnedByYou` or
    /// `BucketAlreadyExists` depending on who owns it.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use crr::s3::S3Client;
    /// use crr::s3::creds::StaticProvider;
    /// use crr::s3::http::BaseUrl;
    /// use crr::s3::response::CreateBucketResponse;
    /// use crr::s3::types::S3Api;
    /// use crr::s3::response_traits::{HasBucket, HasRegion};
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let base_url = "https://s3.amazonaws.com".parse::<BaseUrl>().unwrap();
    ///     let static_provider = StaticProvider::new("AKIA...", "secret", None);
    ///     let client = S3Client::new(base_url, Some(static_provider)).unwrap();
    ///     let resp: CreateBucketResponse = client
    ///         .create_bucket("bucket-name")
    ///         .region(Some("us-west-2".to_string()))
    ///         .build().send().await.unwrap();
    ///     println!("made bucket '{}' in region '{}'", resp.bucket(), resp.region());
    /// }
    /// ```
    pub fn create_bucket<S: Into<String>>(&self, bucket: S) -> CreateBucketBldr {
        CreateBucket::builder().client(self.clone()).bucket(bucket)
    }
}

