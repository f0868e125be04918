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

use crate::s3::builders::{GetBucketLocation, GetBucketLocationBldr};
use crate::s3::client::S3Client;

impl S3Client {
    /// Creates a [`GetBucketLocation`] request builder to look up the region a bucket lives in.
    ///
    /// To execute the request, call [`GetBucketLocation::send()`](crate::s3::types::S3Api::send),
    /// which returns a [`Result`] containing a [`GetBucketLocationResponse`](crate::s3::response::GetBucketLocationResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use crr::s3::S3Client;
    /// use crr::s3::creds::StaticProvider;
    /// use crr::s3::http::BaseUrl;
    /// use crr::s3::response::GetBucketLocationResponse;
    /// use crr::s3::types::S3Api;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let base_url = "https://s3.amazonaws.com".parse::<BaseUrl>().unwrap();
    ///     let static_provider = StaticProvider::new("AKIA...", "secret", None);
    ///     let client = S3Client::new(base_url, Some(static_provider)).unwrap();
    ///     let resp: GetBucketLocationResponse = client
    ///         .get_bucket_location("bucket-name")
    ///         .build().send().await.unwrap();
    ///     println!("bucket lives in {}", resp.bucket_region().unwrap());
    /// }
    /// ```
    pub fn get_bucket_location<S: Into<String>>(&self, bucket: S) -> GetBucketLocationBldr {
        GetBucketLocation::builder().client(self.clone()).bucket(bucket)
    }
}

