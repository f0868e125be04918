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

use crate::s3::builders::{ListObjects, ListObjectsBldr};
use crate::s3::client::S3Client;

impl S3Client {
    /// Creates a [`ListObjects`] request builder for the V2 listing API.
    ///
    /// Call [`ListObjects::send()`](crate::s3::types::S3Api::send) for a single page, or
    /// [`ToStream::to_stream()`](crate::s3::types::ToStream::to_stream) to follow
    /// continuation tokens until the listing is exhausted.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use crr::s3::S3Client;
    /// use crr::s3::creds::StaticProvider;
    /// use crr::s3::http::BaseUrl;
    /// use crr::s3::types::ToStream;
    /// use futures_util::StreamExt;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let base_url = "http://localhost:9000/".parse::<BaseUrl>().unwrap();
    ///     let static_provider = StaticProvider::new("minioadmin", "minioadmin", None);
    ///     let client = S3Client::new(base_url, Some(static_provider)).unwrap();
    ///     let mut pages = client.list_objects("bucket-name").build().to_stream().await;
    ///     while let Some(page) = pages.next().await {
    ///         for entry in page.unwrap().contents {
    ///             println!("{}", entry.name);
    ///         }
    ///     }
    /// }
    /// ```
    pub fn list_objects<S: Into<String>>(&self, bucket: S) -> ListObjectsBldr {
        ListObjects::builder().client(self.clone()).bucket(bucket)
    }
}

