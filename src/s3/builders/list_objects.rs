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
use crate::s3::error::{Error, ValidationErr};
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::response::ListObjectsResponse;
use crate::s3::types::{S3Api, S3Request, ToS3Request, ToStream};
use crate::s3::utils::check_bucket_name;
use async_trait::async_trait;
use futures_util::Stream;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for one page of the [`ListObjectsV2`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_ListObjectsV2.html)
/// S3 API operation. Use [`ToStream::to_stream`] to walk every page.
#[derive(Clone, Debug, TypedBuilder)]
pub struct ListObjects {
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
    #[builder(default, setter(into))]
    prefix: Option<String>,
    #[builder(default, setter(into))]
    continuation_token: Option<String>,
    #[builder(default, setter(into))]
    max_keys: Option<u16>,
}

pub type ListObjectsBldr =
    ListObjectsBuilder<((S3Client,), (), (), (), (String,), (), (), ())>;

impl S3Api for ListObjects {
    type S3Response = ListObjectsResponse;
}

impl ToS3Request for ListObjects {
    fn to_s3request(self) -> Result<S3Request, ValidationErr> {
        check_bucket_name(&self.bucket, true)?;

        let mut query_params: Multimap = self.extra_query_params.unwrap_or_default();
        query_params.add("list-type", "2");
        query_params.add("encoding-type", "url");
        query_params.add("max-keys", self.max_keys.unwrap_or(1000).to_string());
        query_params.add("prefix", self.prefix.unwrap_or_default());
        if let Some(v) = self.continuation_token {
            query_params.add("continuation-token", v);
        }

        Ok(S3Request::builder()
            .client(self.client)
            .method(Method::GET)
            .region(self.region)
            .bucket(self.bucket)
            .query_params(query_params)
            .headers(self.extra_headers.unwrap_or_default())
            .build())
    }
}

#[async_trait]
impl ToStream for ListObjects {
    type Item = ListObjectsResponse;

    async fn to_stream(self) -> Box<dyn Stream<Item = Result<Self::Item, Error>> + Unpin + Send> {
        Box::new(Box::pin(futures_util::stream::unfold(
            Some(self),
            |state| async move {
                let page = state?;
                let next = page.clone();
                match page.send().await {
                    Ok(resp) => {
                        let following = match (resp.is_truncated, &resp.next_continuation_token) {
                            (true, Some(token)) => Some(ListObjects {
                                continuation_token: Some(token.clone()),
                                ..next
                            }),
                            _ => None,
                        };
                        Some((Ok(resp), following))
                    }
                    Err(e) => Some((Err(e), None)),
                }
            },
        )))
    }
}

