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

use crate::impl_has_s3fields;
use crate::s3::error::{Error, ValidationErr};
use crate::s3::response_traits::{HasBucket, HasRegion};
use crate::s3::types::{FromS3Response, ListEntry, S3Request};
use crate::s3::utils::{get_children, get_text_option, get_text_result};
use async_trait::async_trait;
use bytes::{Buf, Bytes};
use chrono::{DateTime, Utc};
use http::HeaderMap;
use std::mem;
use xmltree::Element;

/// One page of a [list_objects()](crate::s3::client::S3Client::list_objects) listing.
#[derive(Clone, Debug)]
pub struct ListObjectsResponse {
    request: S3Request,
    headers: HeaderMap,
    body: Bytes,

    pub contents: Vec<ListEntry>,
    pub is_truncated: bool,
    pub next_continuation_token: Option<String>,
}

impl_has_s3fields!(ListObjectsResponse);

impl HasBucket for ListObjectsResponse {}
impl HasRegion for ListObjectsResponse {}

fn url_decode(encoding_type: Option<&str>, value: String) -> Result<String, ValidationErr> {
    if encoding_type == Some("url") {
        return urlencoding::decode(&value)
            .map(|v| v.into_owned())
            .map_err(|e| ValidationErr::xml_error(format!("invalid url-encoded key: {e}")));
    }
    Ok(value)
}

fn parse_entry(content: &Element, encoding_type: Option<&str>) -> Result<ListEntry, ValidationErr> {
    Ok(ListEntry {
        name: url_decode(encoding_type, get_text_result(content, "Key")?)?,
        last_modified: get_text_option(content, "LastModified")
            .and_then(|v| DateTime::parse_from_rfc3339(&v).ok())
            .map(|v| v.with_timezone(&Utc)),
        etag: get_text_option(content, "ETag").map(|v| v.trim_matches('"').to_string()),
        size: match get_text_option(content, "Size") {
            Some(v) if !v.is_empty() => Some(v.parse::<u64>()?),
            _ => None,
        },
        storage_class: get_text_option(content, "StorageClass"),
    })
}

#[async_trait]
impl FromS3Response for ListObjectsResponse {
    async fn from_s3response(
        request: S3Request,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp = response?;
        let headers = mem::take(resp.headers_mut());
        let body = resp.bytes().await?;

        let root = Element::parse(body.clone().reader()).map_err(ValidationErr::from)?;
        let encoding_type = get_text_option(&root, "EncodingType");
        let contents = get_children(&root, "Contents")
            .into_iter()
            .map(|c| parse_entry(c, encoding_type.as_deref()))
            .collect::<Result<Vec<_>, _>>()?;
        let is_truncated = get_text_option(&root, "IsTruncated")
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Ok(Self {
            request,
            headers,
            body,
            contents,
            is_truncated,
            next_continuation_token: get_text_option(&root, "NextContinuationToken")
                .filter(|v| !v.is_empty()),
        })
    }
}

