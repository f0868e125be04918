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

//! Typed error responses returned by S3 compatible servers

use crate::s3::error::ValidationErr;
use crate::s3::utils::{get_text_default, get_text_option};
use bytes::{Buf, Bytes};
use http::HeaderMap;
use std::convert::Infallible;
use std::str::FromStr;
use xmltree::Element;

/// Error codes returned by the server, limited to the ones the replication flow
/// has to tell apart.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum S3ErrorCode {
    #[default]
    NoError,
    /// The specified bucket does not exist
    NoSuchBucket,
    /// The specified key does not exist
    NoSuchKey,
    /// The requested bucket name is not available; it is owned by another account
    BucketAlreadyExists,
    /// Your previous request to create the named bucket succeeded and you already own it
    BucketAlreadyOwnedByYou,
    /// The bucket has no replication configuration
    ReplicationConfigurationNotFoundError,
    AccessDenied,
    PermanentRedirect,
    Redirect,
    BadRequest,
    MethodNotAllowed,
    ResourceNotFound,
    ResourceConflict,

    Other(String), // any error code not explicitly defined
}

#[allow(dead_code)]
const ALL_S3_ERROR_CODES: &[S3ErrorCode] = &[
    S3ErrorCode::NoError,
    S3ErrorCode::NoSuchBucket,
    S3ErrorCode::NoSuchKey,
    S3ErrorCode::BucketAlreadyExists,
    S3ErrorCode::BucketAlreadyOwnedByYou,
    S3ErrorCode::ReplicationConfigurationNotFoundError,
    S3ErrorCode::AccessDenied,
    S3ErrorCode::PermanentRedirect,
    S3ErrorCode::Redirect,
    S3ErrorCode::BadRequest,
    S3ErrorCode::MethodNotAllowed,
    S3ErrorCode::ResourceNotFound,
    S3ErrorCode::ResourceConflict,
];

impl FromStr for S3ErrorCode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "noerror" => S3ErrorCode::NoError,
            "nosuchbucket" => S3ErrorCode::NoSuchBucket,
            "nosuchkey" => S3ErrorCode::NoSuchKey,
            "bucketalreadyexists" => S3ErrorCode::BucketAlreadyExists,
            "bucketalreadyownedbyyou" => S3ErrorCode::BucketAlreadyOwnedByYou,
            "replicationconfigurationnotfounderror" => {
                S3ErrorCode::ReplicationConfigurationNotFoundError
            }
            "accessdenied" => S3ErrorCode::AccessDenied,
            "permanentredirect" => S3ErrorCode::PermanentRedirect,
            "redirect" => S3ErrorCode::Redirect,
            "badrequest" => S3ErrorCode::BadRequest,
            "methodnotallowed" => S3ErrorCode::MethodNotAllowed,
            "resourcenotfound" => S3ErrorCode::ResourceNotFound,
            "resourceconflict" => S3ErrorCode::ResourceConflict,
            _ => S3ErrorCode::Other(s.to_owned()),
        })
    }
}

impl std::fmt::Display for S3ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            S3ErrorCode::NoError => write!(f, "NoError"),
            S3ErrorCode::NoSuchBucket => write!(f, "NoSuchBucket"),
            S3ErrorCode::NoSuchKey => write!(f, "NoSuchKey"),
            S3ErrorCode::BucketAlreadyExists => write!(f, "BucketAlreadyExists"),
            S3ErrorCode::BucketAlreadyOwnedByYou => write!(f, "BucketAlreadyOwnedByYou"),
            S3ErrorCode::ReplicationConfigurationNotFoundError => {
                write!(f, "ReplicationConfigurationNotFoundError")
            }
            S3ErrorCode::AccessDenied => write!(f, "AccessDenied"),
            S3ErrorCode::PermanentRedirect => write!(f, "PermanentRedirect"),
            S3ErrorCode::Redirect => write!(f, "Redirect"),
            S3ErrorCode::BadRequest => write!(f, "BadRequest"),
            S3ErrorCode::MethodNotAllowed => write!(f, "MethodNotAllowed"),
            S3ErrorCode::ResourceNotFound => write!(f, "ResourceNotFound"),
            S3ErrorCode::ResourceConflict => write!(f, "ResourceConflict"),
            S3ErrorCode::Other(code) => write!(f, "{code}"),
        }
    }
}

/// Typed error returned by all S3 API operations.
#[derive(Clone, Debug, Default)]
pub struct S3ErrorResponse {
    code: S3ErrorCode,
    message: Option<String>,
    headers: HeaderMap,
    resource: String,
    request_id: String,
    host_id: String,
    bucket_name: Option<String>,
    object_name: Option<String>,
}

impl S3ErrorResponse {
    pub fn new(
        headers: HeaderMap,
        code: S3ErrorCode,
        message: Option<String>,
        resource: String,
        request_id: String,
        host_id: String,
        bucket_name: Option<String>,
        object_name: Option<String>,
    ) -> Self {
        Self {
            code,
            message,
            headers,
            resource,
            request_id,
            host_id,
            bucket_name,
            object_name,
        }
    }

    /// Builds a response carrying only a code and message.
    pub fn from_code(code: S3ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: Some(message.into()),
            ..Default::default()
        }
    }

    /// Parses the `<Error>` document of a failed request.
    pub fn new_from_body(body: Bytes, headers: HeaderMap) -> Result<Self, ValidationErr> {
        let root = Element::parse(body.reader())?;
        let code = get_text_default(&root, "Code");
        Ok(Self {
            code: code.parse().unwrap_or_default(),
            message: get_text_option(&root, "Message"),
            headers,
            resource: get_text_default(&root, "Resource"),
            request_id: get_text_default(&root, "RequestId"),
            host_id: get_text_default(&root, "HostId"),
            bucket_name: get_text_option(&root, "BucketName"),
            object_name: get_text_option(&root, "Key"),
        })
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
    /// Take ownership of the headers as returned by the server.
    pub fn take_headers(&mut self) -> HeaderMap {
        std::mem::take(&mut self.headers)
    }
    pub fn code(&self) -> &S3ErrorCode {
        &self.code
    }
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    pub fn resource(&self) -> &str {
        &self.resource
    }
    pub fn request_id(&self) -> &str {
        &self.request_id
    }
    pub fn host_id(&self) -> &str {
        &self.host_id
    }
    pub fn bucket_name(&self) -> Option<&str> {
        self.bucket_name.as_deref()
    }
    pub fn object_name(&self) -> Option<&str> {
        self.object_name.as_deref()
    }
}

impl std::fmt::Display for S3ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "S3 operation failed; code: {}, message: {}, resource: {}, request_id: {}, host_id: {}, bucket_name: {}, object_name: {}",
            self.code,
            self.message.as_deref().unwrap_or_default(),
            self.resource,
            self.request_id,
            self.host_id,
            self.bucket_name.as_deref().unwrap_or_default(),
            self.object_name.as_deref().unwrap_or_default(),
        )
    }
}

impl std::error::Error for S3ErrorResponse {}
