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

//! Error definitions for S3 operations

use crate::s3::error_response::{S3ErrorCode, S3ErrorResponse};
use thiserror::Error;

/// Errors detected on the client side before or while building a request,
/// or while decoding a response.
#[derive(Error, Debug)]
pub enum ValidationErr {
    #[error("invalid bucket name '{name}': {reason}")]
    InvalidBucketName { name: String, reason: String },

    #[error("invalid object name: {0}")]
    InvalidObjectName(String),

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("URL build error: {0}")]
    UrlBuildError(String),

    #[error("invalid URI: {0}")]
    InvalidUri(#[from] http::uri::InvalidUri),

    #[error("XML parse error: {0}")]
    XmlParseError(#[from] xmltree::ParseError),

    #[error("XML error: {0}")]
    XmlError(String),

    #[error("header value is not valid text: {0}")]
    StrError(#[from] reqwest::header::ToStrError),

    #[error("integer parse error: {0}")]
    IntError(#[from] std::num::ParseIntError),

    #[error("invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("failed to configure HTTP client: {0}")]
    HttpClient(reqwest::Error),
}

impl ValidationErr {
    pub fn xml_error(message: impl Into<String>) -> Self {
        ValidationErr::XmlError(message.into())
    }
}

/// Errors reported by the server.
#[derive(Error, Debug)]
pub enum S3ServerError {
    #[error("{0}")]
    S3Error(Box<S3ErrorResponse>),

    #[error(
        "invalid server response (status {http_status_code}, content-type '{content_type}'): {message}"
    )]
    InvalidServerResponse {
        message: String,
        http_status_code: u16,
        content_type: String,
    },
}

/// Errors of the transport itself.
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server failed with HTTP status code {0}")]
    ServerError(u16),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationErr),

    #[error(transparent)]
    S3Server(#[from] S3ServerError),

    #[error(transparent)]
    Network(#[from] NetworkError),
}

impl Error {
    /// Returns the S3 error code when this error is a decoded server error response.
    pub fn s3_error_code(&self) -> Option<&S3ErrorCode> {
        match self {
            Error::S3Server(S3ServerError::S3Error(e)) => Some(e.code()),
            _ => None,
        }
    }

    /// Returns `true` if the server answered with the given error code.
    pub fn is_s3_code(&self, code: &S3ErrorCode) -> bool {
        self.s3_error_code() == Some(code)
    }
}

impl From<S3ErrorResponse> for Error {
    fn from(err: S3ErrorResponse) -> Self {
        Error::S3Server(S3ServerError::S3Error(Box::new(err)))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(NetworkError::Transport(err))
    }
}

