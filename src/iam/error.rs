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

use crate::s3::error::{Error, NetworkError, ValidationErr};
use crate::s3::utils::{get_text_default, get_text_option};
use bytes::{Buf, Bytes};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use xmltree::Element;

/// Error codes reported by IAM in `<ErrorResponse><Error><Code>`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum IamErrorCode {
    #[default]
    NoError,
    EntityAlreadyExists,
    NoSuchEntity,
    MalformedPolicyDocument,
    LimitExceeded,
    AccessDenied,
    InvalidInput,
    Other(String),
}

impl FromStr for IamErrorCode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "EntityAlreadyExists" => Self::EntityAlreadyExists,
            "NoSuchEntity" => Self::NoSuchEntity,
            "MalformedPolicyDocument" => Self::MalformedPolicyDocument,
            "LimitExceeded" => Self::LimitExceeded,
            "AccessDenied" | "AccessDeniedException" => Self::AccessDenied,
            "InvalidInput" | "ValidationError" => Self::InvalidInput,
            v => Self::Other(v.to_string()),
        })
    }
}

impl fmt::Display for IamErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::NoError => "NoError",
            Self::EntityAlreadyExists => "EntityAlreadyExists",
            Self::NoSuchEntity => "NoSuchEntity",
            Self::MalformedPolicyDocument => "MalformedPolicyDocument",
            Self::LimitExceeded => "LimitExceeded",
            Self::AccessDenied => "AccessDenied",
            Self::InvalidInput => "InvalidInput",
            Self::Other(v) => v,
        };
        f.write_str(s)
    }
}

/// Error document returned by IAM.
#[derive(Clone, Debug, Default)]
pub struct IamErrorResponse {
    code: IamErrorCode,
    message: String,
    request_id: String,
    http_status_code: u16,
}

impl IamErrorResponse {
    pub fn new(code: IamErrorCode, message: impl Into<String>, http_status_code: u16) -> Self {
        Self {
            code,
            message: message.into(),
            request_id: String::new(),
            http_status_code,
        }
    }

    /// Parses an `<ErrorResponse>` document; a body that is not one yields an `Other` code
    /// named after the HTTP status.
    pub fn new_from_body(body: Bytes, http_status_code: u16) -> Self {
        let Ok(root) = Element::parse(body.clone().reader()) else {
            return Self::new(
                IamErrorCode::Other(format!("HTTP{http_status_code}")),
                String::from_utf8_lossy(&body),
                http_status_code,
            );
        };

        let error = root.get_child("Error").unwrap_or(&root);
        let code = get_text_option(error, "Code")
            .map(|v| v.parse().unwrap_or_default())
            .unwrap_or_else(|| IamErrorCode::Other(format!("HTTP{http_status_code}")));

        Self {
            code,
            message: get_text_default(error, "Message"),
            request_id: get_text_default(&root, "RequestId"),
            http_status_code,
        }
    }

    pub fn code(&self) -> &IamErrorCode {
        &self.code
    }
    pub fn message(&self) -> &str {
        &self.message
    }
    pub fn request_id(&self) -> &str {
        &self.request_id
    }
    pub fn http_status_code(&self) -> u16 {
        self.http_status_code
    }
}

impl fmt::Display for IamErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "IAM operation failed: code: {}, message: {}, request_id: {}, status: {}",
            self.code, self.message, self.request_id, self.http_status_code
        )
    }
}

impl std::error::Error for IamErrorResponse {}

#[derive(Error, Debug)]
pub enum IamError {
    #[error(transparent)]
    Validation(#[from] ValidationErr),

    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error("{0}")]
    Service(Box<IamErrorResponse>),

    #[error("invalid IAM name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("unexpected IAM response: {0}")]
    InvalidResponse(String),
}

impl IamError {
    /// Returns the IAM error code, if this error came from the service.
    pub fn iam_error_code(&self) -> Option<&IamErrorCode> {
        match self {
            IamError::Service(e) => Some(e.code()),
            _ => None,
        }
    }

    pub fn is_iam_code(&self, code: &IamErrorCode) -> bool {
        self.iam_error_code() == Some(code)
    }
}

impl From<IamErrorResponse> for IamError {
    fn from(e: IamErrorResponse) -> Self {
        IamError::Service(Box::new(e))
    }
}

impl From<reqwest::Error> for IamError {
    fn from(e: reqwest::Error) -> Self {
        IamError::Network(NetworkError::Transport(e))
    }
}

impl From<xmltree::ParseError> for IamError {
    fn from(e: xmltree::ParseError) -> Self {
        IamError::Validation(ValidationErr::from(e))
    }
}

impl From<Error> for IamError {
    fn from(e: Error) -> Self {
        match e {
            Error::Validation(v) => IamError::Validation(v),
            Error::Network(n) => IamError::Network(n),
            Error::S3Server(s) => IamError::InvalidResponse(s.to_string()),
        }
    }
}
