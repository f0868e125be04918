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

use crate::iam::error::IamError;
use crate::iam::types::{FromIamResponse, IamRequest};
use async_trait::async_trait;
use bytes::Bytes;

/// Response of the [put_role_policy()](crate::iam::IamClient::put_role_policy) API call.
#[derive(Clone, Debug)]
pub struct PutRolePolicyResponse {
    request: IamRequest,
    body: Bytes,
}

impl PutRolePolicyResponse {
    pub fn request(&self) -> &IamRequest {
        &self.request
    }
    pub fn body(&self) -> &Bytes {
        &self.body
    }
}

#[async_trait]
impl FromIamResponse for PutRolePolicyResponse {
    async fn from_iam_response(
        request: IamRequest,
        response: Result<reqwest::Response, IamError>,
    ) -> Result<Self, IamError> {
        Ok(Self {
            request,
            body: response?.bytes().await?,
        })
    }
}

