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
use crate::iam::response::read_result;
use crate::iam::types::{FromIamResponse, IamRequest, Role};
use async_trait::async_trait;
use bytes::Bytes;

/// Response of the [get_role()](crate::iam::IamClient::get_role) API call.
#[derive(Clone, Debug)]
pub struct GetRoleResponse {
    request: IamRequest,
    body: Bytes,

    pub role: Role,
}

impl GetRoleResponse {
    pub fn request(&self) -> &IamRequest {
        &self.request
    }
    pub fn body(&self) -> &Bytes {
        &self.body
    }
}

#[async_trait]
impl FromIamResponse for GetRoleResponse {
    async fn from_iam_response(
        request: IamRequest,
        response: Result<reqwest::Response, IamError>,
    ) -> Result<Self, IamError> {
        let (body, result) = read_result(response, "GetRoleResult").await?;
        let role = result
            .get_child("Role")
            .ok_or_else(|| IamError::InvalidResponse("<Role> tag not found".into()))?;
        Ok(Self {
            request,
            role: Role::from_xml(role)?,
            body,
        })
    }
}

