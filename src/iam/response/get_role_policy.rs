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
use crate::iam::policy::PolicyDocument;
use crate::iam::response::read_result;
use crate::iam::types::{FromIamResponse, IamRequest};
use crate::s3::utils::{get_text_default, get_text_result};
use async_trait::async_trait;
use bytes::Bytes;

/// Response of the [get_role_policy()](crate::iam::IamClient::get_role_policy) API call.
#[derive(Clone, Debug)]
pub struct GetRolePolicyResponse {
    request: IamRequest,
    body: Bytes,

    pub role_name: String,
    pub policy_name: String,
    /// Policy JSON, url-decoded.
    pub policy_document: String,
}

impl GetRolePolicyResponse {
    pub fn request(&self) -> &IamRequest {
        &self.request
    }
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Parses the stored policy document.
    pub fn policy(&self) -> Result<PolicyDocument, IamError> {
        PolicyDocument::from_json(&self.policy_document)
            .map_err(|e| IamError::InvalidResponse(format!("invalid policy document: {e}")))
    }
}

#[async_trait]
impl FromIamResponse for GetRolePolicyResponse {
    async fn from_iam_response(
        request: IamRequest,
        response: Result<reqwest::Response, IamError>,
    ) -> Result<Self, IamError> {
        let (body, result) = read_result(response, "GetRolePolicyResult").await?;
        let encoded = get_text_result(&result, "PolicyDocument")?;
        let policy_document = urlencoding::decode(&encoded)
            .map_err(|e| IamError::InvalidResponse(format!("invalid policy encoding: {e}")))?
            .into_owned();

        Ok(Self {
            request,
            body,
            role_name: get_text_default(&result, "RoleName"),
            policy_name: get_text_default(&result, "PolicyName"),
            policy_document,
        })
    }
}

