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

//! Responses for the IAM role and policy operations

use crate::iam::error::IamError;
use bytes::{Buf, Bytes};
use xmltree::Element;

mod create_role;
mod get_role;
mod get_role_policy;
mod put_role_policy;

pub use create_role::CreateRoleResponse;
pub use get_role::GetRoleResponse;
pub use get_role_policy::GetRolePolicyResponse;
pub use put_role_policy::PutRolePolicyResponse;

/// Reads a successful response and returns its `<{Action}Result>` element, e.g.
/// `GetRoleResult` under `GetRoleResponse`.
async fn read_result(
    response: Result<reqwest::Response, IamError>,
    result_tag: &str,
) -> Result<(Bytes, Element), IamError> {
    let body: Bytes = response?.bytes().await?;
    let root = Element::parse(body.clone().reader())?;
    let result = root
        .get_child(result_tag)
        .cloned()
        .ok_or_else(|| IamError::InvalidResponse(format!("<{result_tag}> tag not found")))?;
    Ok((body, result))
}

