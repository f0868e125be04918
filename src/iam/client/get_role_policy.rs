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

use crate::iam::builders::{GetRolePolicy, GetRolePolicyBldr};
use crate::iam::client::IamClient;

impl IamClient {
    /// Creates a [`GetRolePolicy`] request builder reading back an inline policy.
    ///
    /// To execute the request, call [`GetRolePolicy::send()`](crate::iam::types::IamApi::send),
    /// which returns a [`Result`] containing a [`GetRolePolicyResponse`](crate::iam::response::GetRolePolicyResponse).
    pub fn get_role_policy<S1: Into<String>, S2: Into<String>>(
        &self,
        role_name: S1,
        policy_name: S2,
    ) -> GetRolePolicyBldr {
        GetRolePolicy::builder()
            .client(self.clone())
            .role_name(role_name)
            .policy_name(policy_name)
    }
}

