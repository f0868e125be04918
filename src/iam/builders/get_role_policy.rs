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

use crate::iam::client::IamClient;
use crate::iam::error::IamError;
use crate::iam::response::GetRolePolicyResponse;
use crate::iam::types::{IamApi, IamRequest, ToIamRequest};
use crate::iam::utils::{check_policy_name, check_role_name};
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use typed_builder::TypedBuilder;

/// Argument builder for the [`GetRolePolicy`](https://docs.aws.amazon.com/IAM/latest/APIReference/API_GetRolePolicy.html) IAM API operation.
#[derive(Clone, Debug, TypedBuilder)]
pub struct GetRolePolicy {
    #[builder(!default)] // force required
    client: IamClient,
    #[builder(setter(into))]
    role_name: String,
    #[builder(setter(into))]
    policy_name: String,
}

pub type GetRolePolicyBldr = GetRolePolicyBuilder<((IamClient,), (String,), (String,))>;

impl IamApi for GetRolePolicy {
    type IamResponse = GetRolePolicyResponse;
}

impl ToIamRequest for GetRolePolicy {
    fn to_iam_request(self) -> Result<IamRequest, IamError> {
        check_role_name(&self.role_name)?;
        check_policy_name(&self.policy_name)?;

        let mut params = Multimap::new();
        params.add("RoleName", self.role_name);
        params.add("PolicyName", self.policy_name);

        Ok(IamRequest::builder()
            .client(self.client)
            .action("GetRolePolicy")
            .params(params)
            .build())
    }
}

