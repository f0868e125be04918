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
use crate::iam::response::CreateRoleResponse;
use crate::iam::types::{IamApi, IamRequest, ToIamRequest};
use crate::iam::utils::check_role_name;
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use typed_builder::TypedBuilder;

/// Argument builder for the [`CreateRole`](https://docs.aws.amazon.com/IAM/latest/APIReference/API_CreateRole.html) IAM API operation.
///
/// A role that already exists fails with `EntityAlreadyExists`.
#[derive(Clone, Debug, TypedBuilder)]
pub struct CreateRole {
    #[builder(!default)] // force required
    client: IamClient,
    #[builder(setter(into))]
    role_name: String,
    /// Trust policy as a JSON document.
    #[builder(setter(into))]
    assume_role_policy_document: String,
    #[builder(default, setter(into))]
    description: Option<String>,
    #[builder(default, setter(into))]
    path: Option<String>,
}

pub type CreateRoleBldr = CreateRoleBuilder<((IamClient,), (String,), (String,), (), ())>;

impl IamApi for CreateRole {
    type IamResponse = CreateRoleResponse;
}

impl ToIamRequest for CreateRole {
    fn to_iam_request(self) -> Result<IamRequest, IamError> {
        check_role_name(&self.role_name)?;

        let mut params = Multimap::new();
        params.add("RoleName", self.role_name);
        params.add("AssumeRolePolicyDocument", self.assume_role_policy_document);
        if let Some(v) = self.description {
            params.add("Description", v);
        }
        if let Some(v) = self.path {
            params.add("Path", v);
        }

        Ok(IamRequest::builder()
            .client(self.client)
            .action("CreateRole")
            .params(params)
            .build())
    }
}

