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

use crate::iam::builders::{GetRole, GetRoleBldr};
use crate::iam::client::IamClient;

impl IamClient {
    /// Creates a [`GetRole`] request builder. A missing role fails with `NoSuchEntity`.
    ///
    /// To execute the request, call [`GetRole::send()`](crate::iam::types::IamApi::send),
    /// which returns a [`Result`] containing a [`GetRoleResponse`](crate::iam::response::GetRoleResponse).
    pub fn get_role<S: Into<String>>(&self, role_name: S) -> GetRoleBldr {
        GetRole::builder().client(self.clone()).role_name(role_name)
    }
}

