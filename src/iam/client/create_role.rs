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

use crate::iam::builders::{CreateRole, CreateRoleBldr};
use crate::iam::client::IamClient;

impl IamClient {
    /// Creates a [`CreateRole`] request builder.
    ///
    /// To execute the request, call [`CreateRole::send()`](crate::iam::types::IamApi::send),
    /// which returns a [`Result`] containing a [`CreateRoleResponse`](crate::iam::response::CreateRoleResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use crr::iam::{DEFAULT_IAM_ENDPOINT, IamClient};
    /// use crr::iam::policy::PolicyDocument;
    /// use crr::iam::types::IamApi;
    /// use crr::s3::creds::StaticProvider;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let provider = StaticProvider::new("AKIA...", "secret", None);
    ///     let client = IamClient::new(DEFAULT_IAM_ENDPOINT.parse().unwrap(), Some(provider)).unwrap();
    ///     let resp = client
    ///         .create_role("s3-replication-role", PolicyDocument::s3_trust_policy().to_string())
    ///         .description(Some("Role for S3 cross-region replication".to_string()))
    ///         .build().send().await.unwrap();
    ///     println!("created role {}", resp.role.arn);
    /// }
    /// ```
    pub fn create_role<S1: Into<String>, S2: Into<String>>(
        &self,
        role_name: S1,
        assume_role_policy_document: S2,
    ) -> CreateRoleBldr {
        CreateRole::builder()
            .client(self.clone())
            .role_name(role_name)
            .assume_role_policy_document(assume_role_policy_document)
    }
}

