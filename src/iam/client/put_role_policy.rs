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

use crate::iam::builders::{PutRolePolicy, PutRolePolicyBldr};
use crate::iam::client::IamClient;

impl IamClient {
    /// Creates a [`PutRolePolicy`] request builder that stores an inline policy on a role,
    /// replacing any policy of the same name.
    ///
    /// To execute the request, call [`PutRolePolicy::send()`](crate::iam::types::IamApi::send),
    /// which returns a [`Result`] containing a [`PutRolePolicyResponse`](crate::iam::response::PutRolePolicyResponse).
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
    ///     let doc = PolicyDocument::replication_permissions("src", "dst");
    ///     client
    ///         .put_role_policy("s3-replication-role", "s3-replication-role-replication-src-to-dst", doc.to_string())
    ///         .build().send().await.unwrap();
    /// }
    /// ```
    pub fn put_role_policy<S1: Into<String>, S2: Into<String>, S3: Into<String>>(
        &self,
        role_name: S1,
        policy_name: S2,
        policy_document: S3,
    ) -> PutRolePolicyBldr {
        PutRolePolicy::builder()
            .client(self.clone())
            .role_name(role_name)
            .policy_name(policy_name)
            .policy_document(policy_document)
    }
}

