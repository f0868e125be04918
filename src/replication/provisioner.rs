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

use crate::iam::error::IamErrorCode;
use crate::iam::policy::PolicyDocument;
use crate::iam::types::Role;
use crate::replication::backend::IdentityBackend;
use crate::replication::ensurer::Provisioned;
use crate::replication::error::ProvisionError;
use crate::replication::poll::PollPolicy;
use std::time::Duration;

/// Description attached to roles created for replication.
pub const ROLE_DESCRIPTION: &str = "Role for S3 cross-region replication";

/// Name of the inline policy granting `role` replication from `src_bucket` to `dst_bucket`.
///
/// The name is deterministic so repeated runs overwrite the policy instead of adding
/// new ones.
pub fn policy_name(role: &str, src_bucket: &str, dst_bucket: &str) -> String {
    format!("{role}-replication-{src_bucket}-to-{dst_bucket}")
}

/// Creates-or-adopts the delegation role and attaches its permissions.
#[derive(Debug)]
pub struct AccessProvisioner<'a, I: ?Sized> {
    identity: &'a I,
    settle: Duration,
    usability: PollPolicy,
}

impl<'a, I: IdentityBackend + ?Sized> AccessProvisioner<'a, I> {
    pub fn new(identity: &'a I, settle: Duration, usability: PollPolicy) -> Self {
        Self {
            identity,
            settle,
            usability,
        }
    }

    /// Creates the role with a trust policy for the S3 service principal, or adopts the
    /// existing role of that name. Any other creation error is fatal.
    pub async fn ensure_role(&self, name: &str) -> Result<Provisioned<Role>, ProvisionError> {
        let trust = PolicyDocument::s3_trust_policy();
        match self.identity.create_role(name, &trust, ROLE_DESCRIPTION).await {
            Ok(role) => {
                log::info!("created role '{}' ({})", role.role_name, role.arn);
                Ok(Provisioned::Created(role))
            }
            Err(e) if e.is_iam_code(&IamErrorCode::EntityAlreadyExists) => {
                let role = self.identity.get_role(name).await?;
                log::info!("reusing existing role '{}' ({})", role.role_name, role.arn);
                Ok(Provisioned::Adopted(role))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Overwrites the inline replication policy for the bucket pair, then waits until
    /// the role can be used. Returns the policy name.
    pub async fn attach_policy(
        &self,
        role: &Role,
        src_bucket: &str,
        dst_bucket: &str,
    ) -> Result<String, ProvisionError> {
        let name = policy_name(&role.role_name, src_bucket, dst_bucket);
        let document = PolicyDocument::replication_permissions(src_bucket, dst_bucket);
        self.identity
            .put_role_policy(&role.role_name, &name, &document)
            .await?;
        log::info!("attached policy '{name}' to role '{}'", role.role_name);

        self.wait_until_usable(&role.role_name, &name).await?;
        Ok(name)
    }

    /// Waits out the propagation delay of the identity service.
    ///
    /// Sleeps for the settle period, then polls until the policy reads back. Fails with
    /// [`ProvisionError::RoleNotUsable`] once the polling budget is spent.
    pub async fn wait_until_usable(
        &self,
        role_name: &str,
        policy_name: &str,
    ) -> Result<(), ProvisionError> {
        tokio::time::sleep(self.settle).await;

        let identity = self.identity;
        let outcome = self
            .usability
            .poll(|attempt| async move {
                match identity.get_role_policy(role_name, policy_name).await {
                    Ok(_) => true,
                    Err(e) => {
                        log::debug!(
                            "policy '{policy_name}' not readable yet (attempt {attempt}): {e}"
                        );
                        false
                    }
                }
            })
            .await;

        if outcome.found {
            Ok(())
        } else {
            Err(ProvisionError::RoleNotUsable {
                role: role_name.to_string(),
                policy: policy_name.to_string(),
                attempts: outcome.attempts,
            })
        }
    }
}
