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

const MAX_ROLE_NAME_LEN: usize = 64;
const MAX_POLICY_NAME_LEN: usize = 128;

fn check_iam_name(name: &str, max_len: usize) -> Result<(), IamError> {
    let invalid = |reason: String| IamError::InvalidName {
        name: name.to_string(),
        reason,
    };

    if name.is_empty() {
        return Err(invalid("name cannot be empty".into()));
    }
    if name.len() > max_len {
        return Err(invalid(format!("name cannot be longer than {max_len} characters")));
    }
    if let Some(c) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || "+=,.@_-".contains(*c)))
    {
        return Err(invalid(format!("character '{c}' is not allowed")));
    }
    Ok(())
}

/// Validates an IAM role name.
pub fn check_role_name(name: &str) -> Result<(), IamError> {
    check_iam_name(name, MAX_ROLE_NAME_LEN)
}

/// Validates an inline policy name.
pub fn check_policy_name(name: &str) -> Result<(), IamError> {
    check_iam_name(name, MAX_POLICY_NAME_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_names() {
        assert!(check_role_name("s3-replication-role-example").is_ok());
        assert!(check_role_name("svc+role=a,b.c@d_e").is_ok());
        assert!(check_role_name("").is_err());
        assert!(check_role_name("has space").is_err());
        assert!(check_role_name(&"r".repeat(65)).is_err());
    }

    #[test]
    fn policy_names_allow_longer_values() {
        assert!(check_policy_name(&"p".repeat(128)).is_ok());
        assert!(check_policy_name(&"p".repeat(129)).is_err());
    }
}

