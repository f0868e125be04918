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

//! Typed IAM policy documents serialized with `serde_json`

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

pub const POLICY_VERSION: &str = "2012-10-17";

/// Service principal of Amazon S3, the only principal allowed to assume a replication role.
pub const S3_SERVICE_PRINCIPAL: &str = "s3.amazonaws.com";

/// Actions granted on the source bucket and its objects.
pub const SOURCE_ACTIONS: [&str; 6] = [
    "s3:GetObjectVersion",
    "s3:GetObjectVersionAcl",
    "s3:GetObjectVersionTagging",
    "s3:GetObjectVersionForReplication",
    "s3:ListBucket",
    "s3:GetReplicationConfiguration",
];

/// Actions granted on the destination bucket and its objects.
pub const DESTINATION_ACTIONS: [&str; 7] = [
    "s3:ReplicateObject",
    "s3:ReplicateDelete",
    "s3:ReplicateTags",
    "s3:PutObjectAcl",
    "s3:PutObjectVersionAcl",
    "s3:PutObjectVersionTagging",
    "s3:PutObject",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    Allow,
    Deny,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Principal {
    pub service: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Statement {
    pub effect: Effect,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principal: Option<Principal>,
    #[serde(deserialize_with = "one_or_many")]
    pub action: Vec<String>,
    #[serde(
        default,
        deserialize_with = "one_or_many",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub resource: Vec<String>,
}

/// An IAM policy document.
///
/// # Examples
///
/// ```
/// use crr::iam::policy::PolicyDocument;
///
/// let trust = PolicyDocument::s3_trust_policy();
/// assert_eq!(
///     trust.to_string(),
///     r#"{"Version":"2012-10-17","Statement":[{"Effect":"Allow","Principal":{"Service":"s3.amazonaws.com"},"Action":["sts:AssumeRole"]}]}"#
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyDocument {
    pub version: String,
    pub statement: Vec<Statement>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn one_or_many<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(v) => vec![v],
        OneOrMany::Many(v) => v,
    })
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

impl PolicyDocument {
    /// Trust policy letting the S3 service principal, and nobody else, assume the role.
    pub fn s3_trust_policy() -> Self {
        Self {
            version: POLICY_VERSION.into(),
            statement: vec![Statement {
                effect: Effect::Allow,
                principal: Some(Principal {
                    service: S3_SERVICE_PRINCIPAL.into(),
                }),
                action: strings(&["sts:AssumeRole"]),
                resource: Vec::new(),
            }],
        }
    }

    /// Least-privilege permissions to replicate from `src_bucket` into `dst_bucket`.
    pub fn replication_permissions(src_bucket: &str, dst_bucket: &str) -> Self {
        let scoped = |bucket: &str| {
            vec![
                format!("arn:aws:s3:::{bucket}"),
                format!("arn:aws:s3:::{bucket}/*"),
            ]
        };
        Self {
            version: POLICY_VERSION.into(),
            statement: vec![
                Statement {
                    effect: Effect::Allow,
                    principal: None,
                    action: strings(&SOURCE_ACTIONS),
                    resource: scoped(src_bucket),
                },
                Statement {
                    effect: Effect::Allow,
                    principal: None,
                    action: strings(&DESTINATION_ACTIONS),
                    resource: scoped(dst_bucket),
                },
            ],
        }
    }

    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

impl fmt::Display for PolicyDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trust_policy_grants_only_s3() {
        let trust = PolicyDocument::s3_trust_policy();
        assert_eq!(trust.statement.len(), 1);
        let st = &trust.statement[0];
        assert_eq!(st.effect, Effect::Allow);
        assert_eq!(st.principal.as_ref().map(|p| p.service.as_str()), Some("s3.amazonaws.com"));
        assert_eq!(st.action, vec!["sts:AssumeRole".to_string()]);
        assert!(st.resource.is_empty());
    }

    #[test]
    fn permissions_are_scoped_to_the_bucket_pair() {
        let doc = PolicyDocument::replication_permissions("src", "dst");
        assert_eq!(doc.statement.len(), 2);
        assert_eq!(
            doc.statement[0].resource,
            vec!["arn:aws:s3:::src".to_string(), "arn:aws:s3:::src/*".to_string()]
        );
        assert_eq!(doc.statement[0].action.len(), SOURCE_ACTIONS.len());
        assert_eq!(
            doc.statement[1].resource,
            vec!["arn:aws:s3:::dst".to_string(), "arn:aws:s3:::dst/*".to_string()]
        );
        assert!(doc.statement[1].action.contains(&"s3:ReplicateObject".to_string()));
    }

    #[test]
    fn parses_single_string_action() {
        let doc = PolicyDocument::from_json(
            r#"{"Version":"2012-10-17","Statement":[{"Effect":"Allow","Principal":{"Service":"s3.amazonaws.com"},"Action":"sts:AssumeRole"}]}"#,
        )
        .unwrap();
        assert_eq!(doc, PolicyDocument::s3_trust_policy());
    }

    #[test]
    fn display_reads_back() {
        let doc = PolicyDocument::replication_permissions("a.b", "c");
        assert_eq!(PolicyDocument::from_json(&doc.to_string()).unwrap(), doc);
    }
}

