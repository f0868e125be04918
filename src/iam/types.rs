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

//! Request type and core traits of the IAM client, mirroring [`crate::s3::types`].

use crate::iam::client::IamClient;
use crate::iam::error::IamError;
use crate::s3::multimap_ext::Multimap;
use crate::s3::utils::{get_text_default, get_text_option, get_text_result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use typed_builder::TypedBuilder;
use xmltree::Element;

/// A single IAM query-protocol call.
#[derive(Clone, Debug, TypedBuilder)]
pub struct IamRequest {
    #[builder(!default)] // force required
    pub(crate) client: IamClient,

    /// Value of the `Action` form field, e.g. `CreateRole`.
    #[builder(!default)]
    pub(crate) action: &'static str,

    #[builder(default)]
    pub(crate) params: Multimap,
}

impl IamRequest {
    pub fn action(&self) -> &str {
        self.action
    }

    /// Execute the request, returning the response. Only used in [`IamApi::send()`].
    pub async fn execute(&self) -> Result<reqwest::Response, IamError> {
        self.client.execute(self.action, &self.params).await
    }
}

/// Converts a request builder into an [`IamRequest`], validating names on the way.
pub trait ToIamRequest: Sized {
    fn to_iam_request(self) -> Result<IamRequest, IamError>;
}

/// Converts the result of an IAM call into a typed response.
#[async_trait]
pub trait FromIamResponse: Sized {
    async fn from_iam_response(
        request: IamRequest,
        response: Result<reqwest::Response, IamError>,
    ) -> Result<Self, IamError>;
}

/// Common interface of all IAM request builders.
#[async_trait]
pub trait IamApi: ToIamRequest {
    type IamResponse: FromIamResponse;

    async fn send(self) -> Result<Self::IamResponse, IamError> {
        let req: IamRequest = self.to_iam_request()?;
        let resp: Result<reqwest::Response, IamError> = req.execute().await;
        Self::IamResponse::from_iam_response(req, resp).await
    }
}

/// An IAM role as returned by `CreateRole` and `GetRole`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Role {
    pub role_name: String,
    pub role_id: String,
    pub arn: String,
    pub path: String,
    pub create_date: Option<DateTime<Utc>>,
    /// Trust policy, url-decoded.
    pub assume_role_policy_document: Option<String>,
}

impl Role {
    pub fn from_xml(element: &Element) -> Result<Role, IamError> {
        let assume_role_policy_document = match get_text_option(element, "AssumeRolePolicyDocument")
        {
            Some(v) => Some(
                urlencoding::decode(&v)
                    .map_err(|e| {
                        IamError::InvalidResponse(format!("invalid policy encoding: {e}"))
                    })?
                    .into_owned(),
            ),
            None => None,
        };

        Ok(Role {
            role_name: get_text_result(element, "RoleName")?,
            role_id: get_text_default(element, "RoleId"),
            arn: get_text_result(element, "Arn")?,
            path: get_text_default(element, "Path"),
            create_date: get_text_option(element, "CreateDate")
                .and_then(|v| DateTime::parse_from_rfc3339(&v).ok())
                .map(|v| v.with_timezone(&Utc)),
            assume_role_policy_document,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Buf;

    #[test]
    fn parse_role() {
        let body = br#"<GetRoleResponse xmlns="https://iam.amazonaws.com/doc/2010-05-08/">
  <GetRoleResult>
    <Role>
      <Path>/</Path>
      <AssumeRolePolicyDocument>%7B%22Version%22%3A%222012-10-17%22%7D</AssumeRolePolicyDocument>
      <RoleId>AROADBQP57FF2AEXAMPLE</RoleId>
      <RoleName>s3-replication-role-example</RoleName>
      <Arn>arn:aws:iam::123456789012:role/s3-replication-role-example</Arn>
      <CreateDate>2019-11-13T16:45:56Z</CreateDate>
    </Role>
  </GetRoleResult>
</GetRoleResponse>"#;
        let root = Element::parse(bytes::Bytes::from_static(body).reader()).unwrap();
        let role = root
            .get_child("GetRoleResult")
            .and_then(|r| r.get_child("Role"))
            .unwrap();
        let role = Role::from_xml(role).unwrap();
        assert_eq!(role.role_name, "s3-replication-role-example");
        assert_eq!(
            role.arn,
            "arn:aws:iam::123456789012:role/s3-replication-role-example"
        );
        assert_eq!(
            role.assume_role_policy_document.as_deref(),
            Some(r#"{"Version":"2012-10-17"}"#)
        );
        assert!(role.create_date.is_some());
    }

    #[test]
    fn role_without_arn_is_rejected() {
        let root = Element::parse(&b"<Role><RoleName>r</RoleName></Role>"[..]).unwrap();
        assert!(Role::from_xml(&root).is_err());
    }
}

