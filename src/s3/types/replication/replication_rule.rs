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

//! Replication rule information

use super::destination::Destination;
use super::filter::Filter;
use super::{push_status_element, push_text_element, status_str};
use crate::s3::error::ValidationErr;
use crate::s3::utils::{get_text_option, get_text_result};
use xmltree::Element;

#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct SourceSelectionCriteria {
    pub sse_kms_encrypted_objects_status: Option<bool>,
    pub replica_modifications_status: Option<bool>,
}

#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct ReplicationRule {
    pub id: Option<String>,
    pub priority: Option<i32>,
    pub filter: Option<Filter>,
    /// Rule level prefix of the first configuration schema; superseded by [`Filter`].
    pub prefix: Option<String>,
    pub status: bool,
    pub source_selection_criteria: Option<SourceSelectionCriteria>,
    pub existing_object_replication_status: Option<bool>,
    pub destination: Destination,
    pub delete_marker_replication_status: Option<bool>,
    pub delete_replication_status: Option<bool>,
}

fn nested_status(element: &Element, tag: &str) -> Result<Option<bool>, ValidationErr> {
    match element.get_child(tag) {
        Some(v) => Ok(Some(get_text_result(v, "Status")? == "Enabled")),
        None => Ok(None),
    }
}

impl ReplicationRule {
    /// Name of the destination bucket, taken from the last segment of its ARN.
    pub fn destination_bucket(&self) -> &str {
        let arn = self.destination.bucket_arn.as_str();
        arn.rsplit(':').next().unwrap_or(arn)
    }

    pub fn from_xml(element: &Element) -> Result<ReplicationRule, ValidationErr> {
        Ok(ReplicationRule {
            id: get_text_option(element, "ID"),
            priority: match get_text_option(element, "Priority") {
                Some(v) if !v.is_empty() => Some(v.parse::<i32>()?),
                _ => None,
            },
            filter: match element.get_child("Filter") {
                Some(v) => Some(Filter::from_xml(v)?),
                None => None,
            },
            prefix: get_text_option(element, "Prefix"),
            status: get_text_result(element, "Status")? == "Enabled",
            source_selection_criteria: element.get_child("SourceSelectionCriteria").map(|v| {
                SourceSelectionCriteria {
                    sse_kms_encrypted_objects_status: nested_status(v, "SseKmsEncryptedObjects")
                        .ok()
                        .flatten(),
                    replica_modifications_status: nested_status(v, "ReplicaModifications")
                        .ok()
                        .flatten(),
                }
            }),
            existing_object_replication_status: nested_status(
                element,
                "ExistingObjectReplication",
            )?,
            destination: Destination::from_xml(
                element
                    .get_child("Destination")
                    .ok_or(ValidationErr::xml_error("<Destination> tag not found"))?,
            )?,
            delete_marker_replication_status: nested_status(element, "DeleteMarkerReplication")?,
            delete_replication_status: nested_status(element, "DeleteReplication")?,
        })
    }

    pub fn to_xml(&self) -> String {
        let mut data = String::from("<Rule>");

        if let Some(v) = &self.id {
            push_text_element(&mut data, "ID", v);
        }
        if let Some(v) = self.priority {
            data.push_str(&format!("<Priority>{v}</Priority>"));
        }
        if let Some(v) = &self.filter {
            data.push_str(&v.to_xml());
        }
        if let Some(v) = &self.prefix {
            push_text_element(&mut data, "Prefix", v);
        }
        data.push_str(&format!("<Status>{}</Status>", status_str(self.status)));

        if let Some(s) = &self.source_selection_criteria {
            data.push_str("<SourceSelectionCriteria>");
            if let Some(v) = s.sse_kms_encrypted_objects_status {
                push_status_element(&mut data, "SseKmsEncryptedObjects", v);
            }
            if let Some(v) = s.replica_modifications_status {
                push_status_element(&mut data, "ReplicaModifications", v);
            }
            data.push_str("</SourceSelectionCriteria>");
        }
        if let Some(v) = self.existing_object_replication_status {
            push_status_element(&mut data, "ExistingObjectReplication", v);
        }

        data.push_str(&self.destination.to_xml());

        if let Some(v) = self.delete_marker_replication_status {
            push_status_element(&mut data, "DeleteMarkerReplication", v);
        }
        if let Some(v) = self.delete_replication_status {
            push_status_element(&mut data, "DeleteReplication", v);
        }

        data.push_str("</Rule>");
        data
    }
}

