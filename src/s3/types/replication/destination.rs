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

//! Destination information

use super::{push_text_element, status_str};
use crate::s3::error::ValidationErr;
use crate::s3::utils::{get_text_option, get_text_result};
use xmltree::Element;

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct AccessControlTranslation {
    pub owner: String,
}

#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct EncryptionConfig {
    pub replica_kms_key_id: Option<String>,
}

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Metrics {
    pub event_threshold_minutes: Option<i32>,
    pub status: bool,
}

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct ReplicationTime {
    pub time_minutes: Option<i32>,
    pub status: bool,
}

/// Where a rule replicates to, identified by the destination bucket's ARN.
#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct Destination {
    pub bucket_arn: String,
    pub access_control_translation: Option<AccessControlTranslation>,
    pub account: Option<String>,
    pub encryption_config: Option<EncryptionConfig>,
    pub metrics: Option<Metrics>,
    pub replication_time: Option<ReplicationTime>,
    pub storage_class: Option<String>,
}

fn parse_minutes(value: Option<String>) -> Result<Option<i32>, ValidationErr> {
    match value {
        Some(v) if !v.is_empty() => Ok(Some(v.parse::<i32>()?)),
        _ => Ok(None),
    }
}

impl Destination {
    pub fn new(bucket_arn: impl Into<String>) -> Self {
        Self {
            bucket_arn: bucket_arn.into(),
            ..Default::default()
        }
    }

    pub fn from_xml(element: &Element) -> Result<Destination, ValidationErr> {
        Ok(Destination {
            bucket_arn: get_text_result(element, "Bucket")?,
            access_control_translation: match element.get_child("AccessControlTranslation") {
                Some(v) => Some(AccessControlTranslation {
                    owner: get_text_result(v, "Owner")?,
                }),
                None => None,
            },
            account: get_text_option(element, "Account"),
            encryption_config: element
                .get_child("EncryptionConfiguration")
                .map(|v| EncryptionConfig {
                    replica_kms_key_id: get_text_option(v, "ReplicaKmsKeyID"),
                }),
            metrics: match element.get_child("Metrics") {
                Some(v) => Some(Metrics {
                    event_threshold_minutes: parse_minutes(
                        v.get_child("EventThreshold")
                            .and_then(|t| get_text_option(t, "Minutes")),
                    )?,
                    status: get_text_result(v, "Status")? == "Enabled",
                }),
                None => None,
            },
            replication_time: match element.get_child("ReplicationTime") {
                Some(v) => Some(ReplicationTime {
                    time_minutes: parse_minutes(
                        v.get_child("Time")
                            .and_then(|t| get_text_option(t, "Minutes")),
                    )?,
                    status: get_text_result(v, "Status")? == "Enabled",
                }),
                None => None,
            },
            storage_class: get_text_option(element, "StorageClass"),
        })
    }

    pub fn to_xml(&self) -> String {
        let mut data = String::from("<Destination>");
        push_text_element(&mut data, "Bucket", &self.bucket_arn);

        if let Some(v) = &self.account {
            push_text_element(&mut data, "Account", v);
        }

        if let Some(v) = &self.storage_class {
            push_text_element(&mut data, "StorageClass", v);
        }

        if let Some(v) = &self.access_control_translation {
            data.push_str("<AccessControlTranslation>");
            push_text_element(&mut data, "Owner", &v.owner);
            data.push_str("</AccessControlTranslation>");
        }

        if let Some(c) = &self.encryption_config {
            data.push_str("<EncryptionConfiguration>");
            if let Some(v) = &c.replica_kms_key_id {
                push_text_element(&mut data, "ReplicaKmsKeyID", v);
            }
            data.push_str("</EncryptionConfiguration>");
        }

        if let Some(t) = &self.replication_time {
            data.push_str("<ReplicationTime>");
            data.push_str(&format!("<Status>{}</Status>", status_str(t.status)));
            if let Some(v) = t.time_minutes {
                data.push_str(&format!("<Time><Minutes>{v}</Minutes></Time>"));
            }
            data.push_str("</ReplicationTime>");
        }

        if let Some(m) = &self.metrics {
            data.push_str("<Metrics>");
            data.push_str(&format!("<Status>{}</Status>", status_str(m.status)));
            if let Some(v) = m.event_threshold_minutes {
                data.push_str(&format!("<EventThreshold><Minutes>{v}</Minutes></EventThreshold>"));
            }
            data.push_str("</Metrics>");
        }

        data.push_str("</Destination>");
        data
    }
}

