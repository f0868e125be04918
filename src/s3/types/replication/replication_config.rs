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

//! Replication configuration information

use super::push_text_element;
use super::replication_rule::ReplicationRule;
use crate::s3::error::ValidationErr;
use crate::s3::utils::{get_children, get_text_option};
use xmltree::Element;

/// The replication configuration of a bucket: the role the service assumes and
/// the ordered list of rules.
#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct ReplicationConfig {
    pub role: Option<String>,
    pub rules: Vec<ReplicationRule>,
}

impl ReplicationConfig {
    pub fn from_xml(root: &Element) -> Result<ReplicationConfig, ValidationErr> {
        Ok(ReplicationConfig {
            role: get_text_option(root, "Role"),
            rules: get_children(root, "Rule")
                .into_iter()
                .map(ReplicationRule::from_xml)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }

    pub fn to_xml(&self) -> String {
        let mut data = String::from(
            "<ReplicationConfiguration xmlns=\"http://s3.amazonaws.com/doc/2006-03-01/\">",
        );

        if let Some(v) = &self.role {
            push_text_element(&mut data, "Role", v);
        }
        for rule in &self.rules {
            data.push_str(&rule.to_xml());
        }

        data.push_str("</ReplicationConfiguration>");
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::s3::types::{Destination, Filter, ReplicationTime, Tag};
    use bytes::{Buf, Bytes};

    const AWS_SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ReplicationConfiguration xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
  <Role>arn:aws:iam::35667example:role/CrossRegionReplicationRoleForS3</Role>
  <Rule>
    <ID>rule1</ID>
    <Priority>1</Priority>
    <Filter><And><Prefix>TaxDocs</Prefix><Tag><Key>k1</Key><Value>v1</Value></Tag><Tag><Key>k2</Key><Value>v2</Value></Tag></And></Filter>
    <Status>Enabled</Status>
    <DeleteMarkerReplication><Status>Disabled</Status></DeleteMarkerReplication>
    <Destination>
      <Bucket>arn:aws:s3:::exampletargetbucket</Bucket>
      <StorageClass>STANDARD_IA</StorageClass>
      <ReplicationTime><Status>Enabled</Status><Time><Minutes>15</Minutes></Time></ReplicationTime>
      <Metrics><Status>Enabled</Status><EventThreshold><Minutes>15</Minutes></EventThreshold></Metrics>
    </Destination>
  </Rule>
  <Rule>
    <ID>legacy</ID>
    <Prefix>logs/</Prefix>
    <Status>Disabled</Status>
    <Destination><Bucket>arn:aws:s3:::archive</Bucket></Destination>
  </Rule>
</ReplicationConfiguration>"#;

    fn parse(xml: &str) -> ReplicationConfig {
        let root = Element::parse(Bytes::from(xml.to_string()).reader()).unwrap();
        ReplicationConfig::from_xml(&root).unwrap()
    }

    #[test]
    fn parses_every_rule_with_its_elements() {
        let config = parse(AWS_SAMPLE);
        assert_eq!(
            config.role.as_deref(),
            Some("arn:aws:iam::35667example:role/CrossRegionReplicationRoleForS3")
        );
        assert_eq!(config.rules.len(), 2);

        let first = &config.rules[0];
        assert_eq!(first.id.as_deref(), Some("rule1"));
        assert_eq!(first.priority, Some(1));
        assert!(first.status);
        assert_eq!(first.delete_marker_replication_status, Some(false));
        assert_eq!(first.destination_bucket(), "exampletargetbucket");
        assert_eq!(
            first.destination.replication_time,
            Some(ReplicationTime {
                time_minutes: Some(15),
                status: true
            })
        );
        let and = first.filter.as_ref().unwrap().and_operator.as_ref().unwrap();
        assert_eq!(and.prefix.as_deref(), Some("TaxDocs"));
        assert_eq!(and.tags.len(), 2);

        let legacy = &config.rules[1];
        assert_eq!(legacy.prefix.as_deref(), Some("logs/"));
        assert!(legacy.filter.is_none());
        assert!(!legacy.status);
    }

    #[test]
    fn serialized_configuration_reads_back_identically() {
        let config = parse(AWS_SAMPLE);
        assert_eq!(parse(&config.to_xml()), config);
    }

    #[test]
    fn empty_prefix_filter_survives_serialization() {
        let config = ReplicationConfig {
            role: Some("arn:aws:iam::123456789012:role/r".into()),
            rules: vec![ReplicationRule {
                id: Some("replicate-to-dst".into()),
                priority: Some(1),
                filter: Some(Filter::with_prefix("")),
                status: true,
                destination: Destination::new("arn:aws:s3:::dst"),
                delete_marker_replication_status: Some(false),
                ..Default::default()
            }],
        };
        let xml = config.to_xml();
        assert!(xml.contains("<Filter><Prefix></Prefix></Filter>"));
        assert_eq!(parse(&xml), config);
    }

    #[test]
    fn special_characters_are_escaped() {
        let config = ReplicationConfig {
            role: None,
            rules: vec![ReplicationRule {
                filter: Some(Filter {
                    tag: Some(Tag {
                        key: "team".into(),
                        value: "r&d <core>".into(),
                    }),
                    ..Default::default()
                }),
                destination: Destination::new("arn:aws:s3:::dst"),
                ..Default::default()
            }],
        };
        let xml = config.to_xml();
        assert!(xml.contains("<Value>r&amp;d &lt;core&gt;</Value>"));
        assert_eq!(parse(&xml), config);
    }
}

