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

//! Rule filter information

use super::push_text_element;
use crate::s3::error::ValidationErr;
use crate::s3::utils::{get_children, get_text_option, get_text_result};
use xmltree::Element;

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    fn from_xml(element: &Element) -> Result<Tag, ValidationErr> {
        Ok(Tag {
            key: get_text_result(element, "Key")?,
            value: get_text_result(element, "Value")?,
        })
    }

    fn to_xml(&self) -> String {
        let mut data = String::from("<Tag>");
        push_text_element(&mut data, "Key", &self.key);
        push_text_element(&mut data, "Value", &self.value);
        data.push_str("</Tag>");
        data
    }
}

#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct AndOperator {
    pub prefix: Option<String>,
    pub tags: Vec<Tag>,
}

/// Selects the objects a rule applies to. An empty prefix selects every object.
#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct Filter {
    pub prefix: Option<String>,
    pub tag: Option<Tag>,
    pub and_operator: Option<AndOperator>,
}

impl Filter {
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
            ..Default::default()
        }
    }

    pub fn from_xml(element: &Element) -> Result<Filter, ValidationErr> {
        Ok(Filter {
            prefix: get_text_option(element, "Prefix"),
            tag: match element.get_child("Tag") {
                Some(v) => Some(Tag::from_xml(v)?),
                None => None,
            },
            and_operator: match element.get_child("And") {
                Some(v) => Some(AndOperator {
                    prefix: get_text_option(v, "Prefix"),
                    tags: get_children(v, "Tag")
                        .into_iter()
                        .map(Tag::from_xml)
                        .collect::<Result<Vec<_>, _>>()?,
                }),
                None => None,
            },
        })
    }

    pub fn to_xml(&self) -> String {
        let mut data = String::from("<Filter>");
        if let Some(v) = &self.prefix {
            push_text_element(&mut data, "Prefix", v);
        }
        if let Some(v) = &self.tag {
            data.push_str(&v.to_xml());
        }
        if let Some(v) = &self.and_operator {
            data.push_str("<And>");
            if let Some(p) = &v.prefix {
                push_text_element(&mut data, "Prefix", p);
            }
            for tag in &v.tags {
                data.push_str(&tag.to_xml());
            }
            data.push_str("</And>");
        }
        data.push_str("</Filter>");
        data
    }
}

