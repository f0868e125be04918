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

//! Bucket replication configuration model.
//!
//! Every element the service returns is modelled so that a configuration can be
//! read, changed in one place and written back without losing anything.

mod destination;
mod filter;
mod replication_config;
mod replication_rule;

pub use destination::{
    AccessControlTranslation, Destination, EncryptionConfig, Metrics, ReplicationTime,
};
pub use filter::{AndOperator, Filter, Tag};
pub use replication_config::ReplicationConfig;
pub use replication_rule::{ReplicationRule, SourceSelectionCriteria};

pub(crate) fn status_str(enabled: bool) -> &'static str {
    if enabled { "Enabled" } else { "Disabled" }
}

/// Appends `<tag><Status>Enabled|Disabled</Status></tag>`.
pub(crate) fn push_status_element(data: &mut String, tag: &str, enabled: bool) {
    data.push_str(&format!(
        "<{tag}><Status>{}</Status></{tag}>",
        status_str(enabled)
    ));
}

/// Appends `<tag>value</tag>` with the value escaped.
pub(crate) fn push_text_element(data: &mut String, tag: &str, value: &str) {
    data.push_str(&format!(
        "<{tag}>{}</{tag}>",
        crate::s3::utils::xml_escape(value)
    ));
}

