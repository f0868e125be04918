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

//! Various utility and helper functions

use crate::s3::client::DEFAULT_REGION;
use crate::s3::error::ValidationErr;
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use regex::Regex;
use sha2::{Digest, Sha256};
use std::borrow::Cow;
use xmltree::Element;

/// Date and time with UTC timezone
pub type UtcTime = DateTime<Utc>;

/// SHA-256 of an empty payload
pub const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

/// Encodes data using base64 algorithm
pub fn b64encode<T: AsRef<[u8]>>(input: T) -> String {
    BASE64.encode(input)
}

/// Returns hex encoded SHA-256 hash of given data
pub fn sha256_hash(data: &[u8]) -> String {
    format!("{:x}", Sha256::digest(data))
}

/// Returns base64 encoded MD5 of given data, the value expected by the `Content-MD5` header
pub fn md5sum_hash(data: &[u8]) -> String {
    b64encode(md5::compute(data).as_slice())
}

/// Gets current UTC time
pub fn utc_now() -> UtcTime {
    Utc::now()
}

/// Gets signer date value of given time
pub fn to_signer_date(time: UtcTime) -> String {
    time.format("%Y%m%d").to_string()
}

/// Gets AMZ date value of given time
pub fn to_amz_date(time: UtcTime) -> String {
    time.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Percent-encodes every byte except the unreserved set, as SigV4 requires
pub fn url_encode(s: &str) -> String {
    urlencoding::encode(s).into_owned()
}

const OBJECT_KEY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

pub fn urlencode_object_key(key: &str) -> String {
    utf8_percent_encode(key, OBJECT_KEY_ENCODE_SET).collect()
}

/// Returns a copy of the optional query parameters with `key` set to an empty value.
pub fn insert(data: Option<Multimap>, key: impl Into<String>) -> Multimap {
    let mut result: Multimap = data.unwrap_or_default();
    result.add(key, "");
    result
}

/// Escapes the five XML special characters in text content
pub fn xml_escape(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }
    let mut escaped = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Maps a `LocationConstraint` value to a region identifier.
///
/// Buckets in the original default region report an empty constraint (or the
/// legacy `US` alias), and the first European region may still report `EU`.
pub fn normalize_location_constraint(location: &str) -> String {
    match location.trim() {
        "" | "US" => DEFAULT_REGION.to_string(),
        "EU" => "eu-west-1".to_string(),
        v => v.to_string(),
    }
}

/// Checks if given hostname is valid or not
pub fn match_hostname(value: &str) -> bool {
    lazy_static! {
        static ref HOSTNAME_REGEX: Regex =
            Regex::new(r"^([a-z_\d-]{1,63}\.)*([a-z_\d-]{1,63})$").unwrap();
    }

    if !HOSTNAME_REGEX.is_match(value.to_lowercase().as_str()) {
        return false;
    }

    !value.split('.').any(|token| {
        token.starts_with('-')
            || token.starts_with('_')
            || token.ends_with('-')
            || token.ends_with('_')
    })
}

/// Validates given bucket name
pub fn check_bucket_name(bucket_name: &str, strict: bool) -> Result<(), ValidationErr> {
    lazy_static! {
        static ref IPV4_REGEX: Regex = Regex::new(
            r"^((25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9][0-9]|[0-9])\.){3}(25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9][0-9]|[0-9])$"
        )
        .unwrap();
        static ref VALID_BUCKET_NAME_REGEX: Regex =
            Regex::new("^[A-Za-z0-9][A-Za-z0-9\\.\\-_:]{1,61}[A-Za-z0-9]$").unwrap();
        static ref VALID_BUCKET_NAME_STRICT_REGEX: Regex =
            Regex::new("^[a-z0-9][a-z0-9\\.\\-]{1,61}[a-z0-9]$").unwrap();
    }

    let invalid = |msg: &str| {
        Err(ValidationErr::InvalidBucketName {
            name: bucket_name.to_string(),
            reason: msg.to_string(),
        })
    };

    if bucket_name.trim().is_empty() {
        return invalid("bucket name cannot be empty");
    }
    if bucket_name.len() < 3 {
        return invalid("bucket name cannot be less than 3 characters");
    }
    if bucket_name.len() > 63 {
        return invalid("bucket name cannot be greater than 63 characters");
    }
    if IPV4_REGEX.is_match(bucket_name) {
        return invalid("bucket name cannot be an IP address");
    }
    if bucket_name.contains("..") || bucket_name.contains(".-") || bucket_name.contains("-.") {
        return invalid("bucket name contains invalid successive characters '..', '.-' or '-.'");
    }

    if strict {
        if !VALID_BUCKET_NAME_STRICT_REGEX.is_match(bucket_name) {
            return invalid("bucket name does not follow S3 standards strictly");
        }
    } else if !VALID_BUCKET_NAME_REGEX.is_match(bucket_name) {
        return invalid("bucket name does not follow S3 standards");
    }

    Ok(())
}

/// Validates given object name
pub fn check_object_name(object_name: &str) -> Result<(), ValidationErr> {
    if object_name.is_empty() {
        return Err(ValidationErr::InvalidObjectName(
            "object name cannot be empty".into(),
        ));
    }
    if object_name.len() > 1024 {
        return Err(ValidationErr::InvalidObjectName(
            "object name cannot be greater than 1024 characters".into(),
        ));
    }
    Ok(())
}

/// Gets text value of given XML element for given tag.
pub fn get_text_result(element: &Element, tag: &str) -> Result<String, ValidationErr> {
    Ok(element
        .get_child(tag)
        .ok_or(ValidationErr::xml_error(format!("<{tag}> tag not found")))?
        .get_text()
        .unwrap_or_default()
        .to_string())
}

/// Gets optional text value of given XML element for given tag.
pub fn get_text_option(element: &Element, tag: &str) -> Option<String> {
    element
        .get_child(tag)
        .map(|v| v.get_text().unwrap_or_default().to_string())
}

/// Gets text value of given XML element for given tag, or empty string if absent.
pub fn get_text_default(element: &Element, tag: &str) -> String {
    get_text_option(element, tag).unwrap_or_default()
}

/// Returns all direct children of `element` named `tag`.
pub fn get_children<'a>(element: &'a Element, tag: &str) -> Vec<&'a Element> {
    element
        .children
        .iter()
        .filter_map(|n| n.as_element())
        .filter(|e| e.name == tag)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_constraint_aliases() {
        assert_eq!(normalize_location_constraint(""), "us-east-1");
        assert_eq!(normalize_location_constraint("US"), "us-east-1");
        assert_eq!(normalize_location_constraint("EU"), "eu-west-1");
        assert_eq!(normalize_location_constraint("us-west-2"), "us-west-2");
    }

    #[test]
    fn bucket_names() {
        assert!(check_bucket_name("my-bucket", true).is_ok());
        assert!(check_bucket_name("ab", true).is_err());
        assert!(check_bucket_name("192.168.1.1", true).is_err());
        assert!(check_bucket_name("My_Bucket", true).is_err());
        assert!(check_bucket_name("My_Bucket", false).is_ok());
        assert!(check_bucket_name("a..b", false).is_err());
    }

    #[test]
    fn escapes_xml_text() {
        assert_eq!(xml_escape("plain"), "plain");
        assert_eq!(xml_escape("a&b<c>"), "a&amp;b&lt;c&gt;");
    }

    #[test]
    fn hashes() {
        assert_eq!(sha256_hash(b""), EMPTY_SHA256);
        assert_eq!(md5sum_hash(b""), "1B2M2Y8AsgTpgAmY7PhCfg==");
    }

    #[test]
    fn object_keys_keep_slashes() {
        assert_eq!(urlencode_object_key("dir/a b.txt"), "dir/a%20b.txt");
    }
}

