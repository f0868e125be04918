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

use crate::s3::utils::url_encode;
use std::collections::BTreeMap;

/// Multimap for string key and string value
pub type Multimap = multimap::MultiMap<String, String>;

/// Collapses runs of spaces into one, as required for canonical header values.
fn collapse_spaces(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_space = false;
    for c in s.trim().chars() {
        if c == ' ' {
            if !prev_space {
                result.push(' ');
            }
            prev_space = true;
        } else {
            result.push(c);
            prev_space = false;
        }
    }
    result
}

pub trait MultimapExt {
    /// Adds a key-value pair to the multimap
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V);

    /// Adds all entries of another multimap to the current multimap
    fn add_multimap(&mut self, other: Multimap);

    /// Converts multimap to HTTP query string
    fn to_query_string(&self) -> String;

    /// Converts multimap to canonical query string
    fn get_canonical_query_string(&self) -> String;

    /// Converts multimap to signed headers and canonical headers
    fn get_canonical_headers(&self) -> (String, String);
}

impl MultimapExt for Multimap {
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.insert(key.into(), value.into());
    }

    fn add_multimap(&mut self, other: Multimap) {
        for (key, values) in other.into_iter() {
            self.insert_many(key, values);
        }
    }

    fn to_query_string(&self) -> String {
        let mut query = String::new();
        for (key, values) in self.iter_all() {
            for value in values {
                if !query.is_empty() {
                    query.push('&');
                }
                query.push_str(&url_encode(key));
                query.push('=');
                query.push_str(&url_encode(value));
            }
        }
        query
    }

    fn get_canonical_query_string(&self) -> String {
        let mut sorted: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (key, values) in self.iter_all() {
            let entry = sorted.entry(url_encode(key)).or_default();
            entry.extend(values.iter().map(|v| url_encode(v)));
        }

        let mut query = String::new();
        for (key, mut values) in sorted {
            values.sort();
            for value in values {
                if !query.is_empty() {
                    query.push('&');
                }
                query.push_str(&key);
                query.push('=');
                query.push_str(&value);
            }
        }
        query
    }

    fn get_canonical_headers(&self) -> (String, String) {
        let mut sorted: BTreeMap<String, String> = BTreeMap::new();

        for (k, values) in self.iter_all() {
            let key = k.to_lowercase();
            if key == "authorization" || key == "user-agent" {
                continue;
            }

            let mut vs: Vec<String> = values.iter().map(|v| collapse_spaces(v)).collect();
            vs.sort();
            sorted.insert(key, vs.join(","));
        }

        let signed_headers = sorted.keys().cloned().collect::<Vec<_>>().join(";");
        let canonical_headers = sorted
            .iter()
            .map(|(k, v)| format!("{k}:{v}"))
            .collect::<Vec<_>>()
            .join("\n");

        (signed_headers, canonical_headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_query_string_is_sorted_and_encoded() {
        let mut query = Multimap::new();
        query.add("prefix", "a b");
        query.add("list-type", "2");
        query.add("continuation-token", "x/y");
        assert_eq!(
            query.get_canonical_query_string(),
            "continuation-token=x%2Fy&list-type=2&prefix=a%20b"
        );
    }

    #[test]
    fn canonical_headers_skip_authorization_and_collapse_spaces() {
        let mut headers = Multimap::new();
        headers.add("Host", "s3.us-east-1.amazonaws.com");
        headers.add("X-Amz-Date", "20130524T000000Z");
        headers.add("Authorization", "secret");
        headers.add("x-amz-meta-note", "  a   b ");

        let (signed, canonical) = headers.get_canonical_headers();
        assert_eq!(signed, "host;x-amz-date;x-amz-meta-note");
        assert_eq!(
            canonical,
            "host:s3.us-east-1.amazonaws.com\nx-amz-date:20130524T000000Z\nx-amz-meta-note:a b"
        );
    }

    #[test]
    fn empty_value_keeps_key_in_query_string() {
        let mut query = Multimap::new();
        query.add("replication", "");
        assert_eq!(query.to_query_string(), "replication=");
    }
}

