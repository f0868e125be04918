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

//! Endpoint parsing and request URL construction

use crate::s3::error::ValidationErr;
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::utils::{match_hostname, urlencode_object_key};
use http::{Method, Uri};
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

lazy_static! {
    static ref AWS_ENDPOINT_REGEX: Regex = Regex::new(r".*\.amazonaws\.com(|\.cn)$").unwrap();
    static ref AWS_S3_ENDPOINT_REGEX: Regex =
        Regex::new(r"^s3([.-][a-z\d-]{1,63})*\.amazonaws\.com(|\.cn)$").unwrap();
}

#[derive(Clone, Debug)]
/// Represents HTTP URL
pub struct Url {
    pub https: bool,
    pub host: String,
    pub port: u16,
    pub path: String,
    pub query: Multimap,
}

impl Url {
    pub fn host_header_value(&self) -> String {
        if self.port > 0 {
            return format!("{}:{}", self.host, self.port);
        }
        self.host.clone()
    }
}

impl Default for Url {
    fn default() -> Self {
        Self {
            https: true,
            host: String::default(),
            port: u16::default(),
            path: String::default(),
            query: Multimap::default(),
        }
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.host.is_empty() {
            return Err(fmt::Error);
        }

        f.write_str(if self.https { "https://" } else { "http://" })?;
        f.write_str(&self.host_header_value())?;

        if !self.path.starts_with('/') {
            f.write_str("/")?;
        }
        f.write_str(&self.path)?;

        if !self.query.is_empty() {
            f.write_str("?")?;
            f.write_str(&self.query.to_query_string())?;
        }

        Ok(())
    }
}

/// Returns true for any `*.amazonaws.com` (or `.com.cn`) host
pub fn match_aws_endpoint(value: &str) -> bool {
    AWS_ENDPOINT_REGEX.is_match(&value.to_lowercase())
}

/// Returns true for Amazon S3 service hosts such as `s3.amazonaws.com`,
/// `s3.eu-west-1.amazonaws.com`, `s3.dualstack.us-east-1.amazonaws.com` or
/// the legacy `s3-us-west-2.amazonaws.com`.
pub fn match_aws_s3_endpoint(value: &str) -> bool {
    let lvalue = value.to_lowercase();
    AWS_S3_ENDPOINT_REGEX.is_match(&lvalue)
        && !lvalue
            .split('.')
            .any(|token| token.starts_with('-') || token.ends_with('-'))
}

#[derive(Default)]
struct AwsInfo {
    region: String,
    s3_prefix: String,
    domain_suffix: String,
    dualstack: bool,
}

fn get_aws_info(host: &str) -> Result<Option<AwsInfo>, ValidationErr> {
    if !match_hostname(host) || !match_aws_endpoint(host) || !match_aws_s3_endpoint(host) {
        return Ok(None);
    }

    let lhost = host.to_lowercase();
    if lhost.contains("s3-accelerate") {
        return Err(ValidationErr::UrlBuildError(format!(
            "accelerate endpoint {host} cannot serve bucket configuration requests"
        )));
    }

    // "s3." or the legacy "s3-<region>." form
    let (s3_prefix, rest) = match lhost.strip_prefix("s3.") {
        Some(rest) => ("s3.".to_string(), rest.to_string()),
        None => {
            let (first, rest) = lhost.split_once('.').unwrap_or((&lhost, ""));
            let legacy_region = first.trim_start_matches("s3-");
            let rest = if legacy_region == "external-1" {
                format!("us-east-1.{rest}")
            } else {
                format!("{legacy_region}.{rest}")
            };
            ("s3.".to_string(), rest)
        }
    };

    let mut tokens: Vec<&str> = rest.split('.').collect();
    let dualstack = tokens[0] == "dualstack";
    if dualstack {
        tokens.remove(0);
    }

    let mut region = String::new();
    if tokens[0] != "amazonaws" {
        region = tokens.remove(0).to_string();
    }
    let domain_suffix = tokens.join(".");

    if domain_suffix.ends_with(".cn") && region.is_empty() {
        return Err(ValidationErr::UrlBuildError(format!(
            "region missing in Amazon S3 China endpoint {host}"
        )));
    }

    Ok(Some(AwsInfo {
        region,
        s3_prefix,
        domain_suffix,
        dualstack,
    }))
}

#[derive(Clone, Debug)]
/// Represents the base URL of an S3 (or IAM) endpoint
pub struct BaseUrl {
    pub https: bool,
    host: String,
    port: u16,
    pub region: String,
    aws_s3_prefix: String,
    aws_domain_suffix: String,
    pub dualstack: bool,
    pub virtual_style: bool,
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self {
            https: true,
            host: "127.0.0.1".to_string(),
            port: 9000,
            region: String::new(),
            aws_s3_prefix: String::new(),
            aws_domain_suffix: String::new(),
            dualstack: false,
            virtual_style: false,
        }
    }
}

impl FromStr for BaseUrl {
    type Err = ValidationErr;

    /// Convert a string to a BaseUrl.
    ///
    /// # Examples
    ///
    /// ```
    /// use crr::s3::http::BaseUrl;
    ///
    /// let base_url: BaseUrl = "https://s3.amazonaws.com".parse().unwrap();
    /// assert!(base_url.is_aws_host());
    /// let base_url: BaseUrl = "http://127.0.0.1:9000".parse().unwrap();
    /// assert!(!base_url.is_aws_host());
    /// ```
    fn from_str(s: &str) -> Result<Self, ValidationErr> {
        let url = s.parse::<Uri>()?;

        let https = match url.scheme_str() {
            None | Some("https") => true,
            Some("http") => false,
            Some(_) => {
                return Err(ValidationErr::InvalidBaseUrl(
                    "scheme must be http or https".into(),
                ));
            }
        };

        let host = url
            .host()
            .ok_or_else(|| ValidationErr::InvalidBaseUrl("valid host must be provided".into()))?;
        let host = if host.parse::<std::net::Ipv6Addr>().is_ok() {
            format!("[{host}]")
        } else {
            host.to_string()
        };

        let mut port = url.port_u16().unwrap_or(0);
        if (https && port == 443) || (!https && port == 80) {
            port = 0;
        }

        if url.path() != "/" && !url.path().is_empty() {
            return Err(ValidationErr::InvalidBaseUrl(
                "path must be empty for base URL".into(),
            ));
        }
        if url.query().is_some() {
            return Err(ValidationErr::InvalidBaseUrl(
                "query must be none for base URL".into(),
            ));
        }

        let aws = get_aws_info(&host)?.unwrap_or_default();
        let virtual_style = !aws.domain_suffix.is_empty();

        Ok(BaseUrl {
            https,
            host,
            port,
            region: aws.region,
            aws_s3_prefix: aws.s3_prefix,
            aws_domain_suffix: aws.domain_suffix,
            dualstack: aws.dualstack,
            virtual_style,
        })
    }
}

impl BaseUrl {
    /// Checks base URL is an Amazon S3 host
    pub fn is_aws_host(&self) -> bool {
        !self.aws_domain_suffix.is_empty()
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    fn aws_regional_host(&self, region: &str) -> String {
        let mut host = self.aws_s3_prefix.clone();
        if self.dualstack {
            host.push_str("dualstack.");
        }
        host.push_str(region);
        host.push('.');
        host.push_str(&self.aws_domain_suffix);
        host
    }

    /// Builds the URL of a request that addresses no bucket, such as an IAM query.
    pub fn build_service_url(&self, query: &Multimap) -> Url {
        Url {
            https: self.https,
            host: self.host.clone(),
            port: self.port,
            path: String::from("/"),
            query: query.clone(),
        }
    }

    /// Builds URL from base URL for given parameters for S3 operation
    pub fn build_url(
        &self,
        method: &Method,
        region: &str,
        query: &Multimap,
        bucket_name: Option<&str>,
        object_name: Option<&str>,
    ) -> Result<Url, ValidationErr> {
        let mut url = self.build_service_url(query);
        if self.is_aws_host() {
            url.host = self.aws_regional_host(region);
        }

        let Some(bucket) = bucket_name else {
            return Ok(url);
        };

        // CreateBucket and GetBucketLocation require path style on Amazon S3, and a
        // bucket name containing '.' breaks certificate validation in virtual style.
        let enforce_path_style = (method == Method::PUT
            && object_name.is_none()
            && query.is_empty())
            || query.contains_key("location")
            || (bucket.contains('.') && self.https);

        let mut path = String::new();
        if enforce_path_style || !self.virtual_style {
            path.push('/');
            path.push_str(bucket);
        } else {
            url.host = format!("{bucket}.{}", url.host);
        }

        if let Some(v) = object_name {
            if !v.starts_with('/') {
                path.push('/');
            }
            path.push_str(&urlencode_object_key(v));
        }
        if path.is_empty() {
            path.push('/');
        }
        url.path = path;

        Ok(url)
    }
}

