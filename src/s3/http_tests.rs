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

use super::http::{BaseUrl, Url, match_aws_endpoint, match_aws_s3_endpoint};
use super::multimap_ext::{Multimap, MultimapExt};
use http::Method;

#[test]
fn test_url_display_with_port_and_query() {
    let mut query = Multimap::new();
    query.add("versioning", "");
    let url = Url {
        https: false,
        host: "localhost".to_string(),
        port: 9000,
        path: "/bucket".to_string(),
        query,
    };
    assert_eq!(url.to_string(), "http://localhost:9000/bucket?versioning=");
    assert_eq!(url.host_header_value(), "localhost:9000");
}

#[test]
fn test_url_display_empty_host_fails() {
    let url = Url::default();
    assert!(std::fmt::write(&mut String::new(), format_args!("{url}")).is_err());
}

#[test]
fn test_match_aws_endpoints() {
    assert!(match_aws_endpoint("s3.amazonaws.com"));
    assert!(match_aws_endpoint("iam.amazonaws.com"));
    assert!(match_aws_endpoint("s3.cn-north-1.amazonaws.com.cn"));
    assert!(!match_aws_endpoint("play.min.io"));

    assert!(match_aws_s3_endpoint("s3.amazonaws.com"));
    assert!(match_aws_s3_endpoint("s3.eu-west-1.amazonaws.com"));
    assert!(match_aws_s3_endpoint("s3-us-west-2.amazonaws.com"));
    assert!(match_aws_s3_endpoint("s3.dualstack.us-east-1.amazonaws.com"));
    assert!(!match_aws_s3_endpoint("iam.amazonaws.com"));
}

#[test]
fn test_baseurl_from_str_plain_hosts() {
    let base: BaseUrl = "http://127.0.0.1:9000".parse().unwrap();
    assert!(!base.https);
    assert!(!base.is_aws_host());
    assert!(!base.virtual_style);

    let base: BaseUrl = "https://minio.example.com:443".parse().unwrap();
    let url = base.build_service_url(&Multimap::new());
    assert_eq!(url.to_string(), "https://minio.example.com/");

    let base: BaseUrl = "[::1]:9000".parse().unwrap();
    assert_eq!(base.host(), "[::1]");
}

#[test]
fn test_baseurl_rejects_path_and_query() {
    assert!("https://s3.amazonaws.com/bucket".parse::<BaseUrl>().is_err());
    assert!("https://s3.amazonaws.com/?x=1".parse::<BaseUrl>().is_err());
    assert!("ftp://s3.amazonaws.com".parse::<BaseUrl>().is_err());
}

#[test]
fn test_iam_host_is_not_an_s3_host() {
    let base: BaseUrl = "https://iam.amazonaws.com".parse().unwrap();
    assert!(!base.is_aws_host());
    let url = base.build_service_url(&Multimap::new());
    assert_eq!(url.host, "iam.amazonaws.com");
}

#[test]
fn test_aws_regional_host_per_request() {
    let base: BaseUrl = "https://s3.amazonaws.com".parse().unwrap();
    assert!(base.is_aws_host());
    assert!(base.region.is_empty());

    let mut query = Multimap::new();
    query.add("replication", "");
    let url = base
        .build_url(&Method::PUT, "us-west-2", &query, Some("src"), None)
        .unwrap();
    assert_eq!(url.host, "src.s3.us-west-2.amazonaws.com");
    assert_eq!(url.path, "/");
    assert_eq!(
        url.to_string(),
        "https://src.s3.us-west-2.amazonaws.com/?replication="
    );
}

#[test]
fn test_legacy_host_yields_region() {
    let base: BaseUrl = "https://s3-eu-west-1.amazonaws.com".parse().unwrap();
    assert_eq!(base.region, "eu-west-1");
    let url = base
        .build_url(&Method::GET, "eu-west-1", &Multimap::new(), Some("b"), Some("k"))
        .unwrap();
    assert_eq!(url.host, "b.s3.eu-west-1.amazonaws.com");
}

#[test]
fn test_create_bucket_and_location_use_path_style() {
    let base: BaseUrl = "https://s3.amazonaws.com".parse().unwrap();

    let url = base
        .build_url(&Method::PUT, "eu-central-1", &Multimap::new(), Some("dst"), None)
        .unwrap();
    assert_eq!(url.host, "s3.eu-central-1.amazonaws.com");
    assert_eq!(url.path, "/dst");

    let mut query = Multimap::new();
    query.add("location", "");
    let url = base
        .build_url(&Method::GET, "us-east-1", &query, Some("dst"), None)
        .unwrap();
    assert_eq!(url.host, "s3.us-east-1.amazonaws.com");
    assert_eq!(url.path, "/dst");
}

#[test]
fn test_dotted_bucket_uses_path_style_over_https() {
    let base: BaseUrl = "https://s3.amazonaws.com".parse().unwrap();
    let url = base
        .build_url(&Method::HEAD, "us-east-1", &Multimap::new(), Some("my.bucket"), None)
        .unwrap();
    assert_eq!(url.host, "s3.us-east-1.amazonaws.com");
    assert_eq!(url.path, "/my.bucket");
}

#[test]
fn test_object_key_is_encoded_in_path() {
    let base: BaseUrl = "http://localhost:9000".parse().unwrap();
    let url = base
        .build_url(
            &Method::PUT,
            "us-east-1",
            &Multimap::new(),
            Some("bucket"),
            Some("dir/replication test.txt"),
        )
        .unwrap();
    assert_eq!(url.path, "/bucket/dir/replication%20test.txt");
}

