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

//! Implementation of the Identity and Access Management (aka IAM) operations needed to
//! delegate replication to the storage service
//!
//! IAM speaks the AWS query protocol: every call is a form-encoded `POST /` carrying
//! `Action` and `Version`, signed with Signature V4 for the `iam` service in `us-east-1`.

pub mod builders;
pub mod client;
pub mod error;
pub mod policy;
pub mod response;
pub mod types;
pub mod utils;

pub use client::{DEFAULT_IAM_ENDPOINT, IamClient, IamClientBuilder};

