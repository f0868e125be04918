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

//! Argument builders for the IAM role and policy operations

mod create_role;
mod get_role;
mod get_role_policy;
mod put_role_policy;

pub use create_role::*;
pub use get_role::*;
pub use get_role_policy::*;
pub use put_role_policy::*;

