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

//! Responses for the S3 operations used by replication setup and verification

mod bucket_exists;
mod create_bucket;
mod get_bucket_location;
mod get_bucket_replication;
mod list_objects;
mod put_bucket_replication;
mod put_bucket_versioning;
mod put_object;
mod stat_object;

pub use bucket_exists::BucketExistsResponse;
pub use create_bucket::CreateBucketResponse;
pub use get_bucket_location::GetBucketLocationResponse;
pub use get_bucket_replication::GetBucketReplicationResponse;
pub use list_objects::ListObjectsResponse;
pub use put_bucket_replication::PutBucketReplicationResponse;
pub use put_bucket_versioning::PutBucketVersioningResponse;
pub use put_object::PutObjectResponse;
pub use stat_object::StatObjectResponse;

