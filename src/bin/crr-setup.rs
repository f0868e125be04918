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

use clap::Parser;
use crr::iam::{DEFAULT_IAM_ENDPOINT, IamClient};
use crr::replication::{BucketEndpoint, ReplicationSetup, SetupOptions, SetupStage};
use crr::s3::S3Client;
use crr::s3::creds::default_credentials;
use std::process::ExitCode;

/// Set up cross-region replication from a source bucket to a destination bucket.
///
/// Creates the destination bucket if needed, enables versioning on both buckets,
/// creates or reuses the replication role with its policy, and adds a replication
/// rule for the destination to the source bucket.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// Bucket to replicate from; it must already exist.
    #[arg(long)]
    source_bucket: String,
    #[arg(long, default_value = "us-east-1")]
    source_region: String,
    /// Bucket to replicate to; created when missing.
    #[arg(long)]
    dest_bucket: String,
    #[arg(long, default_value = "us-west-2")]
    dest_region: String,
    /// Name of the role the storage service assumes to replicate.
    #[arg(long, default_value = "s3-replication-role-example")]
    role_name: String,
    /// Profile of the shared credentials file; environment credentials are used when absent.
    #[arg(long)]
    profile: Option<String>,
    #[arg(long, default_value = "https://s3.amazonaws.com")]
    endpoint: String,
    #[arg(long, default_value = DEFAULT_IAM_ENDPOINT)]
    iam_endpoint: String,
}

fn print_stage(stage: SetupStage) {
    match stage {
        SetupStage::DestinationReady { bucket, created } => {
            let how = if created { "created" } else { "already exists" };
            println!("Destination bucket '{bucket}' ready ({how})");
        }
        SetupStage::VersioningEnabled { bucket } => {
            println!("Versioning enabled on bucket '{bucket}'");
        }
        SetupStage::RoleReady { arn, created } => {
            let how = if created { "created" } else { "existing" };
            println!("Replication role ready ({how}): {arn}");
        }
        SetupStage::ReplicationApplied { source, rules } => {
            println!("Replication configuration applied to '{source}' ({rules} rule(s))");
        }
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let provider = default_credentials(cli.profile.as_deref())?;
    let s3 = S3Client::new(cli.endpoint.parse()?, Some(provider.clone()))?;
    let iam = IamClient::new(cli.iam_endpoint.parse()?, Some(provider))?;

    let setup = ReplicationSetup::new(s3, iam, SetupOptions::default());
    let outcome = setup
        .run_with_progress(
            BucketEndpoint::new(cli.source_bucket, cli.source_region),
            BucketEndpoint::new(cli.dest_bucket, cli.dest_region),
            &cli.role_name,
            print_stage,
        )
        .await?;

    println!(
        "Cross-region replication from '{}' to '{}' is set up",
        outcome.source.name,
        outcome.destination.handle().name
    );
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("crr-setup: {e}");
            ExitCode::FAILURE
        }
    }
}

