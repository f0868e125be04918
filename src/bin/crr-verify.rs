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
use crr::replication::{
    BucketEndpoint, DestinationReport, ReplicationVerifier, VerificationProbe, VerifyOptions,
};
use crr::s3::S3Client;
use crr::s3::creds::default_credentials;
use std::process::ExitCode;

/// Verify cross-region replication by uploading a probe object to the source bucket
/// and waiting for it to appear in each destination.
///
/// Destinations are read from the replication configuration of the source bucket
/// unless one is given with --dest-bucket and --dest-region. A probe that never
/// arrives is reported, not treated as a failure.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    #[arg(long)]
    source_bucket: String,
    #[arg(long, default_value = "us-east-1")]
    source_region: String,
    /// Check only this destination.
    #[arg(long, requires = "dest_region")]
    dest_bucket: Option<String>,
    #[arg(long, requires = "dest_bucket")]
    dest_region: Option<String>,
    /// Profile of the shared credentials file; environment credentials are used when absent.
    #[arg(long)]
    profile: Option<String>,
    /// Key of the probe object; a unique key is generated when absent.
    #[arg(long)]
    key: Option<String>,
    #[arg(long, default_value = "https://s3.amazonaws.com")]
    endpoint: String,
}

fn print_keys(kind: &str, bucket: &str, keys: &[String]) {
    println!("Objects in {kind} bucket '{bucket}' ({}):", keys.len());
    for key in keys {
        println!("  - {key}");
    }
}

fn print_destination(report: &DestinationReport) {
    print_keys("destination", &report.bucket, &report.keys);
    if report.found {
        println!(
            "PASS '{}' ({}): probe replicated after {} attempt(s)",
            report.bucket, report.region, report.attempts
        );
    } else {
        println!(
            "FAIL '{}' ({}): probe not replicated after {} attempt(s)",
            report.bucket, report.region, report.attempts
        );
    }
    println!(
        "     objects: source {} / destination {} ({})",
        report.source_count,
        report.dest_count,
        if report.caught_up { "caught up" } else { "behind" }
    );
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let provider = default_credentials(cli.profile.as_deref())?;
    let s3 = S3Client::new(cli.endpoint.parse()?, Some(provider))?;

    let source = BucketEndpoint::new(cli.source_bucket, cli.source_region);
    let key = cli.key.unwrap_or_else(VerificationProbe::generate_key);
    let verifier = ReplicationVerifier::new(s3, VerifyOptions::default());

    println!("Uploading probe '{key}' to bucket '{}'", source.name);
    let report = match (cli.dest_bucket, cli.dest_region) {
        (Some(bucket), Some(region)) => {
            verifier
                .verify_destination(&source, &key, BucketEndpoint::new(bucket, region))
                .await?
        }
        _ => verifier.verify(&source, &key).await?,
    };

    print_keys("source", &report.source.name, &report.source_keys);
    for destination in &report.destinations {
        print_destination(destination);
    }
    if report.all_found() {
        println!("Replication verified for all destinations");
    } else {
        println!("Replication not yet visible for every destination");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("crr-verify: {e}");
            ExitCode::FAILURE
        }
    }
}

