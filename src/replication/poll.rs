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

use std::future::Future;
use std::time::Duration;

/// A bounded, fixed-interval polling budget.
///
/// Each attempt is preceded by a sleep of `interval`, so exhausting the budget takes
/// `max_attempts * interval`. There is no backoff and no jitter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PollPolicy {
    pub max_attempts: u32,
    pub interval: Duration,
}

/// Result of [`PollPolicy::poll`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PollOutcome {
    pub found: bool,
    /// Attempts made, including the successful one.
    pub attempts: u32,
}

impl PollPolicy {
    /// Replication probe: 12 attempts, 10 seconds apart.
    pub const VERIFY: PollPolicy = PollPolicy::new(12, Duration::from_secs(10));

    /// Visibility of a freshly created bucket: 20 attempts, 5 seconds apart.
    pub const BUCKET_VISIBILITY: PollPolicy = PollPolicy::new(20, Duration::from_secs(5));

    /// Readability of a freshly attached role policy: 10 attempts, 1 second apart.
    pub const ROLE_USABILITY: PollPolicy = PollPolicy::new(10, Duration::from_secs(1));

    pub const fn new(max_attempts: u32, interval: Duration) -> Self {
        Self {
            max_attempts,
            interval,
        }
    }

    /// Worst-case time spent before giving up.
    pub fn budget(&self) -> Duration {
        self.interval * self.max_attempts
    }

    /// Sleeps `interval`, then runs `check` with the 1-based attempt number, until
    /// `check` returns `true` or the attempts are used up.
    pub async fn poll<F, Fut>(&self, mut check: F) -> PollOutcome
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = bool>,
    {
        for attempt in 1..=self.max_attempts {
            tokio::time::sleep(self.interval).await;
            if check(attempt).await {
                return PollOutcome {
                    found: true,
                    attempts: attempt,
                };
            }
        }
        PollOutcome {
            found: false,
            attempts: self.max_attempts,
        }
    }
}
