// Copyright © Emberfall 2022-present

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at

//    https://www.apache.org/licenses/LICENSE-2.0

// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Aggregate iteration statistics shared by all workers.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for finished iterations. The only process-wide mutable state
/// outside the trees themselves.
#[derive(Debug, Default)]
pub struct RunStatistic {
    succeeded: AtomicU64,
    failed: AtomicU64,
}

impl RunStatistic {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_success(&self) {
        self.succeeded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failure(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn succeeded_iterations(&self) -> u64 {
        self.succeeded.load(Ordering::Relaxed)
    }

    pub fn failed_iterations(&self) -> u64 {
        self.failed.load(Ordering::Relaxed)
    }
}
