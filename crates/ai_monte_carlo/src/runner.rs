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

//! The parallel runner: worker threads driving MO-MCTS iterations over
//! shared per-side trees until a stop flag is raised.
//!
//! Iterations are the unit of concurrency. Workers block only on the stop
//! flag poll between iterations and on per-node insertion inside the shared
//! trees. A failing iteration — an `Err` or a panic — is counted and
//! abandoned; the worker continues with a fresh start state.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;

use anyhow::Result;
use data::game::GameState;
use data::primitives::Side;
use data::sources::{RandomSource, RngSource};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use tracing::debug;

use crate::credit::WinLossDrawCredit;
use crate::momcts::MoMcts;
use crate::simulation::UniformRandomPolicy;
use crate::somcts::SoMcts;
use crate::statistic::RunStatistic;
use crate::tree::TreeNode;

/// Produces a fresh start state for each iteration. Implementations
/// re-randomize hidden information (deck order, the opponent's unseen hand)
/// using the provided per-worker random source.
pub type StartStateFn = Arc<dyn Fn(&mut dyn RandomSource) -> Result<GameState> + Send + Sync>;

/// Owns the shared trees, the stop flag, and the worker threads.
pub struct MctsRunner {
    first_root: Arc<TreeNode>,
    second_root: Arc<TreeNode>,
    stop: Arc<AtomicBool>,
    statistic: Arc<RunStatistic>,
    workers: Vec<JoinHandle<()>>,
}

impl Default for MctsRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl MctsRunner {
    pub fn new() -> Self {
        Self {
            first_root: Arc::new(TreeNode::new()),
            second_root: Arc::new(TreeNode::new()),
            stop: Arc::new(AtomicBool::new(false)),
            statistic: Arc::new(RunStatistic::new()),
            workers: Vec::new(),
        }
    }

    /// Spawns `threads` workers, each running iterations until [Self::stop]
    /// is called. Worker RNG streams are derived from `base_seed` and the
    /// worker index.
    pub fn run(&mut self, threads: usize, start_state: StartStateFn, base_seed: u64) {
        for index in 0..threads {
            let first_root = self.first_root.clone();
            let second_root = self.second_root.clone();
            let stop = self.stop.clone();
            let statistic = self.statistic.clone();
            let start_state = start_state.clone();
            let seed = base_seed.wrapping_add(index as u64);
            self.workers.push(std::thread::spawn(move || {
                worker_loop(first_root, second_root, stop, statistic, start_state, seed);
            }));
        }
    }

    /// Raises the stop flag. Workers finish their in-flight iteration and
    /// exit; call [Self::wait_until_stopped] to join them.
    pub fn stop(&self) {
        self.stop.store(true, Ordering::Release);
    }

    /// Joins all worker threads.
    pub fn wait_until_stopped(&mut self) {
        for worker in self.workers.drain(..) {
            // Workers catch panics per iteration and cannot panic themselves
            let _ = worker.join();
        }
    }

    pub fn root_node(&self, side: Side) -> Arc<TreeNode> {
        match side {
            Side::First => self.first_root.clone(),
            Side::Second => self.second_root.clone(),
        }
    }

    pub fn statistic(&self) -> &RunStatistic {
        &self.statistic
    }
}

fn worker_loop(
    first_root: Arc<TreeNode>,
    second_root: Arc<TreeNode>,
    stop: Arc<AtomicBool>,
    statistic: Arc<RunStatistic>,
    start_state: StartStateFn,
    seed: u64,
) {
    let mut momcts = match build_momcts(first_root, second_root, seed) {
        Ok(momcts) => momcts,
        Err(error) => {
            debug!(?error, "failed to construct worker MO-MCTS");
            return;
        }
    };
    let mut episode_rng =
        RngSource(Xoshiro256StarStar::seed_from_u64(seed ^ 0x9e37_79b9_7f4a_7c15));

    while !stop.load(Ordering::Acquire) {
        let outcome = catch_unwind(AssertUnwindSafe(|| {
            let game = start_state(&mut episode_rng)?;
            momcts.iterate(game)
        }));
        match outcome {
            Ok(Ok(_)) => statistic.record_success(),
            Ok(Err(error)) => {
                debug!(?error, "iteration failed");
                statistic.record_failure();
            }
            Err(_) => {
                debug!("iteration panicked");
                statistic.record_failure();
            }
        }
    }
}

fn build_momcts(
    first_root: Arc<TreeNode>,
    second_root: Arc<TreeNode>,
    seed: u64,
) -> Result<MoMcts> {
    let observer = |side: Side, root: Arc<TreeNode>, offset: u64| {
        SoMcts::new(
            side,
            root,
            Box::new(RngSource(Xoshiro256StarStar::seed_from_u64(seed.wrapping_add(offset)))),
            Box::new(RngSource(Xoshiro256StarStar::seed_from_u64(
                seed.wrapping_add(offset).wrapping_add(0x51_7c_c1_b7_27_22_0a_95),
            ))),
            Box::new(UniformRandomPolicy),
            Box::new(WinLossDrawCredit),
        )
    };
    MoMcts::new(
        observer(Side::First, first_root, 1),
        observer(Side::Second, second_root, 2),
    )
}
