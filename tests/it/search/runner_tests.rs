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

use std::sync::Arc;
use std::time::{Duration, Instant};

use ai_monte_carlo::runner::{MctsRunner, StartStateFn};
use data::primitives::Side;

fn standard_start_states() -> StartStateFn {
    let deck = cards::decklists::standard_deck();
    Arc::new(move |rng| rules::episode::new_episode(&deck, &deck, rng))
}

#[test]
fn stop_flag_halts_all_workers_promptly() {
    cards::initialize();
    let mut runner = MctsRunner::new();
    runner.run(2, standard_start_states(), 99);
    std::thread::sleep(Duration::from_millis(250));
    runner.stop();

    let joining = Instant::now();
    runner.wait_until_stopped();
    // Workers only finish their in-flight iteration after the flag is seen
    assert!(joining.elapsed() < Duration::from_secs(10));
    assert!(runner.statistic().succeeded_iterations() > 0);
    assert_eq!(runner.statistic().failed_iterations(), 0);
}

#[test]
fn backpropagated_visits_match_succeeded_iterations() {
    cards::initialize();
    let mut runner = MctsRunner::new();
    runner.run(4, standard_start_states(), 123);
    std::thread::sleep(Duration::from_millis(300));
    runner.stop();
    runner.wait_until_stopped();

    let succeeded = runner.statistic().succeeded_iterations();
    assert!(succeeded > 0);

    // Every successful iteration traverses exactly one edge out of the node
    // anchored for its start view, and failed iterations traverse none
    let root = runner.root_node(Side::First);
    let total: u64 =
        root.board_node_map().nodes().iter().map(|node| node.visit_sum()).sum();
    assert_eq!(total, succeeded);
}
