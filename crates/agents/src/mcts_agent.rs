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

//! The MCTS agent: thinks with the parallel runner, then replays the most
//! visited line out of the tree.
//!
//! Before each main action the agent runs a fresh search from the current
//! real state (the tree is not kept between actions). It then serves the
//! action's parameter requests by walking its tree: at every request it
//! picks the child with the greatest visit count among the currently legal
//! choices, breaking ties by the higher mean credit.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use data::game::GameState;
use data::game_actions::{ActionChoices, ActionType};
use data::primitives::Side;
use data::sources::ActionParameterSource;
use data::view::ObserverView;
use tracing::debug;
use with_error::{verify, WithError};

use ai_monte_carlo::runner::MctsRunner;
use ai_monte_carlo::tree::TreeNode;

use crate::{determinize, Agent};

#[derive(Debug, Clone, Copy)]
pub struct MctsAgentConfig {
    /// Worker threads per search
    pub threads: usize,
    /// Wall-clock think budget per main action
    pub think_time: Duration,
    /// Base seed for worker RNG streams
    pub base_seed: u64,
}

impl Default for MctsAgentConfig {
    fn default() -> Self {
        Self { threads: 2, think_time: Duration::from_millis(500), base_seed: 2022 }
    }
}

pub struct MctsAgent {
    config: MctsAgentConfig,
    /// Cursor into the last search's tree while serving one action
    node: Option<Arc<TreeNode>>,
    /// Bumped per search so repeated thinks explore differently
    searches: u64,
}

impl MctsAgent {
    pub fn new(config: MctsAgentConfig) -> Self {
        Self { config, node: None, searches: 0 }
    }
}

impl ActionParameterSource for MctsAgent {
    fn get_number(&mut self, action_type: ActionType, choices: &ActionChoices) -> Result<usize> {
        verify!(!choices.is_empty(), "Empty choices for {:?}", action_type);
        // Forced sub-choices have no tree level
        if action_type != ActionType::Main && choices.size() == 1 {
            return Ok(0);
        }

        let node = self.node.clone().with_error(|| "begin_action was not called")?;
        verify!(
            node.action_type() == Some(action_type),
            "Tree dispatches {:?}, engine requested {:?}",
            node.action_type(),
            action_type
        );

        let mut best: Option<(u64, f64, usize, Arc<TreeNode>)> = None;
        node.for_each_child(|position, edge| {
            if position >= choices.size() {
                return;
            }
            let visits = edge.stats.chosen_times();
            let mean = edge.stats.mean_credit();
            let better = match &best {
                None => true,
                Some((best_visits, best_mean, best_position, _)) => {
                    (visits, mean) > (*best_visits, *best_mean)
                        || (visits == *best_visits && mean == *best_mean
                            && position < *best_position)
                }
            };
            if better {
                best = Some((visits, mean, position, edge.node.clone()));
            }
        });

        let (visits, mean, position, child) =
            best.with_error(|| "No choice was evaluated by the search")?;
        debug!(?action_type, position, visits, mean, "mcts_agent choice");
        self.node = Some(child);
        Ok(position)
    }
}

impl Agent for MctsAgent {
    fn name(&self) -> &'static str {
        "MCTS"
    }

    fn begin_action(&mut self, game: &GameState, side: Side) -> Result<()> {
        self.searches += 1;
        let mut runner = MctsRunner::new();
        let start_states = determinize::start_states(game, side);
        runner.run(
            self.config.threads,
            start_states,
            self.config.base_seed.wrapping_add(self.searches.wrapping_mul(0x2545_f491_4f6c_dd1d)),
        );
        std::thread::sleep(self.config.think_time);
        runner.stop();
        runner.wait_until_stopped();
        debug!(
            succeeded = runner.statistic().succeeded_iterations(),
            failed = runner.statistic().failed_iterations(),
            "search finished"
        );

        // Every iteration anchors at the fingerprint of the real view, so
        // the node for the current board must exist
        let fingerprint = ObserverView::new(game, side).fingerprint();
        self.node = runner.root_node(side).board_node_map().get(fingerprint);
        verify!(self.node.is_some(), "Search produced no node for the current board");
        Ok(())
    }

    fn as_param_source(&mut self) -> &mut dyn ActionParameterSource {
        self
    }
}
