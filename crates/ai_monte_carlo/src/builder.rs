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

//! Drives the rules engine for one main action of an iteration, in either
//! the selection phase (walking and growing the tree) or the simulation
//! phase (random rollout).

use std::sync::Arc;

use anyhow::Result;
use data::game::GameState;
use data::game_actions::{ActionChoices, ActionType, GameResult};
use data::sources::{ActionParameterSource, RandomSource};
use rules::actions;
use with_error::verify;

use crate::selection::SelectionPolicy;
use crate::simulation::SimulationPolicy;
use crate::tree::TreeNode;
use crate::updater::TreeUpdater;

/// Result of one selection-phase step.
pub struct SelectOutcome {
    pub result: GameResult,
    /// Cursor after the main action: the node from which the next main
    /// action would dispatch
    pub node: Arc<TreeNode>,
    /// True when this step expanded a brand-new leaf or ended the episode;
    /// the observer moves to the simulation stage either way
    pub switch_to_simulation: bool,
}

/// Stateless driver binding the selection policy to the rules engine.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    policy: SelectionPolicy,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the game by one main action in the selection phase.
    ///
    /// Every parameter request walks one tree level: the policy picks a
    /// child of the cursor (expanding on first visit), the traversed edge is
    /// recorded in `updater`, and the cursor descends. After the first
    /// expansion the remainder of this action's requests are answered
    /// randomly without touching the tree. Forced sub-choices bypass the
    /// tree entirely.
    pub fn perform_select(
        &self,
        game: &mut GameState,
        node: Arc<TreeNode>,
        updater: &mut TreeUpdater,
        rollout_rng: &mut dyn RandomSource,
        entropy_rng: &mut dyn RandomSource,
    ) -> Result<SelectOutcome> {
        let mut source = SelectionSource {
            policy: &self.policy,
            cursor: node,
            updater,
            rollout_rng,
            expanded: false,
        };
        let result = actions::perform_action(game, &mut source, entropy_rng)?;
        let expanded = source.expanded;
        Ok(SelectOutcome {
            result,
            node: source.cursor,
            switch_to_simulation: expanded || result.is_terminal(),
        })
    }

    /// Advances the game by one main action in the simulation phase. No tree
    /// state is read or written.
    pub fn perform_simulate(
        &self,
        game: &mut GameState,
        policy: &mut dyn SimulationPolicy,
        rollout_rng: &mut dyn RandomSource,
        entropy_rng: &mut dyn RandomSource,
    ) -> Result<GameResult> {
        let mut source = SimulationSource { policy, rollout_rng };
        actions::perform_action(game, &mut source, entropy_rng)
    }
}

/// Parameter source for the selection phase.
struct SelectionSource<'a> {
    policy: &'a SelectionPolicy,
    cursor: Arc<TreeNode>,
    updater: &'a mut TreeUpdater,
    rollout_rng: &'a mut dyn RandomSource,
    expanded: bool,
}

impl ActionParameterSource for SelectionSource<'_> {
    fn get_number(&mut self, action_type: ActionType, choices: &ActionChoices) -> Result<usize> {
        verify!(!choices.is_empty(), "Empty choices for {:?}", action_type);
        // Forced sub-choices never branch the tree
        if action_type != ActionType::Main && choices.size() == 1 {
            return Ok(0);
        }
        // Past the first expansion, finish the action as a rollout
        if self.expanded {
            return Ok(self.rollout_rng.gen(choices.size()));
        }

        self.cursor.dispatch_as(action_type)?;
        let selected = self.policy.select(&self.cursor, choices)?;
        self.updater.record(selected.edge.stats.clone());
        self.cursor = selected.edge.node.clone();
        if selected.expanded {
            self.expanded = true;
        }
        Ok(selected.position)
    }
}

/// Parameter source for the simulation phase.
struct SimulationSource<'a> {
    policy: &'a mut dyn SimulationPolicy,
    rollout_rng: &'a mut dyn RandomSource,
}

impl ActionParameterSource for SimulationSource<'_> {
    fn get_number(&mut self, action_type: ActionType, choices: &ActionChoices) -> Result<usize> {
        verify!(!choices.is_empty(), "Empty choices for {:?}", action_type);
        if action_type != ActionType::Main && choices.size() == 1 {
            return Ok(0);
        }
        Ok(self.policy.choose(action_type, choices, self.rollout_rng))
    }
}
