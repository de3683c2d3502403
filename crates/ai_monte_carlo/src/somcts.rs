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

//! Single-observer MCTS: one player's cursor through its own tree across a
//! whole episode.
//!
//! The opponent's choices are not observable as tree children; from this
//! observer's perspective only the resulting visible board matters. At every
//! turn boundary the cursor therefore jumps through the node's board→node
//! map to whichever child matches the current view fingerprint, creating it
//! on first sight. This keeps the tree compact and correct under the
//! observer's information set.

use std::sync::Arc;

use anyhow::Result;
use data::game::GameState;
use data::game_actions::{ActionType, GameResult};
use data::primitives::Side;
use data::sources::RandomSource;
use data::view::ObserverView;
use with_error::{verify, WithError};

use crate::builder::TreeBuilder;
use crate::credit::CreditPolicy;
use crate::simulation::SimulationPolicy;
use crate::tree::TreeNode;
use crate::updater::TreeUpdater;

/// Phase of the in-flight episode for this observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Selection,
    Simulation,
}

/// One observer's search state. The tree root is shared across episodes and,
/// under the parallel runner, across worker threads.
pub struct SoMcts {
    side: Side,
    root: Arc<TreeNode>,
    builder: TreeBuilder,
    node: Option<Arc<TreeNode>>,
    stage: Stage,
    updater: TreeUpdater,
    /// Entropy consumed by the rules engine (card effects)
    entropy_rng: Box<dyn RandomSource + Send>,
    /// Drives rollout decisions and post-expansion fill-in choices
    rollout_rng: Box<dyn RandomSource + Send>,
    simulation_policy: Box<dyn SimulationPolicy>,
    credit_policy: Box<dyn CreditPolicy>,
}

impl SoMcts {
    pub fn new(
        side: Side,
        root: Arc<TreeNode>,
        entropy_rng: Box<dyn RandomSource + Send>,
        rollout_rng: Box<dyn RandomSource + Send>,
        simulation_policy: Box<dyn SimulationPolicy>,
        credit_policy: Box<dyn CreditPolicy>,
    ) -> Self {
        Self {
            side,
            root,
            builder: TreeBuilder::new(),
            node: None,
            stage: Stage::Selection,
            updater: TreeUpdater::new(),
            entropy_rng,
            rollout_rng,
            simulation_policy,
            credit_policy,
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn root(&self) -> &Arc<TreeNode> {
        &self.root
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Resets the cursor for a fresh episode.
    pub fn start_episode(&mut self) {
        self.node = Some(self.root.clone());
        self.stage = Stage::Selection;
        self.updater.clear();
    }

    /// Drives the simulator while it remains this observer's turn, ending
    /// with the turn-passing action or a terminal result.
    pub fn perform_own_turn_actions(&mut self, game: &mut GameState) -> Result<GameResult> {
        verify!(
            game.current_side() == Some(self.side),
            "Not {:?}'s turn",
            self.side
        );

        while game.current_side() == Some(self.side) {
            match self.stage {
                Stage::Simulation => {
                    let result = self.builder.perform_simulate(
                        game,
                        &mut *self.simulation_policy,
                        &mut *self.rollout_rng,
                        &mut *self.entropy_rng,
                    )?;
                    if result.is_terminal() {
                        return Ok(result);
                    }
                }
                Stage::Selection => {
                    let node = self.node.clone().with_error(|| "Selection stage without cursor")?;
                    // The cursor must sit at a turn boundary
                    verify!(
                        node.action_type().map_or(true, |t| t == ActionType::Main),
                        "Cursor dispatches {:?}, expected a turn-boundary node",
                        node.action_type()
                    );
                    let fingerprint = ObserverView::new(game, self.side).fingerprint();
                    let anchored = node.board_node_map().get_or_create(fingerprint);

                    let outcome = self.builder.perform_select(
                        game,
                        anchored,
                        &mut self.updater,
                        &mut *self.rollout_rng,
                        &mut *self.entropy_rng,
                    )?;
                    if outcome.result.is_terminal() {
                        return Ok(outcome.result);
                    }
                    if outcome.switch_to_simulation {
                        self.stage = Stage::Simulation;
                        self.node = None;
                    } else {
                        self.node = Some(outcome.node);
                    }
                }
            }
        }
        Ok(GameResult::NotDetermined)
    }

    /// The other player finished a block of actions: jump the cursor to the
    /// node representing the board this observer now sees. A no-op in the
    /// simulation stage.
    pub fn apply_others_actions(&mut self, game: &GameState) -> Result<()> {
        if self.stage == Stage::Simulation {
            return Ok(());
        }
        let node = self.node.clone().with_error(|| "Selection stage without cursor")?;
        let fingerprint = ObserverView::new(game, self.side).fingerprint();
        self.node = Some(node.board_node_map().get_or_create(fingerprint));
        Ok(())
    }

    /// Backpropagates this observer's credit for the finished episode to
    /// every edge traversed during its selection phase.
    pub fn episode_finished(&mut self, game: &GameState, result: GameResult) -> Result<()> {
        let credit = self.credit_policy.credit(self.side, game, result);
        verify!((0.0..=1.0).contains(&credit), "Credit {} out of range", credit);
        self.updater.update(credit)
    }
}
