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

//! Multi-observer MCTS: one independent tree per player, run through shared
//! episodes.

use std::sync::Arc;

use anyhow::Result;
use data::game::GameState;
use data::game_actions::GameResult;
use data::primitives::Side;
use with_error::{verify, WithError};

use crate::somcts::SoMcts;
use crate::tree::TreeNode;

/// Coordinates the two observers through one episode: each block of the
/// acting side's actions runs in that side's tree, after which the other
/// observer's cursor catches up through its board→node map.
pub struct MoMcts {
    first: SoMcts,
    second: SoMcts,
}

impl MoMcts {
    pub fn new(first: SoMcts, second: SoMcts) -> Result<Self> {
        verify!(first.side() == Side::First, "First observer must be Side::First");
        verify!(second.side() == Side::Second, "Second observer must be Side::Second");
        Ok(Self { first, second })
    }

    pub fn root(&self, side: Side) -> &Arc<TreeNode> {
        match side {
            Side::First => self.first.root(),
            Side::Second => self.second.root(),
        }
    }

    /// Runs one full episode from the given start state: alternating turn
    /// blocks until a terminal result, then backpropagation for both
    /// observers.
    pub fn iterate(&mut self, mut game: GameState) -> Result<GameResult> {
        self.first.start_episode();
        self.second.start_episode();

        let result = loop {
            let side = game.current_side().with_error(|| "Start state is already decided")?;
            let (acting, waiting) = match side {
                Side::First => (&mut self.first, &mut self.second),
                Side::Second => (&mut self.second, &mut self.first),
            };
            let result = acting.perform_own_turn_actions(&mut game)?;
            if result.is_terminal() {
                break result;
            }
            waiting.apply_others_actions(&game)?;
        };

        self.first.episode_finished(&game, result)?;
        self.second.episode_finished(&game, result)?;
        Ok(result)
    }
}
