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

//! Legal-action analysis for the active player.
//!
//! [ValidActionAnalyzer] computes, in one pass, everything the engine needs
//! to enumerate parameter choices: the available main actions, the playable
//! hand positions, and the ready attackers. Enumeration order is fixed so
//! that choice positions are stable for a given board.

use data::game::GameState;
use data::game_actions::MainAction;
use data::primitives::AttackerId;

use crate::flags;

/// Legal moves for the player whose turn it is.
#[derive(Debug, Clone, Default)]
pub struct ValidActionAnalyzer {
    main_actions: Vec<MainAction>,
    playable_cards: Vec<usize>,
    attackers: Vec<AttackerId>,
}

impl ValidActionAnalyzer {
    /// Analyzes the current player's options. For a finished game every
    /// enumeration is empty.
    pub fn analyze(game: &GameState) -> Self {
        let side = match game.current_side() {
            Some(side) => side,
            None => return Self::default(),
        };

        let playable_cards = (0..game.player(side).hand.len())
            .filter(|index| flags::can_play_card(game, side, *index))
            .collect::<Vec<_>>();

        let mut attackers = Vec::new();
        if flags::hero_can_attack(game, side) {
            attackers.push(AttackerId::Hero);
        }
        attackers.extend(
            game.player(side)
                .minions
                .iter()
                .enumerate()
                .filter(|(_, m)| m.can_attack())
                .map(|(position, _)| AttackerId::Minion(position)),
        );

        let mut main_actions = Vec::new();
        if !playable_cards.is_empty() {
            main_actions.push(MainAction::PlayCard);
        }
        if !attackers.is_empty() {
            main_actions.push(MainAction::Attack);
        }
        if flags::can_use_hero_power(game, side) {
            main_actions.push(MainAction::HeroPower);
        }
        main_actions.push(MainAction::EndTurn);

        Self { main_actions, playable_cards, attackers }
    }

    pub fn main_actions(&self) -> &[MainAction] {
        &self.main_actions
    }

    /// Hand positions which can legally be played
    pub fn playable_cards(&self) -> &[usize] {
        &self.playable_cards
    }

    /// Characters which can legally declare an attack
    pub fn attackers(&self) -> &[AttackerId] {
        &self.attackers
    }
}
