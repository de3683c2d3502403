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

//! Tools for testing the rules engine and search: a game-state builder and
//! scripted parameter & random sources.

#![deny(warnings)]
#![deny(clippy::all)]
#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(unused_variables)]

use std::collections::VecDeque;

use anyhow::Result;
use data::card_name::CardName;
use data::game::{GamePhase, GameState, TurnData};
use data::game_actions::{ActionChoices, ActionType};
use data::primitives::{HealthValue, ManaValue, Side, TurnNumber};
use data::sources::{ActionParameterSource, RandomSource};
use with_error::{verify, WithError};

/// Builder for game states in arbitrary mid-game configurations.
///
/// Creates a game on the first player's turn with both heroes at full
/// health, empty zones, and no mana. Minions added via [Self::ready_minion]
/// can attack immediately.
pub struct TestGame {
    game: GameState,
}

impl Default for TestGame {
    fn default() -> Self {
        Self::new()
    }
}

impl TestGame {
    pub fn new() -> Self {
        cards::initialize();
        Self { game: GameState::new_game() }
    }

    pub fn turn(mut self, side: Side, turn_number: TurnNumber) -> Self {
        self.game.data.phase = GamePhase::Play(TurnData { side, turn_number });
        self
    }

    pub fn mana(mut self, side: Side, current: ManaValue, total: ManaValue) -> Self {
        self.game.player_mut(side).crystals.current = current;
        self.game.player_mut(side).crystals.total = total;
        self
    }

    pub fn hero_health(mut self, side: Side, health: HealthValue) -> Self {
        self.game.player_mut(side).hero.health = health;
        self
    }

    pub fn hand(mut self, side: Side, cards: Vec<CardName>) -> Self {
        self.game.player_mut(side).hand = cards;
        self
    }

    pub fn deck(mut self, side: Side, cards: Vec<CardName>) -> Self {
        self.game.player_mut(side).deck = cards;
        self
    }

    /// Puts a minion onto the board, ready to attack
    pub fn ready_minion(mut self, side: Side, name: CardName) -> Self {
        let position = self.game.player(side).minions.len();
        rules::mutations::summon_minion(&mut self.game, side, name, position)
            .expect("summon_minion");
        let minion =
            self.game.player_mut(side).minions.last_mut().expect("summoned minion");
        minion.exhausted = false;
        self
    }

    /// Puts a minion onto the board with summoning sickness
    pub fn exhausted_minion(mut self, side: Side, name: CardName) -> Self {
        let position = self.game.player(side).minions.len();
        rules::mutations::summon_minion(&mut self.game, side, name, position)
            .expect("summon_minion");
        self
    }

    /// Overrides the current health of the minion at `position`
    pub fn minion_health(mut self, side: Side, position: usize, health: HealthValue) -> Self {
        self.game.player_mut(side).minions[position].health = health;
        self
    }

    /// Overrides the current attack of the minion at `position`
    pub fn minion_attack(mut self, side: Side, position: usize, attack: u32) -> Self {
        self.game.player_mut(side).minions[position].attack = attack;
        self
    }

    pub fn weapon(mut self, side: Side, name: CardName) -> Self {
        rules::mutations::equip_weapon(&mut self.game, side, name).expect("equip_weapon");
        self
    }

    pub fn build(self) -> GameState {
        self.game
    }
}

/// A parameter source answering from a scripted queue of
/// `(action type, position)` pairs. Each request must match the next
/// scripted action type; running past the script is an error.
pub struct ScriptedParams {
    script: VecDeque<(ActionType, usize)>,
}

impl ScriptedParams {
    pub fn new(script: Vec<(ActionType, usize)>) -> Self {
        Self { script: script.into() }
    }

    pub fn is_exhausted(&self) -> bool {
        self.script.is_empty()
    }
}

impl ActionParameterSource for ScriptedParams {
    fn get_number(&mut self, action_type: ActionType, choices: &ActionChoices) -> Result<usize> {
        let (expected, position) = self
            .script
            .pop_front()
            .with_error(|| format!("Script exhausted at request for {:?}", action_type))?;
        verify!(
            expected == action_type,
            "Script expected {:?}, engine requested {:?}",
            expected,
            action_type
        );
        verify!(
            position < choices.size(),
            "Scripted position {} out of range for {:?}",
            position,
            choices
        );
        Ok(position)
    }
}

/// A random source returning a fixed value (clamped to range)
pub struct FixedRandom {
    pub value: usize,
}

impl RandomSource for FixedRandom {
    fn gen(&mut self, exclusive_max: usize) -> usize {
        assert!(exclusive_max > 0);
        self.value.min(exclusive_max - 1)
    }

    fn gen_range(&mut self, min: usize, max: usize) -> usize {
        min + self.value.min(max - min)
    }
}
