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

//! Core data structures for tracking the state of an ongoing game.

use serde::{Deserialize, Serialize};

use crate::card_name::CardName;
use crate::card_state::{HeroState, ManaCrystals, MinionState, WeaponState};
use crate::game_actions::GameResult;
use crate::primitives::{FatigueValue, PlayOrder, Side, TurnNumber};

/// Identifies the player whose turn it is
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TurnData {
    /// Current player whose turn it is
    pub side: Side,
    /// Sequence number of the current player-turn, starting at 1
    pub turn_number: TurnNumber,
}

/// Describes the final outcome of a game
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GameOverData {
    /// Player who won the game, or `None` for a draw
    pub winner: Option<Side>,
}

/// High level status of a game, including whose turn it is
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum GamePhase {
    Play(TurnData),
    GameOver(GameOverData),
}

/// State and configuration of the overall game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameData {
    /// Current [GamePhase]
    pub phase: GamePhase,
    /// Counter incremented on every game mutation, used to order minion
    /// summons and triggered effects
    pub play_order: PlayOrder,
}

/// State of a player within a game: their hero, zones, and resources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerState {
    pub side: Side,
    pub hero: HeroState,
    pub weapon: Option<WeaponState>,
    /// True once the hero power has been used this turn
    pub hero_power_used: bool,
    pub crystals: ManaCrystals,
    /// Cards in hand, in draw order
    pub hand: Vec<CardName>,
    /// Cards in the deck. The last element is the top card.
    pub deck: Vec<CardName>,
    /// Minions on the board, in placement order
    pub minions: Vec<MinionState>,
    /// Number of cards in this player's graveyard
    pub graveyard_size: u32,
    /// Damage dealt by the next empty-deck draw
    pub fatigue: FatigueValue,
}

impl PlayerState {
    /// Create a player state with an empty hand and deck.
    pub fn new(side: Side) -> Self {
        Self {
            side,
            hero: HeroState::new(30),
            weapon: None,
            hero_power_used: false,
            crystals: ManaCrystals::default(),
            hand: vec![],
            deck: vec![],
            minions: vec![],
            graveyard_size: 0,
            fatigue: 0,
        }
    }
}

/// Stores the primary state for an ongoing game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub data: GameData,
    pub first: PlayerState,
    pub second: PlayerState,
}

impl GameState {
    /// Creates a game on the first player's turn 1 with empty zones.
    pub fn new_game() -> Self {
        Self {
            data: GameData {
                phase: GamePhase::Play(TurnData { side: Side::First, turn_number: 1 }),
                play_order: 0,
            },
            first: PlayerState::new(Side::First),
            second: PlayerState::new(Side::Second),
        }
    }

    pub fn player(&self, side: Side) -> &PlayerState {
        match side {
            Side::First => &self.first,
            Side::Second => &self.second,
        }
    }

    pub fn player_mut(&mut self, side: Side) -> &mut PlayerState {
        match side {
            Side::First => &mut self.first,
            Side::Second => &mut self.second,
        }
    }

    /// The current turn, or `None` if the game has ended
    pub fn current_turn(&self) -> Option<TurnData> {
        match self.data.phase {
            GamePhase::Play(turn) => Some(turn),
            GamePhase::GameOver(_) => None,
        }
    }

    /// The player whose turn it is, or `None` if the game has ended
    pub fn current_side(&self) -> Option<Side> {
        self.current_turn().map(|turn| turn.side)
    }

    pub fn is_over(&self) -> bool {
        matches!(self.data.phase, GamePhase::GameOver(_))
    }

    /// Maps the game phase to a [GameResult]
    pub fn result(&self) -> GameResult {
        match self.data.phase {
            GamePhase::Play(_) => GameResult::NotDetermined,
            GamePhase::GameOver(GameOverData { winner: Some(Side::First) }) => {
                GameResult::FirstPlayerWin
            }
            GamePhase::GameOver(GameOverData { winner: Some(Side::Second) }) => {
                GameResult::SecondPlayerWin
            }
            GamePhase::GameOver(GameOverData { winner: None }) => GameResult::Draw,
        }
    }

    /// Returns the next play-order sequence number, advancing the counter
    pub fn next_play_order(&mut self) -> PlayOrder {
        self.data.play_order += 1;
        self.data.play_order
    }
}
