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

//! The observer view: a read-only projection of a [GameState] restricted to
//! what one player can legally see.
//!
//! Redaction is structural. The view exposes [ObserverView::own_hand] but
//! only [ObserverView::opponent_hand_size]; no accessor returns opponent hand
//! contents or either deck's contents. Search code operates exclusively on
//! views and fingerprints, so hidden information cannot leak into the tree.

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::fmt::Formatter;
use std::hash::{Hash, Hasher};

use crate::card_name::CardName;
use crate::card_state::{HeroState, ManaCrystals, MinionState, WeaponState};
use crate::game::{GamePhase, GameState};
use crate::primitives::{Side, TurnNumber};

/// Structural digest over the observable fields of a view.
///
/// Equal fingerprints identify states an observer cannot tell apart, and the
/// search treats their tree nodes as shared. Two independent 64-bit hashes
/// are combined so that collisions are negligible; a collision would silently
/// merge unrelated positions and corrupt credit assignment.
#[derive(PartialEq, Eq, Hash, Copy, Clone, Ord, PartialOrd)]
pub struct BoardFingerprint(pub u128);

impl fmt::Debug for BoardFingerprint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}

/// Read-only projection of a [GameState] for one viewer.
pub struct ObserverView<'a> {
    game: &'a GameState,
    viewer: Side,
}

impl<'a> ObserverView<'a> {
    pub fn new(game: &'a GameState, viewer: Side) -> Self {
        Self { game, viewer }
    }

    pub fn viewer(&self) -> Side {
        self.viewer
    }

    /// The player whose turn it is, or `None` if the game has ended
    pub fn current_side(&self) -> Option<Side> {
        self.game.current_side()
    }

    pub fn turn_number(&self) -> Option<TurnNumber> {
        self.game.current_turn().map(|turn| turn.turn_number)
    }

    /// Cards in the viewer's own hand
    pub fn own_hand(&self) -> &[CardName] {
        &self.game.player(self.viewer).hand
    }

    /// Number of cards in the opponent's hand. The contents are not visible.
    pub fn opponent_hand_size(&self) -> usize {
        self.game.player(self.viewer.opponent()).hand.len()
    }

    /// Number of cards in the given player's deck. Contents are not visible
    /// to either player.
    pub fn deck_size(&self, side: Side) -> usize {
        self.game.player(side).deck.len()
    }

    pub fn minions(&self, side: Side) -> &[MinionState] {
        &self.game.player(side).minions
    }

    pub fn hero(&self, side: Side) -> &HeroState {
        &self.game.player(side).hero
    }

    pub fn weapon(&self, side: Side) -> Option<&WeaponState> {
        self.game.player(side).weapon.as_ref()
    }

    pub fn crystals(&self, side: Side) -> ManaCrystals {
        self.game.player(side).crystals
    }

    pub fn hero_power_used(&self, side: Side) -> bool {
        self.game.player(side).hero_power_used
    }

    pub fn graveyard_size(&self, side: Side) -> u32 {
        self.game.player(side).graveyard_size
    }

    pub fn fatigue(&self, side: Side) -> u32 {
        self.game.player(side).fatigue
    }

    /// Computes the [BoardFingerprint] of this view.
    pub fn fingerprint(&self) -> BoardFingerprint {
        let mut high = DefaultHasher::new();
        high.write_u64(0x45_4d_42_52_0000_0001);
        self.encode(&mut high);
        let mut low = DefaultHasher::new();
        low.write_u64(0x45_4d_42_52_0000_0002);
        self.encode(&mut low);
        BoardFingerprint((u128::from(high.finish()) << 64) | u128::from(low.finish()))
    }

    /// Writes every observable field into the hasher in a canonical order.
    /// Hidden information (opponent hand contents, deck contents) must never
    /// be written here.
    fn encode<H: Hasher>(&self, state: &mut H) {
        match self.game.data.phase {
            GamePhase::Play(turn) => {
                state.write_u8(0);
                turn.side.hash(state);
                state.write_u32(turn.turn_number);
            }
            GamePhase::GameOver(data) => {
                state.write_u8(1);
                data.winner.hash(state);
            }
        }

        self.viewer.hash(state);
        for side in [self.viewer, self.viewer.opponent()] {
            let player = self.game.player(side);

            state.write_u32(player.hero.health);
            state.write_u32(player.hero.max_health);
            state.write_u32(player.hero.armor);
            state.write_u32(player.hero.attacks_this_turn);

            match &player.weapon {
                Some(weapon) => {
                    state.write_u8(1);
                    weapon.name.hash(state);
                    state.write_u32(weapon.attack);
                    state.write_u32(weapon.durability);
                }
                None => state.write_u8(0),
            }

            state.write_u32(player.crystals.current);
            state.write_u32(player.crystals.total);
            state.write_u8(u8::from(player.hero_power_used));

            state.write_usize(player.minions.len());
            for minion in &player.minions {
                minion.name.hash(state);
                state.write_u32(minion.attack);
                state.write_u32(minion.health);
                state.write_u32(minion.max_health);
                state.write_u8(u8::from(minion.taunt));
                state.write_u8(u8::from(minion.exhausted));
                state.write_u32(minion.attacks_this_turn);
            }

            if side == self.viewer {
                state.write_usize(player.hand.len());
                for card in &player.hand {
                    card.hash(state);
                }
            } else {
                state.write_usize(player.hand.len());
            }

            state.write_usize(player.deck.len());
            state.write_u32(player.graveyard_size);
            state.write_u32(player.fatigue);
        }
    }
}
