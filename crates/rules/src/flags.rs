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

//! Predicates determining which moves are currently legal.

use data::card_definition::CardType;
use data::game::GameState;
use data::primitives::Side;

use crate::{constants, queries};

/// Returns whether the card at `hand_index` can currently be played by the
/// `side` player.
pub fn can_play_card(game: &GameState, side: Side, hand_index: usize) -> bool {
    let player = game.player(side);
    let name = match player.hand.get(hand_index) {
        Some(name) => *name,
        None => return false,
    };
    let definition = crate::get(name);

    if definition.cost > player.crystals.current {
        return false;
    }

    match definition.card_type {
        CardType::Minion => player.minions.len() < constants::MAX_BOARD_MINIONS,
        // Spells which require a target cannot be cast with none available
        CardType::Spell => match definition.target_predicate {
            Some(predicate) => !queries::valid_targets(game, side, predicate).is_empty(),
            None => true,
        },
        CardType::Weapon => true,
    }
}

/// Returns whether the `side` player's hero can currently declare an attack
pub fn hero_can_attack(game: &GameState, side: Side) -> bool {
    let player = game.player(side);
    player.hero.attacks_this_turn == 0
        && matches!(&player.weapon, Some(weapon) if weapon.attack > 0 && weapon.durability > 0)
}

/// Returns whether the `side` player can currently use their hero power
pub fn can_use_hero_power(game: &GameState, side: Side) -> bool {
    let player = game.player(side);
    !player.hero_power_used && player.crystals.current >= constants::HERO_POWER_COST
}
