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

//! Queries over game state. Enumerations here are deterministic: the same
//! state always yields the same values in the same order, which is what lets
//! a choice position identify the same value across search iterations.

use data::card_definition::TargetPredicate;
use data::game::GameState;
use data::primitives::{AttackValue, Side, TargetId};

/// Enumerates all characters, in canonical order: the acting player's hero
/// and minions, then the opponent's hero and minions.
fn all_characters(game: &GameState, side: Side) -> impl Iterator<Item = TargetId> + '_ {
    let own = game.player(side);
    let enemy = game.player(side.opponent());
    std::iter::once(TargetId::Hero(side))
        .chain((0..own.minions.len()).map(move |i| TargetId::Minion(side, i)))
        .chain(std::iter::once(TargetId::Hero(side.opponent())))
        .chain((0..enemy.minions.len()).map(move |i| TargetId::Minion(side.opponent(), i)))
}

/// Characters the `side` player may select for a card with the given
/// targeting predicate.
pub fn valid_targets(game: &GameState, side: Side, predicate: TargetPredicate) -> Vec<TargetId> {
    all_characters(game, side).filter(|target| predicate(game, side, *target)).collect()
}

/// Characters an attack declared by `side` may be directed at. Taunt minions
/// mask the enemy hero and their non-Taunt allies.
pub fn defender_targets(game: &GameState, side: Side) -> Vec<TargetId> {
    let enemy_side = side.opponent();
    let enemy = game.player(enemy_side);
    if enemy.minions.iter().any(|m| m.taunt) {
        enemy
            .minions
            .iter()
            .enumerate()
            .filter(|(_, m)| m.taunt)
            .map(|(i, _)| TargetId::Minion(enemy_side, i))
            .collect()
    } else {
        std::iter::once(TargetId::Hero(enemy_side))
            .chain((0..enemy.minions.len()).map(|i| TargetId::Minion(enemy_side, i)))
            .collect()
    }
}

/// The attack value the `side` player's hero strikes with
pub fn hero_attack(game: &GameState, side: Side) -> AttackValue {
    game.player(side).weapon.as_ref().map_or(0, |weapon| weapon.attack)
}

/// The attack value of an arbitrary character
pub fn attack_value(game: &GameState, target: TargetId) -> AttackValue {
    match target {
        TargetId::Hero(side) => hero_attack(game, side),
        TargetId::Minion(side, position) => {
            game.player(side).minions.get(position).map_or(0, |m| m.attack)
        }
    }
}
