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

//! Helpers for defining card behaviors

use data::card_definition::{CardDefinition, CardType, MinionStats, WeaponStats};
use data::card_name::CardName;
use data::game::GameState;
use data::primitives::{AttackValue, DurabilityValue, HealthValue, ManaValue, Side, TargetId};

/// A minion card with no abilities; extend with struct-update syntax
pub fn minion_card(name: CardName, cost: ManaValue, stats: MinionStats) -> CardDefinition {
    CardDefinition {
        name,
        cost,
        card_type: CardType::Minion,
        minion: Some(stats),
        weapon: None,
        choose_one: vec![],
        target_predicate: None,
        on_play: None,
        deathrattle: None,
        subscriptions: vec![],
    }
}

/// A spell card with no effect; extend with struct-update syntax
pub fn spell_card(name: CardName, cost: ManaValue) -> CardDefinition {
    CardDefinition {
        name,
        cost,
        card_type: CardType::Spell,
        minion: None,
        weapon: None,
        choose_one: vec![],
        target_predicate: None,
        on_play: None,
        deathrattle: None,
        subscriptions: vec![],
    }
}

/// A weapon card
pub fn weapon_card(
    name: CardName,
    cost: ManaValue,
    attack: AttackValue,
    durability: DurabilityValue,
) -> CardDefinition {
    CardDefinition {
        name,
        cost,
        card_type: CardType::Weapon,
        minion: None,
        weapon: Some(WeaponStats { attack, durability }),
        choose_one: vec![],
        target_predicate: None,
        on_play: None,
        deathrattle: None,
        subscriptions: vec![],
    }
}

pub fn stats(attack: AttackValue, health: HealthValue) -> MinionStats {
    MinionStats { attack, health, taunt: false, charge: false }
}

pub fn taunt(attack: AttackValue, health: HealthValue) -> MinionStats {
    MinionStats { taunt: true, ..stats(attack, health) }
}

pub fn charge(attack: AttackValue, health: HealthValue) -> MinionStats {
    MinionStats { charge: true, ..stats(attack, health) }
}

/// Targeting predicate matching every character
pub fn any_character(_game: &GameState, _side: Side, _target: TargetId) -> bool {
    true
}

/// Targeting predicate matching the caster's own minions
pub fn friendly_minion(_game: &GameState, side: Side, target: TargetId) -> bool {
    matches!(target, TargetId::Minion(owner, _) if owner == side)
}

/// Targeting predicate matching the opponent's minions
pub fn enemy_minion(_game: &GameState, side: Side, target: TargetId) -> bool {
    matches!(target, TargetId::Minion(owner, _) if owner != side)
}
