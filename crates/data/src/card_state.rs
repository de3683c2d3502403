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

//! State of the individual pieces in play: heroes, minions, weapons, and mana
//! crystals. Values here are the *current* in-game numbers; the printed
//! values live on [crate::card_definition::CardDefinition].

use serde::{Deserialize, Serialize};

use crate::card_name::CardName;
use crate::primitives::{
    ArmorValue, AttackValue, DurabilityValue, HealthValue, ManaValue, PlayOrder,
};

/// State of a hero in play
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroState {
    pub health: HealthValue,
    pub max_health: HealthValue,
    pub armor: ArmorValue,
    /// Number of attacks this hero has declared this turn
    pub attacks_this_turn: u32,
}

impl HeroState {
    pub fn new(health: HealthValue) -> Self {
        Self { health, max_health: health, armor: 0, attacks_this_turn: 0 }
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0
    }
}

/// State of an equipped weapon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponState {
    pub name: CardName,
    pub attack: AttackValue,
    pub durability: DurabilityValue,
}

/// State of a minion on the board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinionState {
    pub name: CardName,
    pub attack: AttackValue,
    pub health: HealthValue,
    pub max_health: HealthValue,
    pub taunt: bool,
    /// True while the minion suffers from summoning sickness. Cleared at the
    /// start of its controller's next turn; never set for Charge minions.
    pub exhausted: bool,
    /// Number of attacks this minion has declared this turn
    pub attacks_this_turn: u32,
    /// Play-order sequence number assigned when the minion entered play.
    /// Fixes the resolution order of simultaneous triggered effects.
    pub summon_order: PlayOrder,
}

impl MinionState {
    pub fn is_dead(&self) -> bool {
        self.health == 0
    }

    /// Whether this minion can currently declare an attack
    pub fn can_attack(&self) -> bool {
        !self.exhausted && self.attacks_this_turn == 0 && self.attack > 0
    }
}

/// A player's mana crystals: `current` available this turn, out of `total`
/// crystals owned.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ManaCrystals {
    pub current: ManaValue,
    pub total: ManaValue,
}

impl ManaCrystals {
    /// Refills available mana to the crystal total
    pub fn refill(&mut self) {
        self.current = self.total;
    }
}
