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

//! Canonical names for all cards in the catalog

use std::fmt;
use std::fmt::Formatter;

use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};

/// Identifies a card within the catalog. Every card playable in a game, and
/// every token a card effect can create, has exactly one [CardName].
#[derive(
    PartialEq, Eq, Hash, Copy, Clone, Serialize, Deserialize, Ord, PartialOrd, Sequence, Debug,
)]
pub enum CardName {
    // Minions
    RuneSprite,
    EmberWhelp,
    StoneGuardian,
    SwiftRaider,
    FlameAdept,
    CinderShaman,
    GraveWarden,
    DuskHealer,
    ArchiveKeeper,
    BoneColossus,
    /// Token summoned by [CardName::BoneColossus], not present in decklists
    BoneServant,

    // Spells
    FireBolt,
    WildFlame,
    ScryingOrb,
    BattleTrance,
    Cinderstorm,
    FeralRite,

    // Weapons
    EmberAxe,
}

impl CardName {
    /// Returns the user-visible name for this card
    pub fn displayed_name(&self) -> String {
        let name = format!("{:?}", self);
        let mut result = String::new();
        for (i, c) in name.chars().enumerate() {
            if c.is_uppercase() && i > 0 {
                result.push(' ');
            }
            result.push(c);
        }
        result
    }
}

impl fmt::Display for CardName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.displayed_name())
    }
}
