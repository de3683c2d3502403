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

//! Fundamental types and data structures for Emberfall

use std::fmt;
use std::fmt::Formatter;

use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};

pub type TurnNumber = u32;
pub type ManaValue = u32;
pub type HealthValue = u32;
pub type AttackValue = u32;
pub type ArmorValue = u32;
pub type DurabilityValue = u32;
pub type FatigueValue = u32;

/// Monotonically increasing sequence number assigned to game mutations.
/// Minions record the value current at the time they entered play, which
/// fixes the order in which their triggered effects resolve.
pub type PlayOrder = u64;

/// The two players in a game. The first player takes the opening turn.
#[derive(PartialEq, Eq, Hash, Copy, Clone, Serialize, Deserialize, Ord, PartialOrd, Sequence)]
pub enum Side {
    First,
    Second,
}

impl Side {
    /// Gets the opponent of the provided player
    pub fn opponent(&self) -> Self {
        match self {
            Side::First => Self::Second,
            Side::Second => Self::First,
        }
    }
}

impl fmt::Debug for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Side::First => "First",
                Side::Second => "Second",
            }
        )
    }
}

/// Identifies a character which can receive damage or healing: a hero, or a
/// minion at a given board position.
#[derive(PartialEq, Eq, Hash, Copy, Clone, Serialize, Deserialize)]
pub enum TargetId {
    Hero(Side),
    /// A minion identified by its owner and current board position
    Minion(Side, usize),
}

impl fmt::Debug for TargetId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TargetId::Hero(side) => write!(f, "{:?}Hero", side),
            TargetId::Minion(side, position) => write!(f, "{:?}M{}", side, position),
        }
    }
}

/// Identifies a friendly character which can be sent into an attack.
#[derive(PartialEq, Eq, Hash, Copy, Clone, Serialize, Deserialize)]
pub enum AttackerId {
    /// The hero, attacking with an equipped weapon
    Hero,
    /// A minion at the given board position
    Minion(usize),
}

impl fmt::Debug for AttackerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AttackerId::Hero => write!(f, "Hero"),
            AttackerId::Minion(position) => write!(f, "M{}", position),
        }
    }
}
