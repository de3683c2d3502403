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

//! Game constants

use data::primitives::{HealthValue, ManaValue, TurnNumber};

pub const STARTING_HERO_HEALTH: HealthValue = 30;
pub const MAX_HAND_SIZE: usize = 10;
pub const MAX_BOARD_MINIONS: usize = 7;
pub const MAX_MANA_CRYSTALS: ManaValue = 10;
pub const HERO_POWER_COST: ManaValue = 2;
pub const HERO_POWER_DAMAGE: u32 = 2;
pub const FIRST_PLAYER_OPENING_HAND: usize = 3;
pub const SECOND_PLAYER_OPENING_HAND: usize = 4;

/// Games which reach this player-turn count end in a draw
pub const TURN_LIMIT: TurnNumber = 90;
