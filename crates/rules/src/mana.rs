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

//! Mana crystal bookkeeping

use anyhow::Result;
use data::game::GameState;
use data::primitives::{ManaValue, Side};
use with_error::verify;

use crate::constants;

/// Adds one mana crystal, up to the crystal cap. Does not refill.
pub fn gain_crystal(game: &mut GameState, side: Side) {
    let crystals = &mut game.player_mut(side).crystals;
    if crystals.total < constants::MAX_MANA_CRYSTALS {
        crystals.total += 1;
    }
}

/// Spends available mana. Returns an error if insufficient mana is available.
pub fn spend(game: &mut GameState, side: Side, amount: ManaValue) -> Result<()> {
    let crystals = &mut game.player_mut(side).crystals;
    verify!(crystals.current >= amount, "Insufficient mana available");
    crystals.current -= amount;
    Ok(())
}
