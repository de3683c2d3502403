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

//! Episode construction: building the start-of-game state.

use anyhow::Result;
use data::card_name::CardName;
use data::game::GameState;
use data::primitives::Side;
use data::sources::RandomSource;

use crate::{constants, mutations};

/// Builds a ready-to-play start state: decks shuffled with the provided
/// random source, opening hands drawn (the second player receives an extra
/// card; the mulligan is resolved as keep-all), and the first player's
/// opening turn started.
pub fn new_episode(
    first_deck: &[CardName],
    second_deck: &[CardName],
    rng: &mut dyn RandomSource,
) -> Result<GameState> {
    let mut game = GameState::new_game();
    game.first.deck = first_deck.to_vec();
    game.second.deck = second_deck.to_vec();
    shuffle(&mut game.first.deck, rng);
    shuffle(&mut game.second.deck, rng);

    mutations::draw_cards(&mut game, Side::First, constants::FIRST_PLAYER_OPENING_HAND as u32)?;
    mutations::draw_cards(&mut game, Side::Second, constants::SECOND_PLAYER_OPENING_HAND as u32)?;

    mutations::start_turn(&mut game, Side::First)?;
    Ok(game)
}

/// Fisher-Yates shuffle driven by a [RandomSource]
fn shuffle(cards: &mut [CardName], rng: &mut dyn RandomSource) {
    for i in (1..cards.len()).rev() {
        cards.swap(i, rng.gen(i + 1));
    }
}
