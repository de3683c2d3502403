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

//! Determinization: sampling full game states consistent with one
//! observer's information set.
//!
//! Each search iteration must start from a *complete* state, but the
//! observer only knows its own hand and the visible board. The sampler
//! keeps every observer-visible field identical to the real state — so all
//! iterations share one root fingerprint — and re-randomizes everything
//! hidden: the observer's own deck order, and the contents of the
//! opponent's hand and deck (redealt from their combined pool).

use std::sync::Arc;

use data::game::GameState;
use data::primitives::Side;
use data::sources::RandomSource;

use ai_monte_carlo::runner::StartStateFn;

/// Builds a start-state source which samples determinizations of `game`
/// from the `side` observer's perspective.
pub fn start_states(game: &GameState, side: Side) -> StartStateFn {
    let template = game.clone();
    Arc::new(move |rng: &mut dyn RandomSource| {
        let mut game = template.clone();
        shuffle(&mut game.player_mut(side).deck, rng);

        let opponent = game.player_mut(side.opponent());
        let hand_size = opponent.hand.len();
        let mut pool = std::mem::take(&mut opponent.hand);
        pool.append(&mut opponent.deck);
        shuffle(&mut pool, rng);
        opponent.deck = pool.split_off(hand_size);
        opponent.hand = pool;

        Ok(game)
    })
}

fn shuffle<T>(items: &mut [T], rng: &mut dyn RandomSource) {
    for i in (1..items.len()).rev() {
        items.swap(i, rng.gen(i + 1));
    }
}
