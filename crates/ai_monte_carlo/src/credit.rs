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

//! Attribution of a finished episode's outcome to one observer.

use data::game::GameState;
use data::game_actions::GameResult;
use data::primitives::Side;

/// Maps a terminal state to a credit in `[0, 1]` for one observer.
///
/// The final state is provided so a policy may shape credit by, for
/// example, surviving health totals; the default ignores it.
pub trait CreditPolicy: Send {
    fn credit(&self, side: Side, game: &GameState, result: GameResult) -> f64;
}

/// The default policy: win = 1.0, loss = 0.0, draw = 0.5.
#[derive(Debug, Default, Clone, Copy)]
pub struct WinLossDrawCredit;

impl CreditPolicy for WinLossDrawCredit {
    fn credit(&self, side: Side, _game: &GameState, result: GameResult) -> f64 {
        match result {
            GameResult::FirstPlayerWin => {
                if side == Side::First {
                    1.0
                } else {
                    0.0
                }
            }
            GameResult::SecondPlayerWin => {
                if side == Side::Second {
                    1.0
                } else {
                    0.0
                }
            }
            GameResult::Draw | GameResult::NotDetermined => 0.5,
        }
    }
}
