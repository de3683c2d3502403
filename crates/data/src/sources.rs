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

//! The two callback interfaces the rules engine consumes while resolving an
//! action: one supplying decisions, one supplying entropy.

use anyhow::Result;
use rand::Rng;

use crate::game_actions::{ActionChoices, ActionType};

/// Supplies the decision for each parameter request the rules engine makes.
///
/// Implementations must be deterministic given the same call sequence; the
/// engine never retries a request.
pub trait ActionParameterSource {
    /// Returns a position in `[0, choices.size())` selecting one of the
    /// presented values.
    fn get_number(&mut self, action_type: ActionType, choices: &ActionChoices) -> Result<usize>;
}

/// Supplies random numbers for effects whose outcome the rules, not the
/// players, determine.
pub trait RandomSource {
    /// Returns a value in `[0, exclusive_max)`
    fn gen(&mut self, exclusive_max: usize) -> usize;

    /// Returns a value in `[min, max]`
    fn gen_range(&mut self, min: usize, max: usize) -> usize;
}

/// Adapts any [rand::Rng] into a [RandomSource].
pub struct RngSource<R: Rng>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn gen(&mut self, exclusive_max: usize) -> usize {
        self.0.gen_range(0..exclusive_max)
    }

    fn gen_range(&mut self, min: usize, max: usize) -> usize {
        self.0.gen_range(min..=max)
    }
}
