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

//! Rollout policies for the simulation phase.

use data::game_actions::{ActionChoices, ActionType};
use data::sources::RandomSource;

/// Chooses actions during rollouts. No tree state is consulted or mutated.
pub trait SimulationPolicy: Send {
    /// Returns a position in `[0, choices.size())`
    fn choose(
        &mut self,
        action_type: ActionType,
        choices: &ActionChoices,
        rng: &mut dyn RandomSource,
    ) -> usize;
}

/// The default rollout policy: uniformly random over the presented choices.
#[derive(Debug, Default, Clone, Copy)]
pub struct UniformRandomPolicy;

impl SimulationPolicy for UniformRandomPolicy {
    fn choose(
        &mut self,
        _action_type: ActionType,
        choices: &ActionChoices,
        rng: &mut dyn RandomSource,
    ) -> usize {
        rng.gen(choices.size())
    }
}
