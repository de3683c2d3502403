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

//! An agent which picks every parameter uniformly at random.

use anyhow::Result;
use data::game::GameState;
use data::game_actions::{ActionChoices, ActionType};
use data::primitives::Side;
use data::sources::{ActionParameterSource, RandomSource, RngSource};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use with_error::verify;

use crate::Agent;

pub struct RandomAgent {
    rng: RngSource<Xoshiro256StarStar>,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self {
        Self { rng: RngSource(Xoshiro256StarStar::seed_from_u64(seed)) }
    }
}

impl ActionParameterSource for RandomAgent {
    fn get_number(&mut self, action_type: ActionType, choices: &ActionChoices) -> Result<usize> {
        verify!(!choices.is_empty(), "Empty choices for {:?}", action_type);
        Ok(self.rng.gen(choices.size()))
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &'static str {
        "RANDOM"
    }

    fn begin_action(&mut self, _game: &GameState, _side: Side) -> Result<()> {
        Ok(())
    }

    fn as_param_source(&mut self) -> &mut dyn ActionParameterSource {
        self
    }
}
