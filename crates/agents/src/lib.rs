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

//! Agents which play real games by answering the rules engine's parameter
//! requests.

pub mod determinize;
pub mod mcts_agent;
pub mod random_agent;

use anyhow::Result;
use data::game::GameState;
use data::primitives::Side;
use data::sources::ActionParameterSource;

/// An agent resolves main actions in a real game. Before each main action
/// the driver calls [Agent::begin_action]; the agent then answers every
/// parameter request for that action through its [ActionParameterSource]
/// implementation.
pub trait Agent: ActionParameterSource {
    fn name(&self) -> &'static str;

    /// Prepares to resolve one main action for `side` from the given state.
    fn begin_action(&mut self, game: &GameState, side: Side) -> Result<()>;

    /// The parameter-source face of this agent, handed to the rules engine
    fn as_param_source(&mut self) -> &mut dyn ActionParameterSource;
}
