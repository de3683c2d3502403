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

//! Action types and choice enumerations exchanged between the rules engine
//! and a parameter source while resolving one main action.

use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};

/// A top-level move available to the active player.
#[derive(Eq, PartialEq, Hash, Debug, Copy, Clone, Serialize, Deserialize, Sequence)]
pub enum MainAction {
    PlayCard,
    Attack,
    HeroPower,
    EndTurn,
}

/// Identifies the kind of parameter the rules engine is requesting.
///
/// [ActionType::Main] selects a [MainAction]; the remaining variants are
/// sub-choices requested while resolving one main action. [ActionType::Random]
/// is never routed to a parameter source; it is listed for completeness of
/// the request taxonomy and used when labelling entropy consumption.
#[derive(Eq, PartialEq, Hash, Debug, Copy, Clone, Serialize, Deserialize)]
pub enum ActionType {
    Main,
    ChooseOne,
    HandIndex,
    MinionPutLocation,
    Attacker,
    Defender,
    SpecifiedTarget,
    Random,
}

/// A finite enumeration of the values legal for one parameter request.
///
/// A parameter source answers with a *position* in `[0, size)`; the engine
/// maps the position back to the underlying value with [Self::value_at].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionChoices {
    /// Values `0..n`
    Range(usize),
    /// An explicit list of values
    Indices(Vec<usize>),
}

impl ActionChoices {
    pub fn from_range(size: usize) -> Self {
        Self::Range(size)
    }

    pub fn from_indices(indices: Vec<usize>) -> Self {
        Self::Indices(indices)
    }

    pub fn size(&self) -> usize {
        match self {
            Self::Range(size) => *size,
            Self::Indices(indices) => indices.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns the value at the given position, or `None` if out of range
    pub fn value_at(&self, position: usize) -> Option<usize> {
        match self {
            Self::Range(size) => (position < *size).then(|| position),
            Self::Indices(indices) => indices.get(position).copied(),
        }
    }
}

/// Outcome of stepping the rules engine by one main action.
#[derive(Eq, PartialEq, Hash, Debug, Copy, Clone, Serialize, Deserialize)]
pub enum GameResult {
    /// The episode continues; more main actions will be requested.
    NotDetermined,
    FirstPlayerWin,
    SecondPlayerWin,
    Draw,
}

impl GameResult {
    pub fn is_terminal(&self) -> bool {
        *self != GameResult::NotDetermined
    }
}
