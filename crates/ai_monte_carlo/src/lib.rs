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

//! Multi-observer Monte Carlo Tree Search.
//!
//! The game is imperfect-information: neither player may see the opponent's
//! hand or either deck. Each player therefore searches its *own* tree over
//! its own information set ([somcts]), and a coordinator ([momcts]) runs
//! both trees through shared episodes, reconciling them across turn
//! boundaries by the visible-board fingerprint. A [runner] drives many
//! episodes concurrently over shared trees; all shared statistics are
//! atomic ([tree]).

pub mod builder;
pub mod credit;
pub mod momcts;
pub mod runner;
pub mod selection;
pub mod simulation;
pub mod somcts;
pub mod statistic;
pub mod tree;
pub mod updater;
