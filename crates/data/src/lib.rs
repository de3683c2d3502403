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

//! Data types used to represent game state

pub mod card_definition;
pub mod card_name;
pub mod card_state;
pub mod events;
pub mod game;
pub mod game_actions;
pub mod primitives;
pub mod sources;
pub mod view;
