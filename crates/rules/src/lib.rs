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

//! The deterministic rules engine: legal-action analysis, action resolution,
//! and the card-definition registry.
//!
//! The engine is a pure state stepper. It never makes a decision on its own:
//! choices come from an [data::sources::ActionParameterSource] and entropy
//! from a [data::sources::RandomSource], so the same call sequence always
//! produces the same game.

#![deny(warnings)]
#![deny(clippy::all)]
#![deny(clippy::cast_lossless)]
#![deny(clippy::cloned_instead_of_copied)]
#![deny(clippy::inconsistent_struct_constructor)]
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::let_underscore_must_use)]
#![deny(clippy::manual_ok_or)]
#![deny(clippy::map_flatten)]
#![deny(clippy::map_unwrap_or)]
#![deny(clippy::match_same_arms)]
#![deny(clippy::needless_continue)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::string_to_string)]
#![deny(clippy::unnecessary_self_imports)]
#![deny(clippy::unnested_or_patterns)]
#![deny(clippy::unused_self)]
#![deny(clippy::unwrap_in_result)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::used_underscore_binding)]
#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(unused_variables)]

use std::collections::HashMap;

use data::card_definition::CardDefinition;
use data::card_name::CardName;
use once_cell::sync::OnceCell;

pub mod actions;
pub mod analyzer;
pub mod constants;
pub mod dispatch;
pub mod episode;
pub mod flags;
pub mod mana;
pub mod mutations;
pub mod queries;

static DEFINITIONS: OnceCell<HashMap<CardName, CardDefinition>> = OnceCell::new();

/// Installs the card catalog. The first call wins; later calls are ignored,
/// which lets every test initialize independently.
pub fn initialize(build: impl FnOnce() -> Vec<CardDefinition>) {
    DEFINITIONS.get_or_init(|| build().into_iter().map(|d| (d.name, d)).collect());
}

/// Looks up the definition for a card. Panics if the catalog has not been
/// initialized or the card is unknown -- both are startup-order bugs, not
/// runtime conditions.
pub fn get(name: CardName) -> &'static CardDefinition {
    DEFINITIONS
        .get()
        .expect("card catalog not initialized")
        .get(&name)
        .unwrap_or_else(|| panic!("card not in catalog: {:?}", name))
}
