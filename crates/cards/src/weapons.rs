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

//! Card definitions for the Weapon card type

use data::card_definition::CardDefinition;
use data::card_name::CardName;

use crate::helpers::weapon_card;

pub fn definitions() -> Vec<CardDefinition> {
    vec![ember_axe()]
}

fn ember_axe() -> CardDefinition {
    weapon_card(CardName::EmberAxe, 3, 3, 2)
}
