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

//! Concrete card definitions and decklists. Call [initialize] once at
//! startup to install the catalog into the rules engine's registry.

pub mod decklists;
pub mod helpers;
pub mod minions;
pub mod spells;
pub mod weapons;

/// Installs every card definition into the rules registry. Safe to call more
/// than once; only the first call has an effect.
pub fn initialize() {
    rules::initialize(|| {
        let mut definitions = minions::definitions();
        definitions.extend(spells::definitions());
        definitions.extend(weapons::definitions());
        definitions
    });
}
