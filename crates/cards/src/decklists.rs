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

//! Standard decklists

use data::card_name::CardName;

/// The canonical 24-card list used when no custom deck is supplied
pub fn standard_deck() -> Vec<CardName> {
    vec![
        CardName::RuneSprite,
        CardName::RuneSprite,
        CardName::EmberWhelp,
        CardName::EmberWhelp,
        CardName::StoneGuardian,
        CardName::StoneGuardian,
        CardName::SwiftRaider,
        CardName::SwiftRaider,
        CardName::FlameAdept,
        CardName::FlameAdept,
        CardName::CinderShaman,
        CardName::GraveWarden,
        CardName::DuskHealer,
        CardName::ArchiveKeeper,
        CardName::ArchiveKeeper,
        CardName::BoneColossus,
        CardName::FireBolt,
        CardName::FireBolt,
        CardName::WildFlame,
        CardName::ScryingOrb,
        CardName::BattleTrance,
        CardName::Cinderstorm,
        CardName::FeralRite,
        CardName::EmberAxe,
    ]
}
