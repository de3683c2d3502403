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

//! Card definitions for the Spell card type

use anyhow::Result;
use data::card_definition::{CardDefinition, ChooseOneOption, EffectContext};
use data::card_name::CardName;
use data::game::GameState;
use data::primitives::TargetId;
use data::sources::RandomSource;
use rules::mutations;
use with_error::fail;

use crate::helpers::{any_character, friendly_minion, spell_card};

pub fn definitions() -> Vec<CardDefinition> {
    vec![fire_bolt(), wild_flame(), scrying_orb(), battle_trance(), cinderstorm(), feral_rite()]
}

/// Deal 3 damage to any character.
fn fire_bolt() -> CardDefinition {
    CardDefinition {
        target_predicate: Some(any_character),
        on_play: Some(fire_bolt_effect),
        ..spell_card(CardName::FireBolt, 1)
    }
}

fn fire_bolt_effect(
    game: &mut GameState,
    context: EffectContext,
    _rng: &mut dyn RandomSource,
) -> Result<()> {
    match context.target {
        Some(target) => mutations::deal_damage(game, target, 3),
        None => fail!("Fire Bolt requires a target"),
    }
}

/// Deal 3 damage to a random enemy minion, or the enemy hero if there are
/// none.
fn wild_flame() -> CardDefinition {
    CardDefinition { on_play: Some(wild_flame_effect), ..spell_card(CardName::WildFlame, 2) }
}

fn wild_flame_effect(
    game: &mut GameState,
    context: EffectContext,
    rng: &mut dyn RandomSource,
) -> Result<()> {
    let enemy = context.side.opponent();
    let minion_count = game.player(enemy).minions.len();
    let target = if minion_count == 0 {
        TargetId::Hero(enemy)
    } else {
        TargetId::Minion(enemy, rng.gen(minion_count))
    };
    mutations::deal_damage(game, target, 3)
}

/// Draw 2 cards.
fn scrying_orb() -> CardDefinition {
    CardDefinition { on_play: Some(scrying_orb_effect), ..spell_card(CardName::ScryingOrb, 2) }
}

fn scrying_orb_effect(
    game: &mut GameState,
    context: EffectContext,
    _rng: &mut dyn RandomSource,
) -> Result<()> {
    mutations::draw_cards(game, context.side, 2)?;
    Ok(())
}

/// Give a friendly minion +2/+2.
fn battle_trance() -> CardDefinition {
    CardDefinition {
        target_predicate: Some(friendly_minion),
        on_play: Some(battle_trance_effect),
        ..spell_card(CardName::BattleTrance, 3)
    }
}

fn battle_trance_effect(
    game: &mut GameState,
    context: EffectContext,
    _rng: &mut dyn RandomSource,
) -> Result<()> {
    match context.target {
        Some(TargetId::Minion(side, position)) => {
            match game.player_mut(side).minions.get_mut(position) {
                Some(minion) => {
                    minion.attack += 2;
                    minion.health += 2;
                    minion.max_health += 2;
                    Ok(())
                }
                None => fail!("No minion at position {}", position),
            }
        }
        _ => fail!("Battle Trance requires a friendly minion target"),
    }
}

/// Deal 2 damage to all enemy minions.
fn cinderstorm() -> CardDefinition {
    CardDefinition { on_play: Some(cinderstorm_effect), ..spell_card(CardName::Cinderstorm, 4) }
}

fn cinderstorm_effect(
    game: &mut GameState,
    context: EffectContext,
    _rng: &mut dyn RandomSource,
) -> Result<()> {
    let enemy = context.side.opponent();
    for position in 0..game.player(enemy).minions.len() {
        mutations::deal_damage(game, TargetId::Minion(enemy, position), 2)?;
    }
    Ok(())
}

/// Choose One: Deal 2 damage to the enemy hero; or gain 4 Armor.
fn feral_rite() -> CardDefinition {
    CardDefinition {
        choose_one: vec![
            ChooseOneOption { text: "Deal 2 damage to the enemy hero" },
            ChooseOneOption { text: "Gain 4 Armor" },
        ],
        on_play: Some(feral_rite_effect),
        ..spell_card(CardName::FeralRite, 2)
    }
}

fn feral_rite_effect(
    game: &mut GameState,
    context: EffectContext,
    _rng: &mut dyn RandomSource,
) -> Result<()> {
    match context.option {
        Some(0) => {
            mutations::deal_damage(game, TargetId::Hero(context.side.opponent()), 2)
        }
        Some(1) => {
            mutations::gain_armor(game, context.side, 4);
            Ok(())
        }
        _ => fail!("Unknown Feral Rite option {:?}", context.option),
    }
}
