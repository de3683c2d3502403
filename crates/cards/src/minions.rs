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

//! Card definitions for the Minion card type

use anyhow::Result;
use data::card_definition::{CardDefinition, EffectContext};
use data::card_name::CardName;
use data::events::{while_on_board, EventKind, EventSubscription, Scope};
use data::game::GameState;
use data::primitives::{Side, TargetId};
use data::sources::RandomSource;
use rules::mutations;

use crate::helpers::{any_character, charge, minion_card, stats, taunt};

pub fn definitions() -> Vec<CardDefinition> {
    vec![
        rune_sprite(),
        ember_whelp(),
        stone_guardian(),
        swift_raider(),
        flame_adept(),
        cinder_shaman(),
        grave_warden(),
        dusk_healer(),
        archive_keeper(),
        bone_colossus(),
        bone_servant(),
    ]
}

fn rune_sprite() -> CardDefinition {
    minion_card(CardName::RuneSprite, 1, stats(1, 1))
}

fn ember_whelp() -> CardDefinition {
    minion_card(CardName::EmberWhelp, 2, stats(3, 2))
}

/// Taunt
fn stone_guardian() -> CardDefinition {
    minion_card(CardName::StoneGuardian, 2, taunt(1, 4))
}

/// Charge
fn swift_raider() -> CardDefinition {
    minion_card(CardName::SwiftRaider, 3, charge(3, 2))
}

/// Battlecry: Deal 2 damage to any character.
fn flame_adept() -> CardDefinition {
    CardDefinition {
        target_predicate: Some(any_character),
        on_play: Some(flame_adept_battlecry),
        ..minion_card(CardName::FlameAdept, 3, stats(2, 3))
    }
}

fn flame_adept_battlecry(
    game: &mut GameState,
    context: EffectContext,
    _rng: &mut dyn RandomSource,
) -> Result<()> {
    if let Some(target) = context.target {
        mutations::deal_damage(game, target, 2)?;
    }
    Ok(())
}

/// At the start of your turn, deal 1 damage to the enemy hero.
fn cinder_shaman() -> CardDefinition {
    CardDefinition {
        subscriptions: vec![EventSubscription::new(
            EventKind::TurnStart,
            while_on_board,
            cinder_shaman_burn,
        )],
        ..minion_card(CardName::CinderShaman, 3, stats(2, 3))
    }
}

fn cinder_shaman_burn(game: &mut GameState, scope: Scope) -> Result<()> {
    if game.current_side() == Some(scope.side) {
        mutations::deal_damage(game, TargetId::Hero(scope.side.opponent()), 1)?;
    }
    Ok(())
}

/// After a minion dies, this minion gains +1 Attack.
fn grave_warden() -> CardDefinition {
    CardDefinition {
        subscriptions: vec![EventSubscription::new(
            EventKind::MinionDied,
            while_on_board,
            grave_warden_feast,
        )],
        ..minion_card(CardName::GraveWarden, 3, stats(2, 3))
    }
}

fn grave_warden_feast(game: &mut GameState, scope: Scope) -> Result<()> {
    if let Some(minion) = game
        .player_mut(scope.side)
        .minions
        .iter_mut()
        .find(|m| m.summon_order == scope.summon_order)
    {
        minion.attack += 1;
    }
    Ok(())
}

/// Battlecry: Restore 3 health to your hero.
fn dusk_healer() -> CardDefinition {
    CardDefinition {
        on_play: Some(dusk_healer_battlecry),
        ..minion_card(CardName::DuskHealer, 4, stats(3, 3))
    }
}

fn dusk_healer_battlecry(
    game: &mut GameState,
    context: EffectContext,
    _rng: &mut dyn RandomSource,
) -> Result<()> {
    mutations::heal(game, TargetId::Hero(context.side), 3)
}

/// Deathrattle: Draw a card.
fn archive_keeper() -> CardDefinition {
    CardDefinition {
        deathrattle: Some(archive_keeper_deathrattle),
        ..minion_card(CardName::ArchiveKeeper, 4, stats(2, 4))
    }
}

fn archive_keeper_deathrattle(game: &mut GameState, side: Side) -> Result<()> {
    mutations::draw_cards(game, side, 1)?;
    Ok(())
}

/// Deathrattle: Summon a Bone Servant.
fn bone_colossus() -> CardDefinition {
    CardDefinition {
        deathrattle: Some(bone_colossus_deathrattle),
        ..minion_card(CardName::BoneColossus, 5, stats(4, 5))
    }
}

fn bone_colossus_deathrattle(game: &mut GameState, side: Side) -> Result<()> {
    let position = game.player(side).minions.len();
    mutations::summon_minion(game, side, CardName::BoneServant, position)
}

/// Token summoned by Bone Colossus
fn bone_servant() -> CardDefinition {
    minion_card(CardName::BoneServant, 2, stats(2, 2))
}
