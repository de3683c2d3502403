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

//! Core game mutations.
//!
//! Damage and healing only adjust numbers; minions are removed from the
//! board exclusively by [resolve_deaths], so board positions stay stable
//! while a single effect resolves.

use std::cmp;

use anyhow::Result;
use data::card_definition::CardType;
use data::card_name::CardName;
use data::card_state::{MinionState, WeaponState};
use data::events::EventKind;
use data::game::{GameOverData, GamePhase, GameState, TurnData};
use data::primitives::{PlayOrder, Side, TargetId};
use enum_iterator::all;
use tracing::{info, instrument};
use with_error::{fail, verify};

use crate::{constants, dispatch};

/// Draws `count` cards for the `side` player.
///
/// Empty-deck draws deal incrementing fatigue damage instead. A draw into a
/// full hand burns the card. Returns the cards which reached the hand.
#[instrument(skip(game))]
pub fn draw_cards(game: &mut GameState, side: Side, count: u32) -> Result<Vec<CardName>> {
    info!(?side, ?count, "draw_cards");
    let mut drawn = Vec::new();
    for _ in 0..count {
        match game.player_mut(side).deck.pop() {
            Some(card) => {
                let player = game.player_mut(side);
                if player.hand.len() >= constants::MAX_HAND_SIZE {
                    player.graveyard_size += 1;
                } else {
                    player.hand.push(card);
                    drawn.push(card);
                }
            }
            None => {
                let player = game.player_mut(side);
                player.fatigue += 1;
                let damage = player.fatigue;
                deal_damage(game, TargetId::Hero(side), damage)?;
            }
        }
    }
    Ok(drawn)
}

/// Deals damage to a character. Hero armor absorbs damage before health.
/// Dead minions remain on the board until [resolve_deaths] runs.
pub fn deal_damage(game: &mut GameState, target: TargetId, amount: u32) -> Result<()> {
    match target {
        TargetId::Hero(side) => {
            let hero = &mut game.player_mut(side).hero;
            let absorbed = cmp::min(hero.armor, amount);
            hero.armor -= absorbed;
            hero.health = hero.health.saturating_sub(amount - absorbed);
        }
        TargetId::Minion(side, position) => {
            match game.player_mut(side).minions.get_mut(position) {
                Some(minion) => minion.health = minion.health.saturating_sub(amount),
                None => fail!("No minion at {:?}", target),
            }
        }
    }
    Ok(())
}

/// Restores health to a character, capped at its maximum.
pub fn heal(game: &mut GameState, target: TargetId, amount: u32) -> Result<()> {
    match target {
        TargetId::Hero(side) => {
            let hero = &mut game.player_mut(side).hero;
            hero.health = cmp::min(hero.health + amount, hero.max_health);
        }
        TargetId::Minion(side, position) => {
            match game.player_mut(side).minions.get_mut(position) {
                Some(minion) => minion.health = cmp::min(minion.health + amount, minion.max_health),
                None => fail!("No minion at {:?}", target),
            }
        }
    }
    Ok(())
}

/// Grants armor to the `side` player's hero
pub fn gain_armor(game: &mut GameState, side: Side, amount: u32) {
    game.player_mut(side).hero.armor += amount;
}

/// Puts a minion onto the board at the given position (clamped to the board
/// length). A summon onto a full board fizzles.
#[instrument(skip(game))]
pub fn summon_minion(
    game: &mut GameState,
    side: Side,
    name: CardName,
    position: usize,
) -> Result<()> {
    info!(?side, ?name, ?position, "summon_minion");
    if game.player(side).minions.len() >= constants::MAX_BOARD_MINIONS {
        return Ok(());
    }
    let definition = crate::get(name);
    verify!(definition.card_type == CardType::Minion, "Not a minion: {:?}", name);
    let stats = definition.minion_stats();
    let summon_order = game.next_play_order();
    let player = game.player_mut(side);
    let position = cmp::min(position, player.minions.len());
    player.minions.insert(
        position,
        MinionState {
            name,
            attack: stats.attack,
            health: stats.health,
            max_health: stats.health,
            taunt: stats.taunt,
            exhausted: !stats.charge,
            attacks_this_turn: 0,
            summon_order,
        },
    );
    Ok(())
}

/// Equips a weapon, destroying any weapon already held.
#[instrument(skip(game))]
pub fn equip_weapon(game: &mut GameState, side: Side, name: CardName) -> Result<()> {
    info!(?side, ?name, "equip_weapon");
    let definition = crate::get(name);
    verify!(definition.card_type == CardType::Weapon, "Not a weapon: {:?}", name);
    let stats = definition.weapon_stats();
    let player = game.player_mut(side);
    if player.weapon.take().is_some() {
        player.graveyard_size += 1;
    }
    player.weapon =
        Some(WeaponState { name, attack: stats.attack, durability: stats.durability });
    Ok(())
}

/// Removes one point of weapon durability, destroying the weapon at zero.
pub fn spend_durability(game: &mut GameState, side: Side) -> Result<()> {
    let player = game.player_mut(side);
    match &mut player.weapon {
        Some(weapon) => {
            weapon.durability = weapon.durability.saturating_sub(1);
            if weapon.durability == 0 {
                player.weapon = None;
                player.graveyard_size += 1;
            }
            Ok(())
        }
        None => fail!("No weapon equipped for {:?}", side),
    }
}

/// Removes dead minions, fires their deathrattles in summon order, and
/// repeats until the board is stable; then checks the heroes for game over.
///
/// Called once at the end of each main action's resolution.
pub fn resolve_deaths(game: &mut GameState) -> Result<()> {
    loop {
        let mut removed: Vec<(Side, CardName, PlayOrder)> = Vec::new();
        for side in all::<Side>() {
            let player = game.player_mut(side);
            let minions = std::mem::take(&mut player.minions);
            for minion in minions {
                if minion.is_dead() {
                    player.graveyard_size += 1;
                    removed.push((side, minion.name, minion.summon_order));
                } else {
                    player.minions.push(minion);
                }
            }
        }
        if removed.is_empty() {
            break;
        }

        removed.sort_by_key(|(_, _, summon_order)| *summon_order);
        for (side, name, _) in &removed {
            info!(?side, ?name, "minion_died");
            if let Some(deathrattle) = crate::get(*name).deathrattle {
                deathrattle(game, *side)?;
            }
            dispatch::fire_event(game, EventKind::MinionDied)?;
        }
    }

    let first_dead = game.first.hero.is_dead();
    let second_dead = game.second.hero.is_dead();
    if first_dead || second_dead {
        let winner = match (first_dead, second_dead) {
            (true, true) => None,
            (true, false) => Some(Side::Second),
            (false, true) => Some(Side::First),
            (false, false) => unreachable!(),
        };
        game_over(game, winner);
    }
    Ok(())
}

/// Marks the game as over with the given winner (`None` for a draw)
pub fn game_over(game: &mut GameState, winner: Option<Side>) {
    info!(?winner, "game_over");
    game.data.phase = GamePhase::GameOver(GameOverData { winner });
}

/// Begins the `side` player's turn: gain and refill mana, ready the hero,
/// hero power, and minions, fire the turn-start event, then draw a card.
pub fn start_turn(game: &mut GameState, side: Side) -> Result<()> {
    info!(?side, "start_turn");
    crate::mana::gain_crystal(game, side);
    let player = game.player_mut(side);
    player.crystals.refill();
    player.hero_power_used = false;
    player.hero.attacks_this_turn = 0;
    for minion in &mut player.minions {
        minion.exhausted = false;
        minion.attacks_this_turn = 0;
    }
    dispatch::fire_event(game, EventKind::TurnStart)?;
    draw_cards(game, side, 1)?;
    Ok(())
}

/// Ends the `side` player's turn and begins the opponent's, or ends the game
/// in a draw once the turn limit is reached.
pub fn end_turn(game: &mut GameState, side: Side) -> Result<()> {
    info!(?side, "end_turn");
    dispatch::fire_event(game, EventKind::TurnEnd)?;
    let turn = match game.current_turn() {
        Some(turn) => turn,
        // A turn-end handler may already have ended the game
        None => return Ok(()),
    };
    if turn.turn_number >= constants::TURN_LIMIT {
        game_over(game, None);
        return Ok(());
    }
    game.data.phase = GamePhase::Play(TurnData {
        side: side.opponent(),
        turn_number: turn.turn_number + 1,
    });
    start_turn(game, side.opponent())
}
