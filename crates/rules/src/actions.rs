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

//! Resolution of main actions. [perform_action] is the single stepping
//! interface over a game state: it advances the game by exactly one main
//! action plus all of that action's sub-choices, requesting every decision
//! from the supplied parameter source.
//!
//! Functions in this module validate the parameters they receive and return
//! `Result` accordingly; an out-of-range or illegal parameter is a contract
//! break by the parameter source, not a game outcome.

use anyhow::Result;
use data::card_definition::{CardDefinition, CardType, EffectContext};
use data::game::GameState;
use data::game_actions::{ActionChoices, ActionType, GameResult, MainAction};
use data::primitives::{AttackerId, Side, TargetId};
use data::sources::{ActionParameterSource, RandomSource};
use tracing::info;
use with_error::{fail, verify, WithError};

use crate::analyzer::ValidActionAnalyzer;
use crate::{constants, mana, mutations, queries};

/// Advances the game by one main action.
///
/// Requests the main action and each of its sub-choices from `params`,
/// resolves the action, processes deaths, and reports whether the episode
/// has been decided. Stepping a finished game returns its result unchanged.
pub fn perform_action(
    game: &mut GameState,
    params: &mut dyn ActionParameterSource,
    rng: &mut dyn RandomSource,
) -> Result<GameResult> {
    if game.is_over() {
        return Ok(game.result());
    }
    let side = game.current_side().with_error(|| "Expected an active player")?;

    let analyzer = ValidActionAnalyzer::analyze(game);
    let choices = ActionChoices::from_range(analyzer.main_actions().len());
    let position = params.get_number(ActionType::Main, &choices)?;
    let action = *analyzer
        .main_actions()
        .get(position)
        .with_error(|| format!("Main action position {} out of range", position))?;
    info!(?side, ?action, "perform_action");

    match action {
        MainAction::PlayCard => play_card(game, side, &analyzer, params, rng)?,
        MainAction::Attack => attack(game, side, &analyzer, params)?,
        MainAction::HeroPower => hero_power(game, side)?,
        MainAction::EndTurn => mutations::end_turn(game, side)?,
    }

    mutations::resolve_deaths(game)?;
    game.next_play_order();
    Ok(game.result())
}

/// Resolves the `PlayCard` main action: select a playable card, pay its
/// cost, then resolve its type-specific effects and choices.
fn play_card(
    game: &mut GameState,
    side: Side,
    analyzer: &ValidActionAnalyzer,
    params: &mut dyn ActionParameterSource,
    rng: &mut dyn RandomSource,
) -> Result<()> {
    let choices = ActionChoices::from_indices(analyzer.playable_cards().to_vec());
    verify!(!choices.is_empty(), "No playable cards");
    let position = params.get_number(ActionType::HandIndex, &choices)?;
    let hand_index =
        choices.value_at(position).with_error(|| "Hand position out of range")?;
    let name = *game
        .player(side)
        .hand
        .get(hand_index)
        .with_error(|| format!("No card at hand index {}", hand_index))?;
    let definition = crate::get(name);
    info!(?side, ?name, "play_card");

    mana::spend(game, side, definition.cost)?;
    game.player_mut(side).hand.remove(hand_index);

    let option = if definition.choose_one.is_empty() {
        None
    } else {
        let option_choices = ActionChoices::from_range(definition.choose_one.len());
        Some(params.get_number(ActionType::ChooseOne, &option_choices)?)
    };

    match definition.card_type {
        CardType::Minion => {
            let board_len = game.player(side).minions.len();
            let location_choices = ActionChoices::from_range(board_len + 1);
            let location = params.get_number(ActionType::MinionPutLocation, &location_choices)?;
            verify!(location <= board_len, "Put location out of range");
            mutations::summon_minion(game, side, name, location)?;
            // Targets are enumerated against the post-summon board so their
            // positions resolve correctly; the new minion cannot target
            // itself
            let target = choose_target(
                game,
                side,
                definition,
                Some(TargetId::Minion(side, location)),
                params,
            )?;
            if let Some(effect) = definition.on_play {
                effect(game, EffectContext { side, target, option }, rng)?;
            }
        }
        CardType::Spell => {
            let target = choose_target(game, side, definition, None, params)?;
            if let Some(effect) = definition.on_play {
                effect(game, EffectContext { side, target, option }, rng)?;
            }
            game.player_mut(side).graveyard_size += 1;
        }
        CardType::Weapon => {
            mutations::equip_weapon(game, side, name)?;
            if let Some(effect) = definition.on_play {
                effect(game, EffectContext { side, target: None, option }, rng)?;
            }
        }
    }
    Ok(())
}

/// Requests a target selection for a card with a targeting predicate. A card
/// with no predicate, or one with no legal targets, resolves untargeted.
/// `excluded` removes one character from the enumeration, used to keep a
/// minion's battlecry from targeting the minion itself.
fn choose_target(
    game: &GameState,
    side: Side,
    definition: &CardDefinition,
    excluded: Option<TargetId>,
    params: &mut dyn ActionParameterSource,
) -> Result<Option<TargetId>> {
    let predicate = match definition.target_predicate {
        Some(predicate) => predicate,
        None => return Ok(None),
    };
    let targets = queries::valid_targets(game, side, predicate)
        .into_iter()
        .filter(|target| Some(*target) != excluded)
        .collect::<Vec<_>>();
    if targets.is_empty() {
        return Ok(None);
    }
    let choices = ActionChoices::from_range(targets.len());
    let position = params.get_number(ActionType::SpecifiedTarget, &choices)?;
    Ok(Some(*targets.get(position).with_error(|| "Target position out of range")?))
}

/// Resolves the `Attack` main action: select an attacker and a defender,
/// then exchange combat damage.
fn attack(
    game: &mut GameState,
    side: Side,
    analyzer: &ValidActionAnalyzer,
    params: &mut dyn ActionParameterSource,
) -> Result<()> {
    let attacker_choices = ActionChoices::from_range(analyzer.attackers().len());
    verify!(!attacker_choices.is_empty(), "No legal attackers");
    let position = params.get_number(ActionType::Attacker, &attacker_choices)?;
    let attacker = *analyzer
        .attackers()
        .get(position)
        .with_error(|| "Attacker position out of range")?;

    let defenders = queries::defender_targets(game, side);
    verify!(!defenders.is_empty(), "No legal defenders");
    let defender_choices = ActionChoices::from_range(defenders.len());
    let position = params.get_number(ActionType::Defender, &defender_choices)?;
    let defender = *defenders
        .get(position)
        .with_error(|| "Defender position out of range")?;
    info!(?side, ?attacker, ?defender, "attack");

    resolve_combat(game, side, attacker, defender)
}

/// Exchanges combat damage. Minions strike back when attacked; heroes do
/// not.
fn resolve_combat(
    game: &mut GameState,
    side: Side,
    attacker: AttackerId,
    defender: TargetId,
) -> Result<()> {
    let attacker_id = match attacker {
        AttackerId::Hero => TargetId::Hero(side),
        AttackerId::Minion(position) => TargetId::Minion(side, position),
    };
    let attack = queries::attack_value(game, attacker_id);
    verify!(attack > 0, "Attacker {:?} has no attack value", attacker_id);
    let retaliation = match defender {
        TargetId::Hero(_) => 0,
        TargetId::Minion(..) => queries::attack_value(game, defender),
    };

    match attacker {
        AttackerId::Hero => {
            game.player_mut(side).hero.attacks_this_turn += 1;
            mutations::spend_durability(game, side)?;
        }
        AttackerId::Minion(position) => {
            match game.player_mut(side).minions.get_mut(position) {
                Some(minion) => minion.attacks_this_turn += 1,
                None => fail!("No minion at position {}", position),
            }
        }
    }

    mutations::deal_damage(game, defender, attack)?;
    if retaliation > 0 {
        mutations::deal_damage(game, attacker_id, retaliation)?;
    }
    Ok(())
}

/// Resolves the `HeroPower` main action: spend the cost and strike the enemy
/// hero. Usable once per turn.
fn hero_power(game: &mut GameState, side: Side) -> Result<()> {
    verify!(crate::flags::can_use_hero_power(game, side), "Hero power not available");
    info!(?side, "hero_power");
    mana::spend(game, side, constants::HERO_POWER_COST)?;
    game.player_mut(side).hero_power_used = true;
    mutations::deal_damage(game, TargetId::Hero(side.opponent()), constants::HERO_POWER_DAMAGE)
}
