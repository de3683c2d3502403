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

use data::card_name::CardName;
use data::game_actions::{ActionType, GameResult};
use data::primitives::Side;
use data::sources::RngSource;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use rules::actions::perform_action;
use test_utils::{FixedRandom, ScriptedParams, TestGame};

#[test]
fn end_turn_passes_priority_and_draws() {
    let mut game = TestGame::new().deck(Side::Second, vec![CardName::RuneSprite]).build();
    let mut params = ScriptedParams::new(vec![(ActionType::Main, 0)]);
    let result =
        perform_action(&mut game, &mut params, &mut FixedRandom { value: 0 }).expect("action");

    assert_eq!(result, GameResult::NotDetermined);
    let turn = game.current_turn().expect("turn");
    assert_eq!(turn.side, Side::Second);
    assert_eq!(turn.turn_number, 2);
    assert_eq!(game.player(Side::Second).crystals.current, 1);
    assert_eq!(game.player(Side::Second).crystals.total, 1);
    assert_eq!(game.player(Side::Second).hand, vec![CardName::RuneSprite]);
    assert!(params.is_exhausted());
}

#[test]
fn play_minion_spends_mana_and_enters_exhausted() {
    let mut game = TestGame::new()
        .mana(Side::First, 2, 2)
        .hand(Side::First, vec![CardName::EmberWhelp])
        .build();
    let mut params = ScriptedParams::new(vec![
        (ActionType::Main, 0),
        (ActionType::HandIndex, 0),
        (ActionType::MinionPutLocation, 0),
    ]);
    perform_action(&mut game, &mut params, &mut FixedRandom { value: 0 }).expect("action");

    let player = game.player(Side::First);
    assert!(player.hand.is_empty());
    assert_eq!(player.crystals.current, 0);
    assert_eq!(player.minions.len(), 1);
    let minion = &player.minions[0];
    assert_eq!(minion.name, CardName::EmberWhelp);
    assert_eq!(minion.attack, 3);
    assert_eq!(minion.health, 2);
    assert!(minion.exhausted);
}

#[test]
fn attack_trades_damage_with_taunt_minion() {
    let mut game = TestGame::new()
        .ready_minion(Side::First, CardName::EmberWhelp)
        .exhausted_minion(Side::Second, CardName::StoneGuardian)
        .build();
    let mut params = ScriptedParams::new(vec![
        (ActionType::Main, 0),
        (ActionType::Attacker, 0),
        (ActionType::Defender, 0),
    ]);
    perform_action(&mut game, &mut params, &mut FixedRandom { value: 0 }).expect("action");

    let attacker = &game.player(Side::First).minions[0];
    let defender = &game.player(Side::Second).minions[0];
    assert_eq!(attacker.health, 1);
    assert_eq!(attacker.attacks_this_turn, 1);
    assert!(!attacker.can_attack());
    assert_eq!(defender.health, 1);
}

#[test]
fn taunt_masks_the_hero_and_other_minions() {
    let mut game = TestGame::new()
        .ready_minion(Side::First, CardName::EmberWhelp)
        .exhausted_minion(Side::Second, CardName::RuneSprite)
        .exhausted_minion(Side::Second, CardName::StoneGuardian)
        .build();
    // Only the Taunt minion is presented, so the defender choice is the
    // single position 0
    let mut params = ScriptedParams::new(vec![
        (ActionType::Main, 0),
        (ActionType::Attacker, 0),
        (ActionType::Defender, 0),
    ]);
    perform_action(&mut game, &mut params, &mut FixedRandom { value: 0 }).expect("action");

    assert_eq!(game.player(Side::Second).hero.health, 30);
    assert_eq!(game.player(Side::Second).minions[0].health, 1);
    assert_eq!(game.player(Side::Second).minions[1].health, 1);
}

#[test]
fn lethal_attack_ends_the_game() {
    let mut game = TestGame::new()
        .ready_minion(Side::First, CardName::SwiftRaider)
        .hero_health(Side::Second, 3)
        .build();
    let mut params = ScriptedParams::new(vec![
        (ActionType::Main, 0),
        (ActionType::Attacker, 0),
        (ActionType::Defender, 0),
    ]);
    let result =
        perform_action(&mut game, &mut params, &mut FixedRandom { value: 0 }).expect("action");

    assert_eq!(result, GameResult::FirstPlayerWin);
    assert!(game.is_over());
}

#[test]
fn hero_power_strikes_the_enemy_hero() {
    let mut game = TestGame::new().mana(Side::First, 2, 2).build();
    let mut params = ScriptedParams::new(vec![(ActionType::Main, 0)]);
    perform_action(&mut game, &mut params, &mut FixedRandom { value: 0 }).expect("action");

    assert_eq!(game.player(Side::Second).hero.health, 28);
    assert_eq!(game.player(Side::First).crystals.current, 0);
    assert!(game.player(Side::First).hero_power_used);
}

#[test]
fn weapon_attack_spends_durability() {
    let mut game = TestGame::new().weapon(Side::First, CardName::EmberAxe).build();
    let mut params = ScriptedParams::new(vec![
        (ActionType::Main, 0),
        (ActionType::Attacker, 0),
        (ActionType::Defender, 0),
    ]);
    perform_action(&mut game, &mut params, &mut FixedRandom { value: 0 }).expect("action");

    assert_eq!(game.player(Side::Second).hero.health, 27);
    let weapon = game.player(Side::First).weapon.as_ref().expect("weapon");
    assert_eq!(weapon.durability, 1);
    assert_eq!(game.player(Side::First).hero.attacks_this_turn, 1);
    // The hero has attacked; only ending the turn remains
    let analyzer = rules::analyzer::ValidActionAnalyzer::analyze(&game);
    assert!(analyzer.attackers().is_empty());
}

#[test]
fn empty_deck_draws_deal_fatigue_damage() {
    let mut game = TestGame::new().build();
    let mut params =
        ScriptedParams::new(vec![(ActionType::Main, 0), (ActionType::Main, 0)]);
    perform_action(&mut game, &mut params, &mut FixedRandom { value: 0 }).expect("action");
    perform_action(&mut game, &mut params, &mut FixedRandom { value: 0 }).expect("action");

    assert_eq!(game.player(Side::Second).hero.health, 29);
    assert_eq!(game.player(Side::First).hero.health, 29);
    assert_eq!(game.player(Side::First).fatigue, 1);
    let turn = game.current_turn().expect("turn");
    assert_eq!(turn.side, Side::First);
    assert_eq!(turn.turn_number, 3);
}

#[test]
fn new_episode_deals_opening_hands() {
    cards::initialize();
    let deck = cards::decklists::standard_deck();
    let mut rng = RngSource(Xoshiro256StarStar::seed_from_u64(7));
    let game = rules::episode::new_episode(&deck, &deck, &mut rng).expect("episode");

    // Three-card opening hand plus the turn-start draw
    assert_eq!(game.player(Side::First).hand.len(), 4);
    assert_eq!(game.player(Side::Second).hand.len(), 4);
    assert_eq!(game.player(Side::First).deck.len(), 20);
    assert_eq!(game.player(Side::Second).deck.len(), 20);
    assert_eq!(game.player(Side::First).crystals.total, 1);
    let turn = game.current_turn().expect("turn");
    assert_eq!(turn.side, Side::First);
    assert_eq!(turn.turn_number, 1);
    assert_eq!(game.result(), GameResult::NotDetermined);
}

#[test]
fn reaching_the_turn_limit_draws_the_game() {
    let mut game = TestGame::new().turn(Side::First, 90).build();
    let mut params = ScriptedParams::new(vec![(ActionType::Main, 0)]);
    let result =
        perform_action(&mut game, &mut params, &mut FixedRandom { value: 0 }).expect("action");

    assert_eq!(result, GameResult::Draw);
    assert!(game.is_over());
}

#[test]
fn stepping_a_finished_game_returns_its_result() {
    let mut game = TestGame::new()
        .ready_minion(Side::First, CardName::SwiftRaider)
        .hero_health(Side::Second, 3)
        .build();
    let mut params = ScriptedParams::new(vec![
        (ActionType::Main, 0),
        (ActionType::Attacker, 0),
        (ActionType::Defender, 0),
    ]);
    perform_action(&mut game, &mut params, &mut FixedRandom { value: 0 }).expect("action");
    assert!(game.is_over());

    // No further parameters are requested for a decided game
    let mut empty = ScriptedParams::new(vec![]);
    let result =
        perform_action(&mut game, &mut empty, &mut FixedRandom { value: 0 }).expect("action");
    assert_eq!(result, GameResult::FirstPlayerWin);
}
