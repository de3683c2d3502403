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
use data::game_actions::ActionType;
use data::primitives::Side;
use rules::actions::perform_action;
use test_utils::{FixedRandom, ScriptedParams, TestGame};

#[test]
fn flame_adept_battlecry_hits_chosen_target() {
    let mut game = TestGame::new()
        .mana(Side::First, 3, 3)
        .hand(Side::First, vec![CardName::FlameAdept])
        .build();
    // Targets enumerate over the post-summon board with the new minion
    // excluded: own hero, then the enemy hero at position 1
    let mut params = ScriptedParams::new(vec![
        (ActionType::Main, 0),
        (ActionType::HandIndex, 0),
        (ActionType::MinionPutLocation, 0),
        (ActionType::SpecifiedTarget, 1),
    ]);
    perform_action(&mut game, &mut params, &mut FixedRandom { value: 0 }).expect("action");

    assert_eq!(game.player(Side::Second).hero.health, 28);
    assert_eq!(game.player(Side::First).minions[0].name, CardName::FlameAdept);
}

#[test]
fn battlecry_never_targets_the_entering_minion() {
    let mut game = TestGame::new()
        .mana(Side::First, 3, 3)
        .hand(Side::First, vec![CardName::FlameAdept])
        .exhausted_minion(Side::First, CardName::RuneSprite)
        .build();
    // Flame Adept enters at position 0, shifting Rune Sprite to position 1.
    // The target enumeration excludes the Adept itself: own hero, then the
    // sprite at position 1, then the enemy hero.
    let mut params = ScriptedParams::new(vec![
        (ActionType::Main, 0),
        (ActionType::HandIndex, 0),
        (ActionType::MinionPutLocation, 0),
        (ActionType::SpecifiedTarget, 1),
    ]);
    perform_action(&mut game, &mut params, &mut FixedRandom { value: 0 }).expect("action");

    let board = &game.player(Side::First).minions;
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].name, CardName::FlameAdept);
    assert_eq!(board[0].health, 3);
    assert_eq!(game.player(Side::First).graveyard_size, 1);
}

#[test]
fn bone_colossus_death_summons_a_servant() {
    let mut game = TestGame::new()
        .mana(Side::First, 1, 1)
        .hand(Side::First, vec![CardName::FireBolt])
        .exhausted_minion(Side::Second, CardName::BoneColossus)
        .minion_health(Side::Second, 0, 3)
        .build();
    let mut params = ScriptedParams::new(vec![
        (ActionType::Main, 0),
        (ActionType::HandIndex, 0),
        (ActionType::SpecifiedTarget, 2),
    ]);
    perform_action(&mut game, &mut params, &mut FixedRandom { value: 0 }).expect("action");

    let board = &game.player(Side::Second).minions;
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].name, CardName::BoneServant);
    assert!(board[0].exhausted);
    assert_eq!(game.player(Side::Second).graveyard_size, 1);
    assert_eq!(game.player(Side::First).graveyard_size, 1);
}

#[test]
fn archive_keeper_death_draws_its_owner_a_card() {
    let mut game = TestGame::new()
        .mana(Side::First, 1, 1)
        .hand(Side::First, vec![CardName::FireBolt])
        .deck(Side::Second, vec![CardName::RuneSprite])
        .exhausted_minion(Side::Second, CardName::ArchiveKeeper)
        .minion_health(Side::Second, 0, 3)
        .build();
    let mut params = ScriptedParams::new(vec![
        (ActionType::Main, 0),
        (ActionType::HandIndex, 0),
        (ActionType::SpecifiedTarget, 2),
    ]);
    perform_action(&mut game, &mut params, &mut FixedRandom { value: 0 }).expect("action");

    assert!(game.player(Side::Second).minions.is_empty());
    assert_eq!(game.player(Side::Second).hand, vec![CardName::RuneSprite]);
}

#[test]
fn cinderstorm_sweeps_the_enemy_board() {
    let mut game = TestGame::new()
        .mana(Side::First, 4, 4)
        .hand(Side::First, vec![CardName::Cinderstorm])
        .exhausted_minion(Side::Second, CardName::RuneSprite)
        .exhausted_minion(Side::Second, CardName::EmberWhelp)
        .build();
    let mut params =
        ScriptedParams::new(vec![(ActionType::Main, 0), (ActionType::HandIndex, 0)]);
    perform_action(&mut game, &mut params, &mut FixedRandom { value: 0 }).expect("action");

    assert!(game.player(Side::Second).minions.is_empty());
    assert_eq!(game.player(Side::Second).graveyard_size, 2);
    assert_eq!(game.player(Side::First).graveyard_size, 1);
}

#[test]
fn wild_flame_strikes_a_random_enemy_minion() {
    let mut game = TestGame::new()
        .mana(Side::First, 2, 2)
        .hand(Side::First, vec![CardName::WildFlame])
        .exhausted_minion(Side::Second, CardName::RuneSprite)
        .exhausted_minion(Side::Second, CardName::EmberWhelp)
        .build();
    let mut params =
        ScriptedParams::new(vec![(ActionType::Main, 0), (ActionType::HandIndex, 0)]);
    // The random source picks board position 1
    perform_action(&mut game, &mut params, &mut FixedRandom { value: 1 }).expect("action");

    let board = &game.player(Side::Second).minions;
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].name, CardName::RuneSprite);
}

#[test]
fn feral_rite_first_option_burns_the_enemy_hero() {
    let mut game = TestGame::new()
        .mana(Side::First, 2, 2)
        .hand(Side::First, vec![CardName::FeralRite])
        .build();
    let mut params = ScriptedParams::new(vec![
        (ActionType::Main, 0),
        (ActionType::HandIndex, 0),
        (ActionType::ChooseOne, 0),
    ]);
    perform_action(&mut game, &mut params, &mut FixedRandom { value: 0 }).expect("action");

    assert_eq!(game.player(Side::Second).hero.health, 28);
    assert_eq!(game.player(Side::First).hero.armor, 0);
}

#[test]
fn feral_rite_second_option_grants_armor() {
    let mut game = TestGame::new()
        .mana(Side::First, 2, 2)
        .hand(Side::First, vec![CardName::FeralRite])
        .build();
    let mut params = ScriptedParams::new(vec![
        (ActionType::Main, 0),
        (ActionType::HandIndex, 0),
        (ActionType::ChooseOne, 1),
    ]);
    perform_action(&mut game, &mut params, &mut FixedRandom { value: 0 }).expect("action");

    assert_eq!(game.player(Side::Second).hero.health, 30);
    assert_eq!(game.player(Side::First).hero.armor, 4);
}

#[test]
fn grave_warden_grows_when_a_minion_dies() {
    let mut game = TestGame::new()
        .ready_minion(Side::First, CardName::GraveWarden)
        .ready_minion(Side::First, CardName::SwiftRaider)
        .exhausted_minion(Side::Second, CardName::RuneSprite)
        .build();
    let mut params = ScriptedParams::new(vec![
        (ActionType::Main, 0),
        (ActionType::Attacker, 1),
        (ActionType::Defender, 1),
    ]);
    perform_action(&mut game, &mut params, &mut FixedRandom { value: 0 }).expect("action");

    assert!(game.player(Side::Second).minions.is_empty());
    assert_eq!(game.player(Side::First).minions[0].attack, 3);
}

#[test]
fn cinder_shaman_burns_at_the_start_of_its_owners_turn() {
    let mut game = TestGame::new()
        .exhausted_minion(Side::First, CardName::CinderShaman)
        .deck(Side::Second, vec![CardName::RuneSprite])
        .build();
    // First ends turn: no burn for the opponent's turn start. Second ends
    // turn: the shaman burns at the start of its owner's turn.
    let mut params =
        ScriptedParams::new(vec![(ActionType::Main, 0), (ActionType::Main, 1)]);
    perform_action(&mut game, &mut params, &mut FixedRandom { value: 0 }).expect("action");
    assert_eq!(game.player(Side::Second).hero.health, 30);

    perform_action(&mut game, &mut params, &mut FixedRandom { value: 0 }).expect("action");
    assert_eq!(game.player(Side::Second).hero.health, 29);
}
