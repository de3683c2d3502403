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

use std::sync::Arc;

use ai_monte_carlo::credit::WinLossDrawCredit;
use ai_monte_carlo::momcts::MoMcts;
use ai_monte_carlo::simulation::UniformRandomPolicy;
use ai_monte_carlo::somcts::SoMcts;
use ai_monte_carlo::tree::TreeNode;
use data::card_name::CardName;
use data::game::GameState;
use data::game_actions::{ActionType, GameResult};
use data::primitives::Side;
use data::sources::RngSource;
use data::view::ObserverView;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use test_utils::TestGame;

fn observer(side: Side, root: Arc<TreeNode>, seed: u64) -> SoMcts {
    SoMcts::new(
        side,
        root,
        Box::new(RngSource(Xoshiro256StarStar::seed_from_u64(seed))),
        Box::new(RngSource(Xoshiro256StarStar::seed_from_u64(seed ^ 0x517c_c1b7_2722_0a95))),
        Box::new(UniformRandomPolicy),
        Box::new(WinLossDrawCredit),
    )
}

fn coordinator(seed: u64) -> (MoMcts, Arc<TreeNode>, Arc<TreeNode>) {
    let first_root = Arc::new(TreeNode::new());
    let second_root = Arc::new(TreeNode::new());
    let momcts = MoMcts::new(
        observer(Side::First, first_root.clone(), seed),
        observer(Side::Second, second_root.clone(), seed.wrapping_add(1)),
    )
    .expect("coordinator");
    (momcts, first_root, second_root)
}

/// A state where the first player's only legal main action is ending the
/// turn: empty hand, no attackers, no mana for the hero power.
fn forced_end_turn_state() -> GameState {
    TestGame::new().build()
}

/// A state with lethal on the board: a ready Swift Raider against a hero at
/// 3 health. Every other line leaves the opponent a 30/30 minion.
fn lethal_state() -> GameState {
    TestGame::new()
        .ready_minion(Side::First, CardName::SwiftRaider)
        .hero_health(Side::Second, 3)
        .exhausted_minion(Side::Second, CardName::EmberWhelp)
        .minion_attack(Side::Second, 0, 30)
        .minion_health(Side::Second, 0, 30)
        .build()
}

#[test]
fn forced_choice_creates_a_single_edge() {
    let game = forced_end_turn_state();
    let fingerprint = ObserverView::new(&game, Side::First).fingerprint();
    let (mut momcts, first_root, _) = coordinator(11);

    momcts.iterate(game).expect("iterate");

    assert_eq!(first_root.board_node_map().len(), 1);
    let anchored = first_root.board_node_map().get(fingerprint).expect("anchored node");
    assert_eq!(anchored.action_type(), Some(ActionType::Main));
    assert_eq!(anchored.num_children(), 1);
    let edge = anchored.child(0).expect("end-turn edge");
    assert_eq!(edge.stats.chosen_times(), 1);
    let credit = edge.stats.total_credit();
    assert!((0.0..=1.0).contains(&credit));
}

#[test]
fn every_iteration_traverses_exactly_one_root_edge() {
    let game = forced_end_turn_state();
    let fingerprint = ObserverView::new(&game, Side::First).fingerprint();
    let (mut momcts, first_root, _) = coordinator(13);

    for _ in 0..12 {
        momcts.iterate(game.clone()).expect("iterate");
    }

    let anchored = first_root.board_node_map().get(fingerprint).expect("anchored node");
    assert_eq!(anchored.visit_sum(), 12);
}

#[test]
fn search_concentrates_on_the_lethal_line() {
    let game = lethal_state();
    let fingerprint = ObserverView::new(&game, Side::First).fingerprint();
    let (mut momcts, first_root, _) = coordinator(17);

    for _ in 0..20 {
        momcts.iterate(game.clone()).expect("iterate");
    }

    let anchored = first_root.board_node_map().get(fingerprint).expect("anchored node");
    // Main actions enumerate as [Attack, EndTurn]
    let attack = anchored.child(0).expect("attack edge");
    let end_turn = anchored.child(1).expect("end-turn edge");
    assert!(attack.stats.chosen_times() > end_turn.stats.chosen_times());

    // The attacker choice is forced (one ready minion) and bypasses the
    // tree, so the attack edge's child dispatches the defender choice
    assert_eq!(attack.node.action_type(), Some(ActionType::Defender));

    // Defenders enumerate as [enemy hero, enemy minion]; striking the hero
    // wins on the spot, so that edge's mean credit is exactly 1
    let face = attack.node.child(0).expect("face edge");
    assert_eq!(face.stats.total_credit(), face.stats.chosen_times() as f64);
    assert!(face.stats.chosen_times() >= 1);
    if let Some(trade) = attack.node.child(1) {
        assert!(face.stats.chosen_times() > trade.stats.chosen_times());
    }
}

#[test]
fn identical_visible_boards_share_one_node() {
    // The opponent holds different hidden cards in the two episodes, but the
    // observer-visible board is identical
    let game_a = TestGame::new().hand(Side::Second, vec![CardName::FireBolt]).build();
    let game_b = TestGame::new().hand(Side::Second, vec![CardName::ScryingOrb]).build();
    let fp_a = ObserverView::new(&game_a, Side::First).fingerprint();
    let fp_b = ObserverView::new(&game_b, Side::First).fingerprint();
    assert_eq!(fp_a, fp_b);

    let (mut momcts, first_root, _) = coordinator(19);
    momcts.iterate(game_a).expect("iterate");
    momcts.iterate(game_b).expect("iterate");

    assert_eq!(first_root.board_node_map().len(), 1);
    let anchored = first_root.board_node_map().get(fp_a).expect("anchored node");
    assert_eq!(anchored.child(0).expect("end-turn edge").stats.chosen_times(), 2);
}

#[test]
fn opponent_reconciliation_merges_through_the_board_map() {
    let game_a = TestGame::new().hand(Side::Second, vec![CardName::FireBolt]).build();
    let game_b = TestGame::new().hand(Side::Second, vec![CardName::ScryingOrb]).build();

    let root = Arc::new(TreeNode::new());
    let mut somcts = observer(Side::First, root.clone(), 23);

    somcts.start_episode();
    somcts.apply_others_actions(&game_a).expect("apply");
    somcts.start_episode();
    somcts.apply_others_actions(&game_b).expect("apply");

    assert_eq!(root.board_node_map().len(), 1);
}

#[test]
fn terminal_at_expansion_backpropagates_draw_credit() {
    // One action from the turn-limit draw
    let game = TestGame::new().turn(Side::First, 90).build();
    let fingerprint = ObserverView::new(&game, Side::First).fingerprint();
    let (mut momcts, first_root, _) = coordinator(29);

    let result = momcts.iterate(game).expect("iterate");
    assert_eq!(result, GameResult::Draw);

    let anchored = first_root.board_node_map().get(fingerprint).expect("anchored node");
    let edge = anchored.child(0).expect("end-turn edge");
    assert_eq!(edge.stats.chosen_times(), 1);
    assert!((edge.stats.total_credit() - 0.5).abs() < f64::EPSILON);
}

#[test]
fn finishing_an_episode_without_steps_changes_nothing() {
    let game = forced_end_turn_state();
    let root = Arc::new(TreeNode::new());
    let mut somcts = observer(Side::First, root.clone(), 31);

    somcts.start_episode();
    somcts.episode_finished(&game, GameResult::Draw).expect("finish");

    assert_eq!(root.num_children(), 0);
    assert!(root.board_node_map().is_empty());
}

#[test]
fn identical_seeds_build_identical_trees() {
    let game = lethal_state();
    let fingerprint = ObserverView::new(&game, Side::First).fingerprint();

    let run = || {
        let (mut momcts, first_root, _) = coordinator(37);
        for _ in 0..15 {
            momcts.iterate(game.clone()).expect("iterate");
        }
        first_root
    };
    let a = run();
    let b = run();

    let anchored_a = a.board_node_map().get(fingerprint).expect("anchored node");
    let anchored_b = b.board_node_map().get(fingerprint).expect("anchored node");
    assert_eq!(anchored_a.num_children(), anchored_b.num_children());
    for choice in 0..anchored_a.num_children() {
        let edge_a = anchored_a.child(choice).expect("edge");
        let edge_b = anchored_b.child(choice).expect("edge");
        assert_eq!(edge_a.stats.chosen_times(), edge_b.stats.chosen_times());
        assert_eq!(edge_a.stats.total_credit(), edge_b.stats.total_credit());
    }
}
