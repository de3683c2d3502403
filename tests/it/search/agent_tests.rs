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

use std::time::Duration;

use agents::mcts_agent::{MctsAgent, MctsAgentConfig};
use agents::random_agent::RandomAgent;
use agents::Agent;
use data::card_name::CardName;
use data::game_actions::GameResult;
use data::primitives::Side;
use data::sources::RngSource;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use rules::actions::perform_action;
use test_utils::{FixedRandom, TestGame};

#[test]
fn mcts_agent_takes_the_lethal_attack() {
    let mut game = TestGame::new()
        .ready_minion(Side::First, CardName::SwiftRaider)
        .hero_health(Side::Second, 3)
        .exhausted_minion(Side::Second, CardName::EmberWhelp)
        .minion_attack(Side::Second, 0, 30)
        .minion_health(Side::Second, 0, 30)
        .build();

    let mut agent = MctsAgent::new(MctsAgentConfig {
        threads: 2,
        think_time: Duration::from_millis(150),
        base_seed: 7,
    });
    agent.begin_action(&game, Side::First).expect("think");
    let result = perform_action(&mut game, agent.as_param_source(), &mut FixedRandom { value: 0 })
        .expect("action");

    assert_eq!(result, GameResult::FirstPlayerWin);
}

#[test]
fn random_agents_finish_a_full_match() {
    cards::initialize();
    let deck = cards::decklists::standard_deck();
    let mut rng = RngSource(Xoshiro256StarStar::seed_from_u64(42));
    let mut game = rules::episode::new_episode(&deck, &deck, &mut rng).expect("episode");

    let mut first = RandomAgent::new(1);
    let mut second = RandomAgent::new(2);
    loop {
        let side = match game.current_side() {
            Some(side) => side,
            None => break,
        };
        let agent: &mut dyn Agent = match side {
            Side::First => &mut first,
            Side::Second => &mut second,
        };
        agent.begin_action(&game, side).expect("begin_action");
        let result =
            perform_action(&mut game, agent.as_param_source(), &mut rng).expect("action");
        if result.is_terminal() {
            break;
        }
    }

    assert!(game.is_over());
    assert!(game.result().is_terminal());
}
