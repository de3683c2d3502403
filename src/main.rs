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

//! Command line driver: plays agent-vs-agent matches.

#![deny(warnings)]
#![deny(clippy::all)]
#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(unused_variables)]

use std::time::Duration;

use agents::mcts_agent::{MctsAgent, MctsAgentConfig};
use agents::random_agent::RandomAgent;
use agents::Agent;
use anyhow::Result;
use clap::{ArgEnum, Parser};
use data::game_actions::GameResult;
use data::primitives::Side;
use data::sources::RngSource;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ArgEnum)]
pub enum AgentName {
    Mcts,
    Random,
}

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Agent playing first
    #[clap(arg_enum, value_parser, default_value = "mcts")]
    pub first: AgentName,
    /// Agent playing second
    #[clap(arg_enum, value_parser, default_value = "random")]
    pub second: AgentName,
    /// Worker threads per MCTS search
    #[clap(long, value_parser, default_value_t = 2)]
    pub threads: usize,
    /// Think budget per main action, in milliseconds
    #[clap(long, value_parser, default_value_t = 500)]
    pub think_ms: u64,
    /// Number of games to play
    #[clap(long, value_parser, default_value_t = 1)]
    pub games: u32,
    /// Base random seed
    #[clap(long, value_parser, default_value_t = 2022)]
    pub seed: u64,
}

pub fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();
    cards::initialize();

    let deck = cards::decklists::standard_deck();
    let mut rng = RngSource(Xoshiro256StarStar::seed_from_u64(args.seed));

    let mut wins = [0u32; 3];
    for game_number in 0..args.games {
        let mut first = build_agent(args.first, &args, 1);
        let mut second = build_agent(args.second, &args, 2);
        let mut game = rules::episode::new_episode(&deck, &deck, &mut rng)?;
        info!(game_number, first = first.name(), second = second.name(), "game_start");

        let result = loop {
            let side = match game.current_side() {
                Some(side) => side,
                None => break game.result(),
            };
            let agent = match side {
                Side::First => &mut first,
                Side::Second => &mut second,
            };
            agent.begin_action(&game, side)?;
            let result =
                rules::actions::perform_action(&mut game, agent.as_param_source(), &mut rng)?;
            if result.is_terminal() {
                break result;
            }
        };

        match result {
            GameResult::FirstPlayerWin => wins[0] += 1,
            GameResult::SecondPlayerWin => wins[1] += 1,
            _ => wins[2] += 1,
        }
        println!("Game {}: {:?}", game_number + 1, result);
    }

    println!(
        "Final score: first {} / second {} / drawn {}",
        wins[0], wins[1], wins[2]
    );
    Ok(())
}

fn build_agent(name: AgentName, args: &Args, offset: u64) -> Box<dyn Agent> {
    match name {
        AgentName::Mcts => Box::new(MctsAgent::new(MctsAgentConfig {
            threads: args.threads,
            think_time: Duration::from_millis(args.think_ms),
            base_seed: args.seed.wrapping_add(offset),
        })),
        AgentName::Random => Box::new(RandomAgent::new(args.seed.wrapping_add(offset))),
    }
}
