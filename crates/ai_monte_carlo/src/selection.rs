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

//! Child selection during the tree-walk phase.
//!
//! This implementation uses the UCB1 algorithm, the standard solution to the
//! 'multi-armed bandit' problem: unexplored children are always visited
//! first, and among explored children the score
//! `mean + k * sqrt(ln(N) / n)` balances exploitation against exploration.

use data::game_actions::ActionChoices;
use ordered_float::NotNan;
use with_error::verify;

use crate::tree::{TreeEdge, TreeNode};

/// Kocsis and Szepesvári's exploration constant. Both observers must search
/// with the same value.
pub const EXPLORATION_CONSTANT: f64 = std::f64::consts::SQRT_2;

/// The outcome of one selection step.
pub struct Selected {
    /// Chosen position within the presented [ActionChoices]
    pub position: usize,
    pub edge: TreeEdge,
    /// True when this step created a brand-new leaf
    pub expanded: bool,
}

/// UCB1 selection policy over a node's children.
#[derive(Debug, Clone, Copy)]
pub struct SelectionPolicy {
    pub exploration: f64,
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self { exploration: EXPLORATION_CONSTANT }
    }
}

impl SelectionPolicy {
    /// Picks a child of `node` for the presented choices.
    ///
    /// The smallest position with no child is expanded first. Once every
    /// position has a child, children are scored by UCB1 with ties broken by
    /// the smaller position. A transiently zero visit count (a child created
    /// by a racing thread which has not yet backpropagated) scores as
    /// infinitely attractive, which recovers first-visit behavior.
    pub fn select(&self, node: &TreeNode, choices: &ActionChoices) -> anyhow::Result<Selected> {
        verify!(!choices.is_empty(), "Cannot select from empty choices");

        for position in 0..choices.size() {
            if node.child(position).is_none() {
                let (edge, expanded) = node.get_or_create_child(position);
                return Ok(Selected { position, edge, expanded });
            }
        }

        let total: u64 = (0..choices.size())
            .filter_map(|position| node.child(position))
            .map(|edge| edge.stats.chosen_times())
            .sum();
        let ln_total = (total.max(1) as f64).ln();

        let mut best: Option<(NotNan<f64>, usize, TreeEdge)> = None;
        for position in 0..choices.size() {
            let edge = match node.child(position) {
                Some(edge) => edge,
                None => continue,
            };
            let visits = edge.stats.chosen_times();
            let score = if visits == 0 {
                NotNan::new(f64::INFINITY).expect("not nan")
            } else {
                let mean = edge.stats.mean_credit();
                let explore = self.exploration * (ln_total / visits as f64).sqrt();
                NotNan::new(mean + explore).expect("not nan")
            };
            // Strict comparison keeps the smaller position on ties
            if best.as_ref().map_or(true, |(best_score, _, _)| score > *best_score) {
                best = Some((score, position, edge));
            }
        }

        let (_, position, edge) =
            best.expect("at least one child exists after the expansion scan");
        Ok(Selected { position, edge, expanded: false })
    }
}
