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

//! The search tree shared between worker threads.
//!
//! Nodes are grown concurrently: child creation goes through a concurrent
//! map's entry API so the first thread to observe a missing choice creates
//! the edge and every other thread sees the populated entry. Edge statistics
//! are relaxed atomics; a reader may observe one counter of the pair updated
//! before the other, which the selection policy tolerates.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use anyhow::Result;
use dashmap::DashMap;
use data::game_actions::ActionType;
use data::view::BoardFingerprint;
use once_cell::sync::OnceCell;
use with_error::verify;

/// Visit count and accumulated credit for one edge.
///
/// Credit is stored as `f64` bits inside an atomic integer; accumulation is
/// a compare-exchange loop. Both counters use relaxed ordering.
#[derive(Debug, Default)]
pub struct EdgeStats {
    chosen_times: AtomicU64,
    total_credit_bits: AtomicU64,
}

impl EdgeStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chosen_times(&self) -> u64 {
        self.chosen_times.load(Ordering::Relaxed)
    }

    pub fn total_credit(&self) -> f64 {
        f64::from_bits(self.total_credit_bits.load(Ordering::Relaxed))
    }

    /// Average credit per visit; zero before the first visit completes
    pub fn mean_credit(&self) -> f64 {
        let visits = self.chosen_times();
        if visits == 0 {
            0.0
        } else {
            self.total_credit() / visits as f64
        }
    }

    /// Applies one backpropagation step: one visit plus `credit`
    pub fn record_visit(&self, credit: f64) {
        self.chosen_times.fetch_add(1, Ordering::Relaxed);
        let mut current = self.total_credit_bits.load(Ordering::Relaxed);
        loop {
            let updated = (f64::from_bits(current) + credit).to_bits();
            match self.total_credit_bits.compare_exchange_weak(
                current,
                updated,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => break,
                Err(observed) => current = observed,
            }
        }
    }
}

/// An edge of the tree: its statistics plus the child node it owns.
#[derive(Debug, Clone)]
pub struct TreeEdge {
    pub stats: Arc<EdgeStats>,
    pub node: Arc<TreeNode>,
}

/// Maps visible-board fingerprints to tree nodes. Carried by turn-boundary
/// nodes to reconcile states which an observer cannot distinguish by the
/// opponent's hidden choices alone.
#[derive(Debug, Default)]
pub struct BoardNodeMap {
    map: DashMap<BoardFingerprint, Arc<TreeNode>>,
}

impl BoardNodeMap {
    /// Returns the node for a fingerprint, creating it on first sight.
    pub fn get_or_create(&self, fingerprint: BoardFingerprint) -> Arc<TreeNode> {
        self.map.entry(fingerprint).or_insert_with(|| Arc::new(TreeNode::new())).clone()
    }

    pub fn get(&self, fingerprint: BoardFingerprint) -> Option<Arc<TreeNode>> {
        self.map.get(&fingerprint).map(|node| node.clone())
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Snapshot of all nodes in the map
    pub fn nodes(&self) -> Vec<Arc<TreeNode>> {
        self.map.iter().map(|entry| entry.value().clone()).collect()
    }
}

/// A node of the search tree.
///
/// A node *dispatches* one choice: its action type is fixed by the first
/// request resolved at it, and each answered position becomes a child edge.
#[derive(Debug, Default)]
pub struct TreeNode {
    action_type: OnceCell<ActionType>,
    children: DashMap<usize, TreeEdge>,
    board_node_map: BoardNodeMap,
}

impl TreeNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// The action type this node dispatches, or `None` before first
    /// expansion
    pub fn action_type(&self) -> Option<ActionType> {
        self.action_type.get().copied()
    }

    /// Fixes this node's action type on first use and verifies every later
    /// request agrees with it.
    pub fn dispatch_as(&self, action_type: ActionType) -> Result<()> {
        let fixed = *self.action_type.get_or_init(|| action_type);
        verify!(
            fixed == action_type,
            "Action type mismatch: node dispatches {:?}, requested {:?}",
            fixed,
            action_type
        );
        Ok(())
    }

    pub fn child(&self, choice: usize) -> Option<TreeEdge> {
        self.children.get(&choice).map(|edge| edge.clone())
    }

    /// Returns the edge for a choice, creating it when absent. The boolean
    /// reports whether this call created the edge.
    pub fn get_or_create_child(&self, choice: usize) -> (TreeEdge, bool) {
        let mut created = false;
        let edge = self
            .children
            .entry(choice)
            .or_insert_with(|| {
                created = true;
                TreeEdge {
                    stats: Arc::new(EdgeStats::new()),
                    node: Arc::new(TreeNode::new()),
                }
            })
            .clone();
        (edge, created)
    }

    pub fn num_children(&self) -> usize {
        self.children.len()
    }

    /// Visits every child edge. Iteration order is unspecified.
    pub fn for_each_child(&self, mut f: impl FnMut(usize, &TreeEdge)) {
        for entry in self.children.iter() {
            f(*entry.key(), entry.value());
        }
    }

    /// The board→node map used at turn boundaries. Populated only on nodes
    /// which dispatch main actions (and the root).
    pub fn board_node_map(&self) -> &BoardNodeMap {
        &self.board_node_map
    }

    /// Sum of child visit counts
    pub fn visit_sum(&self) -> u64 {
        let mut sum = 0;
        self.for_each_child(|_, edge| sum += edge.stats.chosen_times());
        sum
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn record_visit_accumulates() {
        let stats = EdgeStats::new();
        stats.record_visit(1.0);
        stats.record_visit(0.5);
        assert_eq!(stats.chosen_times(), 2);
        assert!((stats.total_credit() - 1.5).abs() < f64::EPSILON);
        assert!((stats.mean_credit() - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn mean_credit_guards_zero_visits() {
        assert_eq!(EdgeStats::new().mean_credit(), 0.0);
    }

    #[test]
    fn concurrent_visits_are_not_lost() {
        let stats = Arc::new(EdgeStats::new());
        let handles = (0..4)
            .map(|_| {
                let stats = stats.clone();
                thread::spawn(move || {
                    for _ in 0..1000 {
                        stats.record_visit(0.5);
                    }
                })
            })
            .collect::<Vec<_>>();
        for handle in handles {
            handle.join().expect("worker");
        }
        assert_eq!(stats.chosen_times(), 4000);
        assert!((stats.total_credit() - 2000.0).abs() < 1e-6);
    }

    #[test]
    fn first_creation_wins() {
        let node = TreeNode::new();
        let (_, created) = node.get_or_create_child(3);
        assert!(created);
        let (_, created_again) = node.get_or_create_child(3);
        assert!(!created_again);
        assert_eq!(node.num_children(), 1);
    }

    #[test]
    fn action_type_is_fixed_after_first_dispatch() {
        let node = TreeNode::new();
        assert!(node.action_type().is_none());
        node.dispatch_as(ActionType::Main).expect("first dispatch");
        assert_eq!(node.action_type(), Some(ActionType::Main));
    }

    #[test]
    fn board_map_merges_equal_fingerprints() {
        let node = TreeNode::new();
        let fingerprint = BoardFingerprint(42);
        let a = node.board_node_map().get_or_create(fingerprint);
        let b = node.board_node_map().get_or_create(fingerprint);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(node.board_node_map().len(), 1);
    }
}
