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

//! The per-episode record of traversed edges, replayed at backpropagation.

use std::sync::Arc;

use anyhow::Result;
use with_error::verify;

use crate::tree::EdgeStats;

/// Insertion-ordered list of the edges traversed during one episode's
/// selection phase. Reused across episodes; cleared at episode start.
#[derive(Debug, Default)]
pub struct TreeUpdater {
    edges: Vec<Arc<EdgeStats>>,
}

impl TreeUpdater {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.edges.clear();
    }

    /// Records one traversed edge
    pub fn record(&mut self, stats: Arc<EdgeStats>) {
        self.edges.push(stats);
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Backpropagates: applies exactly one visit and `credit` to every
    /// recorded edge.
    pub fn update(&self, credit: f64) -> Result<()> {
        verify!((0.0..=1.0).contains(&credit), "Credit {} out of range", credit);
        for edge in &self.edges {
            edge.record_visit(credit);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_touches_every_recorded_edge_once() {
        let mut updater = TreeUpdater::new();
        let edges = (0..3).map(|_| Arc::new(EdgeStats::new())).collect::<Vec<_>>();
        for edge in &edges {
            updater.record(edge.clone());
        }
        updater.update(0.5).expect("update");
        for edge in &edges {
            assert_eq!(edge.chosen_times(), 1);
            assert!((edge.total_credit() - 0.5).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn update_with_no_recorded_edges_changes_nothing() {
        let updater = TreeUpdater::new();
        updater.update(1.0).expect("update");
        assert!(updater.is_empty());
    }
}
