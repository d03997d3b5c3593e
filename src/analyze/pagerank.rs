use std::hash::Hash;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analyze::build_link_graph;
use crate::collections::{ChainMap, ChainSet};
use crate::document::Document;
use crate::error::{Error, Result};

/// Knobs for the power iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageRankConfig {
    /// Damping factor: the probability mass a surfer follows an outbound
    /// link instead of teleporting. Must lie in `[0, 1)`.
    pub decay: f64,
    /// Convergence threshold on the largest per-vertex rank change between
    /// iterations. Must be positive.
    pub epsilon: f64,
    /// Iteration cap: a safety valve against non-convergence, not a
    /// cancellation mechanism.
    pub limit: usize,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        PageRankConfig {
            decay: 0.85,
            epsilon: 1e-4,
            limit: 100,
        }
    }
}

impl PageRankConfig {
    fn validate(&self) -> Result<()> {
        if !(0.0..1.0).contains(&self.decay) {
            return Err(Error::InvalidArgument(format!(
                "decay must be in [0, 1), got {}",
                self.decay
            )));
        }
        if !(self.epsilon > 0.0) {
            return Err(Error::InvalidArgument(format!(
                "epsilon must be positive, got {}",
                self.epsilon
            )));
        }
        Ok(())
    }
}

/// Importance scores for a document corpus, from the link structure alone.
///
/// Construction builds the link graph, runs the power iteration to a fixed
/// point, and keeps only the final rank table; the analyzer is read-only
/// afterward and therefore freely shareable across threads.
#[derive(Debug, Clone)]
pub struct PageRankAnalyzer<K> {
    ranks: ChainMap<K, f64>,
}

impl<K> PageRankAnalyzer<K>
where
    K: Eq + Hash + Clone,
{
    pub fn new(documents: &[Document<K>], config: PageRankConfig) -> Result<Self> {
        config.validate()?;
        let graph = build_link_graph(documents);
        let ranks = compute_ranks(&graph, config);
        Ok(PageRankAnalyzer { ranks })
    }

    /// The rank of `id`.
    ///
    /// Fails with [`Error::KeyNotFound`] if `id` was not a document of the
    /// corpus this analyzer was built from.
    pub fn rank(&self, id: &K) -> Result<f64> {
        self.ranks.get(id).map(|rank| *rank)
    }

    /// Number of ranked documents.
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

fn compute_ranks<K>(graph: &ChainMap<K, ChainSet<K>>, config: PageRankConfig) -> ChainMap<K, f64>
where
    K: Eq + Hash + Clone,
{
    let vertex_count = graph.len();
    let mut ranks = ChainMap::new();
    if vertex_count == 0 {
        return ranks;
    }

    let initial = 1.0 / vertex_count as f64;
    for (id, _) in graph.iter() {
        ranks.insert(id.clone(), initial);
    }

    for iteration in 0..config.limit {
        let updated = spread_ranks(graph, &ranks, config.decay);
        let max_delta = max_rank_delta(&ranks, &updated);
        debug!(iteration, max_delta, "page rank iteration");
        if max_delta < config.epsilon {
            return updated;
        }
        ranks = updated;
    }
    debug!(limit = config.limit, "page rank stopped at the iteration limit");
    ranks
}

/// One power-iteration step, into a fresh table.
///
/// Every vertex starts at the teleport share `(1 - d) / N` plus its share of
/// the dangling mass; each vertex with outbound links then splits
/// `d * rank / outDegree` across its neighbors. Dangling mass is accumulated
/// once and spread uniformly, which conserves total rank in O(N) instead of
/// a per-dangling-vertex pass.
fn spread_ranks<K>(
    graph: &ChainMap<K, ChainSet<K>>,
    ranks: &ChainMap<K, f64>,
    decay: f64,
) -> ChainMap<K, f64>
where
    K: Eq + Hash + Clone,
{
    let vertex_count = graph.len() as f64;

    let mut dangling_mass = 0.0;
    for (id, links) in graph.iter() {
        if links.is_empty() {
            if let Ok(&rank) = ranks.get(id) {
                dangling_mass += decay * rank;
            }
        }
    }

    let base = (1.0 - decay) / vertex_count + dangling_mass / vertex_count;
    let mut updated = ChainMap::new();
    for (id, _) in graph.iter() {
        updated.insert(id.clone(), base);
    }

    for (id, links) in graph.iter() {
        if links.is_empty() {
            continue;
        }
        let Ok(&rank) = ranks.get(id) else { continue };
        let share = decay * rank / links.len() as f64;
        for link in links.iter() {
            if let Ok(entry) = updated.get_mut(link) {
                *entry += share;
            }
        }
    }
    updated
}

fn max_rank_delta<K>(old: &ChainMap<K, f64>, new: &ChainMap<K, f64>) -> f64
where
    K: Eq + Hash + Clone,
{
    let mut max_delta = 0.0f64;
    for (id, &rank) in old.iter() {
        if let Ok(&updated) = new.get(id) {
            max_delta = max_delta.max((rank - updated).abs());
        }
    }
    max_delta
}
