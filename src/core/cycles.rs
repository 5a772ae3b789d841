//! Pair graph and 3-cycle enumeration
//!
//! The graph is undirected: `ETH/BTC` and `BTC/ETH` are the same edge for
//! cycle purposes. Orientation is resolved later by the quote fetcher, which
//! falls back to the inverse market when the direct one is not listed.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::pairs::MarketPair;

// =============================================================================
// Dedup Policy
// =============================================================================

/// How equivalent triangles are collapsed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DedupPolicy {
    /// Drop only exact duplicates; rotations and reflections stay distinct
    #[default]
    Literal,
    /// One triangle per directed cycle (rotations collapsed)
    Rotation,
    /// One triangle per set of three currencies
    Cycle,
}

// =============================================================================
// Triangle
// =============================================================================

/// Three legs `A/B`, `B/C`, `C/A` over pairwise-distinct currencies
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triangle {
    pub legs: [MarketPair; 3],
}

impl Triangle {
    /// Build the triangle A→B→C→A. Callers guarantee distinct currencies.
    fn from_currencies(a: &str, b: &str, c: &str) -> Self {
        let leg = |x: &str, y: &str| MarketPair {
            base: x.to_string(),
            quote: y.to_string(),
        };
        Self {
            legs: [leg(a, b), leg(b, c), leg(c, a)],
        }
    }

    /// Currencies in traversal order `[A, B, C]`
    pub fn currencies(&self) -> [&str; 3] {
        [
            self.legs[0].base.as_str(),
            self.legs[1].base.as_str(),
            self.legs[2].base.as_str(),
        ]
    }

    /// Same value for every rotation of the same directed cycle
    pub fn rotation_key(&self) -> [String; 3] {
        let c = self.currencies();
        let start = (0..3).min_by_key(|&i| c[i]).unwrap_or(0);
        [0, 1, 2].map(|offset| c[(start + offset) % 3].to_string())
    }

    /// Same value for every triangle over the same three currencies
    pub fn cycle_key(&self) -> [String; 3] {
        let mut key = self.currencies().map(str::to_string);
        key.sort();
        key
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} -> {}", self.legs[0], self.legs[1], self.legs[2])
    }
}

// =============================================================================
// Pair Graph
// =============================================================================

/// Undirected currency adjacency built from market pairs
#[derive(Debug, Clone, Default)]
pub struct PairGraph {
    adjacency: BTreeMap<String, BTreeSet<String>>,
}

impl PairGraph {
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = &'a MarketPair>,
    {
        let mut adjacency: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for pair in pairs {
            adjacency
                .entry(pair.base.clone())
                .or_default()
                .insert(pair.quote.clone());
            adjacency
                .entry(pair.quote.clone())
                .or_default()
                .insert(pair.base.clone());
        }
        Self { adjacency }
    }

    pub fn currency_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum::<usize>() / 2
    }

    fn connected(&self, x: &str, y: &str) -> bool {
        self.adjacency.get(x).is_some_and(|adj| adj.contains(y))
    }

    /// Enumerate 3-cycles A→B→C→A in sorted order, collapsed per `policy`
    pub fn triangles(&self, policy: DedupPolicy) -> Vec<Triangle> {
        let mut seen: HashSet<[String; 3]> = HashSet::new();
        let mut triangles = Vec::new();

        for (a, adj_a) in &self.adjacency {
            for b in adj_a {
                let Some(adj_b) = self.adjacency.get(b) else {
                    continue;
                };
                for c in adj_b {
                    if c == a || !self.connected(c, a) {
                        continue;
                    }
                    let triangle = Triangle::from_currencies(a, b, c);
                    let key = match policy {
                        DedupPolicy::Literal => triangle.currencies().map(str::to_string),
                        DedupPolicy::Rotation => triangle.rotation_key(),
                        DedupPolicy::Cycle => triangle.cycle_key(),
                    };
                    if seen.insert(key) {
                        triangles.push(triangle);
                    }
                }
            }
        }

        triangles
    }
}

/// Build the graph for `pairs` and enumerate its triangles
pub fn find_triangles<'a, I>(pairs: I, policy: DedupPolicy) -> Vec<Triangle>
where
    I: IntoIterator<Item = &'a MarketPair>,
{
    PairGraph::from_pairs(pairs).triangles(policy)
}
