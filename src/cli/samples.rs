//! The two eight-node sample graphs used by the demo binary.

use crate::graph::{Graph, GraphBuilder};
use crate::types::{GraphConfig, GraphResult, Weight};

/// Edges of the sparse sample, one-based node labels, no weights.
const BASIC_EDGES: [(usize, usize); 10] = [
    (1, 2),
    (1, 3),
    (2, 4),
    (3, 4),
    (4, 5),
    (5, 6),
    (5, 7),
    (5, 8),
    (6, 7),
    (7, 8),
];

/// Edges of the weighted sample, one-based node labels.
const WEIGHTED_EDGES: [(usize, usize, Weight); 15] = [
    (1, 2, 9),
    (1, 3, 5),
    (2, 1, 3),
    (2, 4, 18),
    (3, 4, 12),
    (4, 2, 2),
    (4, 8, 8),
    (5, 4, 9),
    (5, 6, 2),
    (5, 7, 5),
    (5, 8, 3),
    (6, 7, 1),
    (7, 5, 4),
    (7, 8, 6),
    (8, 5, 3),
];

/// Which sample graph to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    /// Ten links between nodes 1..=8, all with weight 0.
    Basic,
    /// Fifteen weighted links between nodes 1..=8.
    Weighted,
}

impl Sample {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "basic" | "1" => Some(Self::Basic),
            "weighted" | "2" => Some(Self::Weighted),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Weighted => "weighted",
        }
    }

    /// Build the sample with nodes labelled 1..=8 in insertion order.
    pub fn build(&self, config: GraphConfig) -> GraphResult<Graph<i64>> {
        let mut builder = GraphBuilder::with_config(config);
        builder.nodes(1..=8);
        match self {
            Self::Basic => {
                for (from, to) in BASIC_EDGES {
                    builder.link(from - 1, to - 1, 0);
                }
            }
            Self::Weighted => {
                for (from, to, weight) in WEIGHTED_EDGES {
                    builder.link(from - 1, to - 1, weight);
                }
            }
        }
        builder.build()
    }
}

impl std::fmt::Display for Sample {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
