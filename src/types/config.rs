//! Construction-time graph configuration.

/// Flags fixed for the lifetime of a graph.
///
/// The default is an undirected, unweighted graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GraphConfig {
    /// Edges are one-way when set; otherwise every edge is mirrored.
    pub directed: bool,
    /// Edge weights are stored when set; otherwise every weight reads as 0.
    pub weighted: bool,
}

impl GraphConfig {
    pub fn new(directed: bool, weighted: bool) -> Self {
        Self { directed, weighted }
    }

    /// Short human-readable label, e.g. "directed, weighted".
    pub fn describe(&self) -> &'static str {
        match (self.directed, self.weighted) {
            (true, true) => "directed, weighted",
            (true, false) => "directed, unweighted",
            (false, true) => "undirected, weighted",
            (false, false) => "undirected, unweighted",
        }
    }
}

impl std::fmt::Display for GraphConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}
