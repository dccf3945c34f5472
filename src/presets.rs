//! The stock five-region puzzle and its scripted solution.

use petgraph::graphmap::UnGraphMap;

use crate::graph::AdjacencyGraph;
use crate::palette::Paint;
use crate::walkthrough::Walkthrough;

/// Borders of the sample map, in the order its regions are enumerated: `A`, `B`, `C`, `D`, `E`.
pub const SAMPLE_BORDERS: [(&str, &str); 6] = [
    ("A", "B"),
    ("A", "C"),
    ("B", "D"),
    ("B", "E"),
    ("C", "D"),
    ("D", "E"),
];

/// The five-region sample map: `A:[B,C]`, `B:[A,D,E]`, `C:[A,D]`, `D:[B,C,E]`, `E:[B,D]`.
pub fn sample_map() -> AdjacencyGraph<&'static str> {
    // the borders are fixed and valid, so they skip the builder's checks
    AdjacencyGraph { graph: UnGraphMap::from_edges(SAMPLE_BORDERS) }
}

/// The scripted demo solution for [`sample_map`]: `A` red, `B` blue, `C` yellow, `D` green, `E` red.
pub fn sample_walkthrough() -> Walkthrough<&'static str, Paint> {
    Walkthrough::new(vec![
        ("A", Paint::Red),
        ("B", Paint::Blue),
        ("C", Paint::Yellow),
        ("D", Paint::Green),
        ("E", Paint::Red),
    ])
}
