use std::fmt::Debug;
use std::hash::Hash;

use petgraph::graphmap::{NodeTrait, UnGraphMap};
use unordered_pair::UnorderedPair;

use crate::builder::BuilderInvalidReason;

/// Constraint on region identifiers: anything `petgraph` can key a [`GraphMap`](petgraph::graphmap::GraphMap) by which also prints for diagnostics.
///
/// Short strings, small integers and grid [`Location`](crate::Location)s all qualify.
pub trait Region: NodeTrait + Debug {}

impl<R> Region for R where R: NodeTrait + Debug {}

/// Constraint on colors. Colors mean nothing beyond equality.
pub trait Color: Clone + Eq + Hash + Debug {}

impl<C> Color for C where C: Clone + Eq + Hash + Debug {}

/// The undirected border relation between the regions of a map.
///
/// Adjacency is symmetric by construction, there are no self-borders, and the graph is never mutated once built.
/// Regions are remembered in the order they were first added; [`regions`](Self::regions) always enumerates in that order.
///
/// Build with [`from_edges`](Self::from_edges) or a [`Builder`](crate::builder::Builder) such as
/// [`EdgeListBuilder`](crate::builder::EdgeListBuilder) or [`SquareGridBuilder`](crate::builder::SquareGridBuilder).
#[derive(Clone, Debug)]
pub struct AdjacencyGraph<R>
where
    R: Region,
{
    pub(crate) graph: UnGraphMap<R, ()>,
}

impl<R> AdjacencyGraph<R>
where
    R: Region,
{
    /// Build a graph from an ordered list of borders.
    ///
    /// Fails on the first repeated border (in either orientation) with [`DuplicateEdge`](BuilderInvalidReason::DuplicateEdge)
    /// and on the first region bordering itself with [`SelfLoop`](BuilderInvalidReason::SelfLoop).
    pub fn from_edges<I>(edges: I) -> Result<Self, BuilderInvalidReason<R>>
    where
        I: IntoIterator<Item = (R, R)>,
    {
        let mut graph = UnGraphMap::new();
        for (a, b) in edges {
            insert_edge(&mut graph, a, b)?;
        }

        Ok(Self { graph })
    }

    /// All regions, in construction order.
    pub fn regions(&self) -> impl Iterator<Item = R> + '_ {
        self.graph.nodes()
    }

    /// The regions bordering `region`. Empty if `region` is not on the map.
    pub fn neighbors(&self, region: R) -> impl Iterator<Item = R> + '_ {
        self.graph.neighbors(region)
    }

    /// Every border, once each, in construction order.
    pub fn edges(&self) -> impl Iterator<Item = UnorderedPair<R>> + '_ {
        self.graph.all_edges().map(|(a, b, _)| UnorderedPair(a, b))
    }

    /// Whether `region` is on the map.
    pub fn contains(&self, region: R) -> bool {
        self.graph.contains_node(region)
    }

    /// Whether `a` and `b` share a border.
    pub fn are_adjacent(&self, a: R, b: R) -> bool {
        self.graph.contains_edge(a, b)
    }

    /// Number of regions.
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    /// Whether the map has no regions at all.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Number of borders.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

pub(crate) fn insert_edge<R: Region>(graph: &mut UnGraphMap<R, ()>, a: R, b: R) -> Result<(), BuilderInvalidReason<R>> {
    if a == b {
        return Err(BuilderInvalidReason::SelfLoop(a));
    }

    if graph.contains_edge(a, b) {
        return Err(BuilderInvalidReason::DuplicateEdge(a, b));
    }

    graph.add_edge(a, b, ());
    Ok(())
}
