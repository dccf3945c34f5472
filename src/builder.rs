//! Builders for [`AdjacencyGraph`]s: hand-specified border lists and rectangular grids.

use std::collections::HashSet;

use itertools::Itertools;
use ndarray::Array2;
use petgraph::graphmap::UnGraphMap;
use unordered_pair::UnorderedPair;

use crate::graph::{insert_edge, AdjacencyGraph, Region};
use crate::location::{Dimension, Location};
use crate::shape::{SquareStep, Step};

/// Reasons a builder may become invalid while building.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuilderInvalidReason<R> {
    /// The same border was given twice, in either orientation.
    #[error("border between {0:?} and {1:?} was specified more than once")]
    DuplicateEdge(R, R),
    /// A region was given a border with itself.
    #[error("region {0:?} cannot border itself")]
    SelfLoop(R),
    /// A feature like a hole or a wall was placed outside the bounds of a grid.
    #[error("{0:?} lies outside the grid")]
    FeatureOutOfBounds(R),
}

/// Functionality all builders implement, parametrised over the region type `R` of the resulting map.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
/// Once a builder is invalid, every further mutation is ignored.
pub trait Builder<R: Region>: Clone {
    /// Check the validity of this builder.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason<R>>>;
    /// Convert the state of this builder into an [`AdjacencyGraph`].
    /// If the builder is invalid for any reason, a reference to a [`Vec`] of [`BuilderInvalidReason`] will indicate why.
    fn build(&self) -> Result<AdjacencyGraph<R>, &Vec<BuilderInvalidReason<R>>>;
}

/// A builder for hand-specified maps, taking borders one at a time.
///
/// Regions are enumerated in the order they are first mentioned, whether through [`add_region`](Self::add_region) or [`add_edge`](Self::add_edge).
#[derive(Clone, Debug)]
pub struct EdgeListBuilder<R>
where
    R: Region,
{
    graph: UnGraphMap<R, ()>,
    invalid_reasons: Vec<BuilderInvalidReason<R>>,
}

impl<R: Region> Default for EdgeListBuilder<R> {
    fn default() -> Self {
        Self {
            graph: UnGraphMap::new(),
            invalid_reasons: Default::default(),
        }
    }
}

impl<R: Region> EdgeListBuilder<R> {
    /// An empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a region, which may have no borders at all. Adding a region twice does nothing.
    ///
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn add_region(&mut self, region: R) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        self.graph.add_node(region);
        self
    }

    /// Add a border between `a` and `b`, adding either region if not yet present.
    ///
    /// May cause the builder to enter a [`DuplicateEdge`](BuilderInvalidReason::DuplicateEdge) or [`SelfLoop`](BuilderInvalidReason::SelfLoop) invalid state.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn add_edge(&mut self, a: R, b: R) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if let Err(reason) = insert_edge(&mut self.graph, a, b) {
            tracing::warn!(%reason, "edge list builder is now invalid");
            self.invalid_reasons.push(reason);
        }

        self
    }

    /// Shorthand for multiple calls to [`Self::add_edge`], with the same conditions.
    pub fn add_edges<I>(&mut self, edges: I) -> &mut Self
    where
        I: IntoIterator<Item = (R, R)>,
    {
        for (a, b) in edges {
            self.add_edge(a, b);
        }

        self
    }
}

impl<R: Region> Builder<R> for EdgeListBuilder<R> {
    fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason<R>>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    fn build(&self) -> Result<AdjacencyGraph<R>, &Vec<BuilderInvalidReason<R>>> {
        if !self.invalid_reasons.is_empty() {
            return Err(&self.invalid_reasons);
        }

        Ok(AdjacencyGraph { graph: self.graph.clone() })
    }
}

/// A builder for rectangular maps of square cells, where every cell borders its four orthogonal neighbours.
///
/// Cells are enumerated in reading order: row by row, left to right.
#[derive(Clone, Debug)]
pub struct SquareGridBuilder {
    // width, height
    dims: (Dimension, Dimension),
    // false for holes
    present: Array2<bool>,
    // walls
    edge_blacklist: HashSet<UnorderedPair<Location>>,
    invalid_reasons: Vec<BuilderInvalidReason<Location>>,
}

impl SquareGridBuilder {
    /// Construct a new builder with the specified dimensions, specified in `(x, y)` order.
    pub fn with_dims(dims: (Dimension, Dimension)) -> Self {
        Self {
            dims,
            present: Array2::from_elem((dims.1.get(), dims.0.get()), true),
            edge_blacklist: Default::default(),
            invalid_reasons: Default::default(),
        }
    }

    /// The `(width, height)` this builder was created with.
    pub fn dims(&self) -> (Dimension, Dimension) {
        self.dims
    }

    fn check_bounds(&mut self, location: Location) -> bool {
        if location.within(self.dims) {
            return true;
        }

        let reason = BuilderInvalidReason::FeatureOutOfBounds(location);
        tracing::warn!(%reason, "grid builder is now invalid");
        self.invalid_reasons.push(reason);
        false
    }

    /// Drop a location from the map, leaving a hole. Any border touching it goes too.
    ///
    /// May cause the builder to enter a [`FeatureOutOfBounds`](BuilderInvalidReason::FeatureOutOfBounds) invalid state if `location` is out of bounds.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn drop_location(&mut self, location: Location) -> &mut Self {
        if !self.invalid_reasons.is_empty() || !self.check_bounds(location) {
            return self;
        }

        if let Some(cell) = self.present.get_mut(location.as_index()) {
            *cell = false;
        }

        self
    }

    /// Disconnect the two `locations`, i.e. place a wall between them so they no longer border each other.
    ///
    /// If the two locations are not orthogonal neighbours, this function does nothing and does not invalidate the builder.
    ///
    /// May cause the builder to enter a [`FeatureOutOfBounds`](BuilderInvalidReason::FeatureOutOfBounds) invalid state if either location is out of bounds.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn disconnect(&mut self, locations: UnorderedPair<Location>) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        for location in [locations.0, locations.1] {
            if !self.check_bounds(location) {
                return self;
            }
        }

        if SquareStep::direction_to(locations.0, locations.1).is_none() {
            return self;
        }

        self.edge_blacklist.insert(locations);
        self
    }

    /// Shorthand for multiple calls to [`Self::disconnect`].
    ///
    /// Disconnect cells neighbouring `location` in each of `directions`; directions leading off the grid are skipped.
    pub fn disconnect_around(&mut self, location: Location, directions: Vec<SquareStep>) -> &mut Self {
        for direction in directions.into_iter().unique() {
            let other = direction.attempt_from(location);
            if other.within(self.dims) {
                self.disconnect(UnorderedPair::from((location, other)));
            }
        }

        self
    }
}

impl Builder<Location> for SquareGridBuilder {
    fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason<Location>>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    fn build(&self) -> Result<AdjacencyGraph<Location>, &Vec<BuilderInvalidReason<Location>>> {
        if !self.invalid_reasons.is_empty() {
            return Err(&self.invalid_reasons);
        }

        let (width, height) = (self.dims.0.get(), self.dims.1.get());
        let mut graph = UnGraphMap::with_capacity(
            width * height,
            // "horizontal" edges
            (width - 1) * height
                // "vertical" edges
                + (height - 1) * width,
        );

        // indexed_iter walks rows in order, so regions land in reading order
        for (index, present) in self.present.indexed_iter() {
            if *present {
                graph.add_node(Location::from(index));
            }
        }

        for location in graph.nodes().collect_vec() {
            // forward steps only, so each pair is visited once
            for direction in SquareStep::FORWARD_VARIANTS {
                let other = direction.attempt_from(location);
                if graph.contains_node(other) && !self.edge_blacklist.contains(&UnorderedPair(location, other)) {
                    graph.add_edge(location, other, ());
                }
            }
        }

        Ok(AdjacencyGraph { graph })
    }
}
