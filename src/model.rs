use std::collections::HashMap;

use crate::engine::ConflictEngine;
use crate::graph::{AdjacencyGraph, Color, Region};

/// Reasons an operation on a [`GraphModel`] may fail.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ModelError<R> {
    /// The operation named a region which is not on the map. The model was left untouched.
    #[error("region {0:?} is not on the map")]
    UnknownRegion(R),
}

/// A map together with the colors currently painted onto it.
///
/// The model is the sole owner of the assignment; it changes only through [`assign`](Self::assign),
/// [`clear`](Self::clear) and [`clear_all`](Self::clear_all), and only ever holds regions that are on the map.
#[derive(Clone, Debug)]
pub struct GraphModel<R, C>
where
    R: Region,
    C: Color,
{
    graph: AdjacencyGraph<R>,
    assignment: HashMap<R, C>,
}

impl<R, C> GraphModel<R, C>
where
    R: Region,
    C: Color,
{
    /// Start a puzzle on `graph` with nothing painted.
    pub fn new(graph: AdjacencyGraph<R>) -> Self {
        Self {
            assignment: HashMap::with_capacity(graph.len()),
            graph,
        }
    }

    fn ensure_known(&self, region: R) -> Result<(), ModelError<R>> {
        if self.graph.contains(region) {
            Ok(())
        } else {
            Err(ModelError::UnknownRegion(region))
        }
    }

    /// Paint `region` with `color`, returning whatever color it held before.
    pub fn assign(&mut self, region: R, color: C) -> Result<Option<C>, ModelError<R>> {
        self.ensure_known(region)?;

        tracing::debug!(?region, ?color, "painting region");
        Ok(self.assignment.insert(region, color))
    }

    /// Remove any color from `region`, returning it. Clearing an unpainted region is a no-op.
    pub fn clear(&mut self, region: R) -> Result<Option<C>, ModelError<R>> {
        self.ensure_known(region)?;

        let previous = self.assignment.remove(&region);
        if previous.is_some() {
            tracing::debug!(?region, "cleared region");
        }

        Ok(previous)
    }

    /// Remove every color.
    pub fn clear_all(&mut self) {
        tracing::debug!(cleared = self.assignment.len(), "clearing all regions");
        self.assignment.clear();
    }

    /// Whether every region on the map is painted. Always true for an empty map.
    pub fn is_complete(&self) -> bool {
        // only regions on the map are ever inserted
        self.assignment.len() == self.graph.len()
    }

    /// The color of `region`, or `None` if it is unpainted.
    pub fn color_of(&self, region: R) -> Result<Option<&C>, ModelError<R>> {
        self.ensure_known(region)?;

        Ok(self.assignment.get(&region))
    }

    /// The map this puzzle is played on.
    pub fn graph(&self) -> &AdjacencyGraph<R> {
        &self.graph
    }

    /// The current colors, keyed by region.
    pub fn assignment(&self) -> &HashMap<R, C> {
        &self.assignment
    }

    /// How many regions are painted.
    pub fn assigned_count(&self) -> usize {
        self.assignment.len()
    }

    /// A [`ConflictEngine`] reading this model's current state.
    pub fn engine(&self) -> ConflictEngine<'_, R, C> {
        ConflictEngine::from(self)
    }
}
