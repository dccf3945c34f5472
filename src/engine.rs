use std::collections::{BTreeSet, HashMap, HashSet};

use itertools::Itertools;
use strum::{Display, IntoStaticStr};
use unordered_pair::UnorderedPair;

use crate::graph::{AdjacencyGraph, Color, Region};
use crate::model::{GraphModel, ModelError};

/// Overall state of a puzzle, the single source of truth for win/lose/continue.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Verdict {
    /// Every region is painted and no two neighbours share a color.
    Complete,
    /// At least one pair of neighbours shares a color, however many regions are painted.
    Conflict,
    /// Some region is unpainted and there is no conflict yet.
    Incomplete,
}

/// Outcome of asking for a hint.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Hint<R, C> {
    /// Paint `region` with `color`.
    Paint {
        /// The first unpainted region in construction order.
        region: R,
        /// The first palette color none of its painted neighbours use.
        color: C,
    },
    /// Every region is painted, or the first unpainted region has no free color.
    NoHintAvailable,
}

impl<R, C> Hint<R, C> {
    /// The suggested `(region, color)`, if any.
    pub fn into_pair(self) -> Option<(R, C)> {
        match self {
            Hint::Paint { region, color } => Some((region, color)),
            Hint::NoHintAvailable => None,
        }
    }
}

/// Derives conflicts, verdicts and hints from a map and an assignment without modifying either.
///
/// Every answer is a pure function of the borrowed state: asking twice without painting in between gives the same answer.
pub struct ConflictEngine<'a, R, C>
where
    R: Region,
    C: Color,
{
    graph: &'a AdjacencyGraph<R>,
    assignment: &'a HashMap<R, C>,
}

impl<'a, R, C> From<&'a GraphModel<R, C>> for ConflictEngine<'a, R, C>
where
    R: Region,
    C: Color,
{
    fn from(model: &'a GraphModel<R, C>) -> Self {
        Self::new(model.graph(), model.assignment())
    }
}

impl<'a, R, C> ConflictEngine<'a, R, C>
where
    R: Region,
    C: Color,
{
    /// Read `assignment` against `graph`. Entries for regions not on the map are ignored.
    pub fn new(graph: &'a AdjacencyGraph<R>, assignment: &'a HashMap<R, C>) -> Self {
        Self { graph, assignment }
    }

    #[inline]
    fn same_color(&self, pair: &UnorderedPair<R>) -> bool {
        match (self.assignment.get(&pair.0), self.assignment.get(&pair.1)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    fn used_by_neighbors(&self, region: R) -> HashSet<&'a C> {
        let assignment = self.assignment;
        self.graph.neighbors(region)
            .filter_map(|neighbor| assignment.get(&neighbor))
            .collect()
    }

    /// Every border whose two regions are painted the same color, in construction order.
    pub fn conflicting_pairs(&self) -> Vec<UnorderedPair<R>> {
        self.graph.edges()
            .filter(|pair| self.same_color(pair))
            .collect_vec()
    }

    /// Every region painted the same color as at least one of its neighbours.
    ///
    /// A region appears exactly when some neighbour with the same color appears too.
    pub fn conflicts(&self) -> BTreeSet<R> {
        let conflicts: BTreeSet<R> = self.graph.edges()
            .filter(|pair| self.same_color(pair))
            .flat_map(|UnorderedPair(a, b)| [a, b])
            .collect();

        tracing::trace!(count = conflicts.len(), "recomputed conflicts");
        conflicts
    }

    /// Whether every region on the map is painted.
    pub fn is_complete(&self) -> bool {
        self.graph.regions().all(|region| self.assignment.contains_key(&region))
    }

    /// Judge the puzzle. Never [`Complete`](Verdict::Complete) while a region is unpainted or any conflict exists.
    pub fn evaluate(&self) -> Verdict {
        if self.graph.edges().any(|pair| self.same_color(&pair)) {
            Verdict::Conflict
        } else if self.is_complete() {
            Verdict::Complete
        } else {
            Verdict::Incomplete
        }
    }

    /// The colors of `palette`, in palette order, that no painted neighbour of `region` uses.
    pub fn legal_colors<'p>(&self, region: R, palette: &'p [C]) -> Result<Vec<&'p C>, ModelError<R>> {
        if !self.graph.contains(region) {
            return Err(ModelError::UnknownRegion(region));
        }

        let used = self.used_by_neighbors(region);
        Ok(palette.iter()
            .filter(|color| !used.contains(*color))
            .collect_vec())
    }

    /// Suggest the next move greedily.
    ///
    /// Picks the first unpainted region in construction order, then the first color in `palette` that none of its painted neighbours use.
    /// If that region has no free color, no other region is considered.
    /// Nothing is searched ahead, so following hints can paint the puzzle into a corner.
    pub fn suggest_hint(&self, palette: &[C]) -> Hint<R, C> {
        let Some(region) = self.graph.regions().find(|region| !self.assignment.contains_key(region)) else {
            tracing::trace!("no unpainted region left to hint");
            return Hint::NoHintAvailable;
        };

        let used = self.used_by_neighbors(region);
        match palette.iter().find(|color| !used.contains(*color)) {
            Some(color) => {
                tracing::debug!(?region, ?color, "suggesting hint");
                Hint::Paint { region, color: color.clone() }
            }
            None => {
                tracing::debug!(?region, "every palette color is taken by a neighbour");
                Hint::NoHintAvailable
            }
        }
    }
}
