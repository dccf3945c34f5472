//! Grid geometry: step directions between cells and plain-text dumps of grid maps.

use std::hash::Hash;

use ndarray::Array2;
use strum::VariantArray;

use crate::location::{Dimension, Location};
use crate::model::GraphModel;
use crate::Color;

/// Functionality that must be implemented for any grid cell shape.
///
/// [`SquareStep`] is the built-in implementation.
pub trait Step: Sized + Copy + VariantArray + Eq + Hash + Ord {
    /// Attempt the step from `location` in the direction specified by `self` and return the resultant [`Location`].
    ///
    /// The result may lie outside the grid; callers check bounds.
    fn attempt_from(&self, location: Location) -> Location;
    /// The static array of all "forward" directions.
    ///
    /// Forward directions are those which, upon stepping from one location to another, cause the destination to come later in reading order.
    /// Adding an edge in every forward direction from every cell covers each orthogonal pair exactly once.
    const FORWARD_VARIANTS: &'static [Self];
    /// Determine the direction from `a` to `b`, or [`None`] if `b` is not one step away from `a`.
    fn direction_to(a: Location, b: Location) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|dir| dir.attempt_from(a) == b)
    }
}

/// The square cell shape: each cell borders its four orthogonal neighbours.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum SquareStep {
    /// Towards row 0.
    Up,
    /// Away from row 0.
    Down,
    /// Towards column 0.
    Left,
    /// Away from column 0.
    Right,
}

impl Step for SquareStep {
    fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::Up => location.offset_by((0, -1)),
            Self::Down => location.offset_by((0, 1)),
            Self::Left => location.offset_by((-1, 0)),
            Self::Right => location.offset_by((1, 0)),
        }
    }

    const FORWARD_VARIANTS: &'static [Self] = &[Self::Right, Self::Down];
}

/// Dump the grid assignment held by `model` as text, one line per row.
///
/// Assigned cells print as `glyph(color)`, unassigned cells as `.`, and holes (locations not on the map) as a space.
pub fn render_grid<C, F>(dims: (Dimension, Dimension), model: &GraphModel<Location, C>, glyph: F) -> String
where
    C: Color,
    F: Fn(&C) -> char,
{
    let cells = Array2::from_shape_fn((dims.1.get(), dims.0.get()), |index| {
        match model.color_of(Location::from(index)) {
            Ok(Some(color)) => glyph(color),
            Ok(None) => '.',
            Err(_) => ' ',
        }
    });

    print(cells)
}

fn print(grid: Array2<char>) -> String {
    let mut out = String::with_capacity(grid.nrows() * (grid.ncols() + 1));

    for row in grid.rows() {
        for col in row {
            out.push(*col);
        }
        out.push('\n');
    }

    out
}
