#![warn(missing_docs)]

//! # `vermilion`
//!
//! The rules engine behind a map-coloring puzzle: paint every region so that no two bordering regions share a color.
//! Build a map with [`AdjacencyGraph::from_edges`] or a builder from the [`builder`] module, wrap it in a [`GraphModel`],
//! paint regions with [`assign`](GraphModel::assign), and ask a [`ConflictEngine`] for the [`Verdict`], the regions in conflict, or a [`Hint`].
//!
//! Regions can be anything small and copyable, such as `&'static str` names or grid [`Location`]s; see [`Region`].
//! Colors only need equality; see [`Color`]. [`Paint`] is a ready-made four-color palette.
//!
//! # Hints
//! Hints are greedy: take the first unpainted region in the order the map was built, and the first palette color none of its painted neighbours use.
//! Nothing is searched ahead and nothing is undone, so a run of hints may paint the puzzle into a corner.
//! [`Walkthrough::greedy`] records such a run; [`presets::sample_walkthrough`] is the scripted demo solution for [`presets::sample_map`].
//!
//! # Browser use
//! With the `wasm` feature (on by default), `MapPuzzle` wraps all of the above behind string names for a JavaScript page.
//! The page stays in charge of drawing, animation, storage and navigation.

pub use builder::Builder;
pub use engine::{ConflictEngine, Hint, Verdict};
pub use graph::{AdjacencyGraph, Color, Region};
pub use location::{Dimension, Location};
pub use model::{GraphModel, ModelError};
pub use palette::Paint;
pub use walkthrough::Walkthrough;
#[cfg(feature = "wasm")]
pub use wasm::MapPuzzle;

pub mod builder;
pub(crate) mod engine;
pub(crate) mod graph;
pub(crate) mod location;
pub(crate) mod model;
pub(crate) mod palette;
pub mod presets;
pub mod shape;
pub(crate) mod walkthrough;
#[cfg(feature = "wasm")]
pub(crate) mod wasm;
