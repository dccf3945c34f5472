use std::error::Error;
use std::num::NonZero;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use vermilion::builder::{Builder, SquareGridBuilder};
use vermilion::presets::{sample_map, sample_walkthrough};
use vermilion::shape::{render_grid, SquareStep};
use vermilion::{GraphModel, Location, Paint, Verdict, Walkthrough};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // the scripted auto-solve on the five-region map
    let mut model = GraphModel::new(sample_map());
    let walkthrough = sample_walkthrough();
    let verdicts = walkthrough.replay(&mut model)?;
    for ((region, paint), verdict) in walkthrough.steps().iter().zip(&verdicts) {
        info!(%region, %paint, %verdict, "auto-solve step");
    }
    if verdicts.last() != Some(&Verdict::Complete) {
        warn!("scripted solution left the map unfinished");
    }

    // greedy hints on a 4x4 grid with a hole in it and a wall
    let side = NonZero::new(4).ok_or("grid side must be nonzero")?;
    let mut builder = SquareGridBuilder::with_dims((side, side));
    builder.drop_location(Location(1, 1))
        .disconnect_around(Location(2, 2), vec![SquareStep::Right, SquareStep::Down]);
    let graph = builder.build().map_err(|reasons| format!("grid is invalid: {reasons:?}"))?;

    let mut grid = GraphModel::new(graph);
    let greedy = Walkthrough::greedy(&grid, Paint::palette())?;
    greedy.replay(&mut grid)?;
    info!(steps = greedy.len(), verdict = %grid.engine().evaluate(), "greedy fill");

    print!("{}", render_grid(builder.dims(), &grid, Paint::glyph));
    Ok(())
}
