use crate::engine::Verdict;
use crate::graph::{Color, Region};
use crate::model::{GraphModel, ModelError};

/// An ordered list of `(region, color)` moves, such as a scripted demo solution or a run of greedy hints.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Walkthrough<R, C> {
    steps: Vec<(R, C)>,
}

impl<R, C> Walkthrough<R, C>
where
    R: Region,
    C: Color,
{
    /// A walkthrough playing `steps` in order.
    pub fn new(steps: Vec<(R, C)>) -> Self {
        Self { steps }
    }

    /// Record the moves [`suggest_hint`](crate::ConflictEngine::suggest_hint) makes, one after another, starting from `model`.
    ///
    /// `model` itself is not touched. Recording stops at the first [`NoHintAvailable`](crate::Hint::NoHintAvailable),
    /// which may leave regions unpainted when the greedy rule runs into a dead end.
    /// Fails with [`UnknownRegion`](ModelError::UnknownRegion) if a hint names a region the model cannot paint.
    pub fn greedy(model: &GraphModel<R, C>, palette: &[C]) -> Result<Self, ModelError<R>> {
        let mut scratch = model.clone();
        let mut steps = Vec::with_capacity(model.graph().len() - model.assigned_count());

        loop {
            let hint = scratch.engine().suggest_hint(palette);
            let Some((region, color)) = hint.into_pair() else {
                break;
            };

            scratch.assign(region, color.clone())?;
            steps.push((region, color));
        }

        tracing::debug!(steps = steps.len(), complete = scratch.is_complete(), "recorded greedy walkthrough");
        Ok(Self::new(steps))
    }

    /// The moves, in order.
    pub fn steps(&self) -> &[(R, C)] {
        &self.steps
    }

    /// Number of moves.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether there are no moves at all.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Play every move onto `model`, judging the puzzle after each one.
    ///
    /// Returns one [`Verdict`] per move. A move naming a region not on the map stops the replay with
    /// [`UnknownRegion`](ModelError::UnknownRegion); the moves before it stay painted.
    pub fn replay(&self, model: &mut GraphModel<R, C>) -> Result<Vec<Verdict>, ModelError<R>> {
        let mut verdicts = Vec::with_capacity(self.steps.len());

        for (index, (region, color)) in self.steps.iter().enumerate() {
            model.assign(*region, color.clone())?;
            let verdict = model.engine().evaluate();
            tracing::debug!(step = index + 1, ?region, ?color, %verdict, "replayed step");
            verdicts.push(verdict);
        }

        Ok(verdicts)
    }
}
