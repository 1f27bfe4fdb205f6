//! Step-by-step playback of a previewed operation
//!
//! Holds a frozen step log plus a cursor, and applies the operation to the
//! engine exactly once when the cursor first reaches the mutating step:
//! the `appearing` insert step, or the first `delete` step. Rewinding
//! moves the cursor only; the tree is never un-committed.

use tracing::debug;

use crate::key::TreeKey;
use crate::ops::Operation;
use crate::step::{Step, StepSequence};
use crate::{BstEngine, EngineError};

/// Cursor over one operation's step log
#[derive(Debug, Clone)]
pub struct Playback<K> {
    operation: Operation,
    key: Option<K>,
    steps: StepSequence<K>,
    /// Index of the current step; `None` before the first
    cursor: Option<usize>,
    trigger: Option<usize>,
    committed: bool,
}

impl<K: TreeKey> Playback<K> {
    /// Preview `op` and position the cursor before the first step
    pub fn start(
        engine: &BstEngine<K>,
        op: Operation,
        key: Option<K>,
    ) -> Result<Self, EngineError> {
        let steps = engine.preview(op, key.clone())?;
        let trigger = if op.is_mutating() {
            steps.iter().position(Step::is_commit_trigger)
        } else {
            None
        };
        Ok(Self {
            operation: op,
            key,
            steps,
            cursor: None,
            trigger,
            committed: false,
        })
    }

    /// Move to the next step, committing if it is the mutating one
    ///
    /// Returns `None` once the log is exhausted.
    pub fn advance(&mut self, engine: &mut BstEngine<K>) -> Result<Option<&Step<K>>, EngineError> {
        let next = self.cursor.map_or(0, |index| index + 1);
        if next >= self.steps.len() {
            return Ok(None);
        }
        self.cursor = Some(next);

        if !self.committed && self.trigger == Some(next) {
            engine.commit(self.operation, self.key.clone())?;
            self.committed = true;
            debug!(operation = %self.operation, step = next, "playback committed");
        }
        Ok(self.steps.get(next))
    }

    /// Play every remaining step
    pub fn finish(&mut self, engine: &mut BstEngine<K>) -> Result<(), EngineError> {
        while self.advance(engine)?.is_some() {}
        Ok(())
    }

    /// Move back one step
    pub fn rewind(&mut self) -> Option<&Step<K>> {
        self.cursor = match self.cursor {
            Some(0) | None => None,
            Some(index) => Some(index - 1),
        };
        self.current()
    }

    /// Back to before the first step
    pub fn reset(&mut self) {
        self.cursor = None;
    }

    /// Step under the cursor
    pub fn current(&self) -> Option<&Step<K>> {
        self.cursor.and_then(|index| self.steps.get(index))
    }

    /// Index of the step under the cursor
    pub fn position(&self) -> Option<usize> {
        self.cursor
    }

    /// Whether the last step has been reached
    pub fn is_finished(&self) -> bool {
        match self.cursor {
            Some(index) => index + 1 >= self.steps.len(),
            None => self.steps.is_empty(),
        }
    }

    /// Whether the operation has been applied to the engine
    pub fn is_committed(&self) -> bool {
        self.committed
    }

    /// Operation being played
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// The full log
    pub fn steps(&self) -> &StepSequence<K> {
        &self.steps
    }
}
