//! Frozen step logs and the recorder that builds them

use std::ops::Index;
use std::slice;
use std::sync::Arc;

use super::{Step, StepKind};

/// Append-only builder an operation writes its steps into
#[derive(Debug)]
pub struct StepRecorder<K> {
    steps: Vec<Step<K>>,
}

impl<K> StepRecorder<K> {
    /// Empty recorder
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a step
    #[inline]
    pub fn push(&mut self, step: Step<K>) {
        self.steps.push(step);
    }

    /// Steps recorded so far
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Freeze into an immutable sequence
    pub fn finish(self) -> StepSequence<K> {
        StepSequence {
            steps: Arc::from(self.steps),
        }
    }
}

impl<K> Default for StepRecorder<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable, replayable step log of one operation invocation
///
/// Cloning shares the underlying buffer, so a playback driver and a
/// renderer can hold the same log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSequence<K> {
    steps: Arc<[Step<K>]>,
}

impl<K> StepSequence<K> {
    /// Number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True for an empty log (traversal of an empty tree)
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step at `index`
    pub fn get(&self, index: usize) -> Option<&Step<K>> {
        self.steps.get(index)
    }

    /// First step
    pub fn first(&self) -> Option<&Step<K>> {
        self.steps.first()
    }

    /// Last step, i.e. the outcome
    pub fn last(&self) -> Option<&Step<K>> {
        self.steps.last()
    }

    /// Iterate in execution order
    pub fn iter(&self) -> slice::Iter<'_, Step<K>> {
        self.steps.iter()
    }

    /// Borrow as a slice
    pub fn as_slice(&self) -> &[Step<K>] {
        &self.steps
    }

    /// Step kinds in order
    pub fn kinds(&self) -> Vec<StepKind> {
        self.steps.iter().map(|step| step.kind).collect()
    }

    /// How many steps have the given kind
    pub fn count_kind(&self, kind: StepKind) -> usize {
        self.steps.iter().filter(|step| step.kind == kind).count()
    }

    /// Whether any step has the given kind
    pub fn contains_kind(&self, kind: StepKind) -> bool {
        self.steps.iter().any(|step| step.kind == kind)
    }

    /// Keys carried by steps of the given kind, in order
    pub fn values_of(&self, kind: StepKind) -> Vec<&K> {
        self.steps
            .iter()
            .filter(|step| step.kind == kind)
            .filter_map(|step| step.node_value.as_ref())
            .collect()
    }
}

impl<K> Index<usize> for StepSequence<K> {
    type Output = Step<K>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.steps[index]
    }
}

impl<'a, K> IntoIterator for &'a StepSequence<K> {
    type Item = &'a Step<K>;
    type IntoIter = slice::Iter<'a, Step<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl<K: serde::Serialize> serde::Serialize for StepSequence<K> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.steps.iter())
    }
}
