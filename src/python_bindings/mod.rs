//! Python bindings that expose the engine via PyO3.
use pyo3::{exceptions::PyValueError, prelude::*, types::PyModule};

use crate::{BstEngine, EngineConfig, EngineError, NumericKey, Operation, Step};

fn to_py_err(err: EngineError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn parse_key(key: Option<f64>) -> PyResult<Option<NumericKey>> {
    key.map(NumericKey::new).transpose().map_err(to_py_err)
}

/// One step of a log, flattened for Python.
#[pyclass(get_all)]
#[derive(Debug, Clone)]
pub struct PyStep {
    /// Step kind wire name, e.g. `"not_found"`.
    pub kind: String,
    /// Key the step is about.
    pub node_value: Option<f64>,
    /// Narration.
    pub description: String,
    /// Pseudocode line.
    pub algorithm_line: Option<usize>,
    /// Comparison text.
    pub comparison: Option<String>,
    /// `(parent, child)` edge.
    pub highlight_edge: Option<(f64, f64)>,
    /// Animation state wire name.
    pub node_state: Option<String>,
}

impl From<&Step<NumericKey>> for PyStep {
    fn from(step: &Step<NumericKey>) -> Self {
        Self {
            kind: step.kind.as_str().to_string(),
            node_value: step.node_value.map(NumericKey::get),
            description: step.description.clone(),
            algorithm_line: step.algorithm_line,
            comparison: step.comparison.clone(),
            highlight_edge: step
                .highlight_edge
                .as_ref()
                .map(|edge| (edge.from.get(), edge.to.get())),
            node_state: step.node_state.map(|state| state.as_str().to_string()),
        }
    }
}

/// Python-facing engine over float keys.
#[pyclass]
#[derive(Debug)]
pub struct PyBstEngine {
    engine: BstEngine<NumericKey>,
}

#[pymethods]
impl PyBstEngine {
    #[new]
    #[pyo3(signature = (keys=None))]
    /// Create the engine, seeded with `keys` or the starter tree.
    pub fn new(keys: Option<Vec<f64>>) -> PyResult<Self> {
        let config = match keys {
            Some(keys) => {
                let keys = keys
                    .into_iter()
                    .map(NumericKey::new)
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(to_py_err)?;
                EngineConfig::empty().with_seed_keys(keys)
            }
            None => EngineConfig::starter(),
        };
        Ok(Self {
            engine: BstEngine::new(config),
        })
    }

    /// Step log of `operation` without changing the tree.
    #[pyo3(signature = (operation, key=None))]
    pub fn preview(&self, operation: &str, key: Option<f64>) -> PyResult<Vec<PyStep>> {
        let op: Operation = operation.parse().map_err(to_py_err)?;
        let steps = self
            .engine
            .preview(op, parse_key(key)?)
            .map_err(to_py_err)?;
        Ok(steps.iter().map(PyStep::from).collect())
    }

    /// Apply an insert or delete to the tree.
    pub fn commit(&mut self, operation: &str, key: f64) -> PyResult<()> {
        let op: Operation = operation.parse().map_err(to_py_err)?;
        self.engine
            .commit(op, parse_key(Some(key))?)
            .map_err(to_py_err)
    }

    /// Height, -1 when empty.
    pub fn height(&self) -> isize {
        self.engine.height()
    }

    /// Number of keys.
    pub fn count(&self) -> usize {
        self.engine.count()
    }

    /// Smallest key.
    pub fn min(&self) -> Option<f64> {
        self.engine.min().map(NumericKey::get)
    }

    /// Largest key.
    pub fn max(&self) -> Option<f64> {
        self.engine.max().map(NumericKey::get)
    }

    /// Pre-order `(key, left, right)` triples.
    pub fn snapshot(&self) -> Vec<(f64, Option<f64>, Option<f64>)> {
        self.engine
            .snapshot()
            .nodes
            .into_iter()
            .map(|node| {
                (
                    node.key.get(),
                    node.left.map(NumericKey::get),
                    node.right.map(NumericKey::get),
                )
            })
            .collect()
    }
}

/// Create Python module.
#[pymodule]
pub fn treestep_py(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyBstEngine>()?;
    m.add_class::<PyStep>()?;
    Ok(())
}
