use std::fmt::{Display, Write as _};
use std::fs;
use std::path::{Path, PathBuf};

use treestep::StepSequence;

fn snapshot_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("snapshots")
}

/// One line per step, tab separated, optional hints appended as `name=value`
pub fn render<K: Display>(steps: &StepSequence<K>) -> String {
    let mut out = String::new();
    for step in steps {
        let value = step
            .node_value
            .as_ref()
            .map_or_else(|| "-".to_string(), ToString::to_string);
        let _ = write!(out, "{}\t{}\t{}", step.kind, value, step.description);
        if let Some(line) = step.algorithm_line {
            let _ = write!(out, "\tline={line}");
        }
        if let Some(comparison) = &step.comparison {
            let _ = write!(out, "\tcmp={comparison}");
        }
        if let Some(edge) = &step.highlight_edge {
            let _ = write!(out, "\tedge={}->{}", edge.from, edge.to);
        }
        if let Some(state) = step.node_state {
            let _ = write!(out, "\tstate={state}");
        }
        out.push('\n');
    }
    out
}

/// Compare a rendered step log against `tests/snapshots/<name>`
///
/// On mismatch, reports the first differing step by index.
pub fn assert_snapshot(name: &str, actual: &str) {
    let path = snapshot_root().join(name);
    if std::env::var("TREESTEP_UPDATE_SNAPSHOTS").is_ok() {
        fs::create_dir_all(snapshot_root()).expect("create snapshot directory");
        fs::write(&path, actual).expect("write snapshot");
        return;
    }

    let expected = fs::read_to_string(&path)
        .unwrap_or_else(|_| panic!("no golden log at {path:?}, set TREESTEP_UPDATE_SNAPSHOTS=1"));
    if let Some((index, want, got)) = first_divergence(&expected, actual) {
        panic!(
            "step log {name} diverges at step {index}\n  expected: {}\n  actual:   {}\n\
             Set TREESTEP_UPDATE_SNAPSHOTS=1 to regenerate.",
            want.unwrap_or("<end of log>"),
            got.unwrap_or("<end of log>"),
        );
    }
}

/// Index and both sides of the first step line that differs, ignoring CRLF
pub fn first_divergence<'a>(
    expected: &'a str,
    actual: &'a str,
) -> Option<(usize, Option<&'a str>, Option<&'a str>)> {
    let mut want = expected.lines();
    let mut got = actual.lines();
    let mut index = 0;
    loop {
        match (want.next(), got.next()) {
            (None, None) => return None,
            (w, g) if w != g => return Some((index, w, g)),
            _ => index += 1,
        }
    }
}
