use std::cmp::Ordering;

use crate::key::TreeKey;
use crate::step::{Step, StepKind, StepRecorder, StepSequence};
use crate::tree::Node;

/// Look `target` up, narrating every visit and comparison
///
/// Absence is reported as a final `not_found` step, never as an error.
pub fn search<K: TreeKey>(root: Option<&Node<K>>, target: &K) -> StepSequence<K> {
    let mut rec = StepRecorder::new();
    let mut current = root;

    while let Some(node) = current {
        let key = &node.key;
        rec.push(Step::new(
            StepKind::Visit,
            Some(key.clone()),
            format!("Visiting node {key}"),
        ));
        rec.push(
            Step::new(
                StepKind::Compare,
                Some(key.clone()),
                format!("Comparing target {target} with {key}"),
            )
            .with_line(2)
            .with_comparison(format!("{target} vs {key}")),
        );

        match target.cmp(key) {
            Ordering::Equal => {
                rec.push(
                    Step::new(StepKind::Found, Some(target.clone()), format!("Found {target}!"))
                        .with_line(3)
                        .with_comparison(format!("{target} == {key}")),
                );
                return rec.finish();
            }
            Ordering::Less => {
                if let Some(child) = node.left() {
                    rec.push(
                        Step::new(
                            StepKind::Visit,
                            Some(key.clone()),
                            format!("Going left from {key}"),
                        )
                        .with_line(5)
                        .with_comparison(format!("{target} < {key}"))
                        .with_edge(key.clone(), child.key.clone()),
                    );
                }
                current = node.left();
            }
            Ordering::Greater => {
                if let Some(child) = node.right() {
                    rec.push(
                        Step::new(
                            StepKind::Visit,
                            Some(key.clone()),
                            format!("Going right from {key}"),
                        )
                        .with_line(7)
                        .with_comparison(format!("{target} > {key}"))
                        .with_edge(key.clone(), child.key.clone()),
                    );
                }
                current = node.right();
            }
        }
    }

    rec.push(
        Step::new(
            StepKind::NotFound,
            Some(target.clone()),
            format!("{target} not found in the tree."),
        )
        .with_line(1)
        .with_comparison(format!("Reached null, {target} not found")),
    );
    rec.finish()
}
