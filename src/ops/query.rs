//! Extremes and neighbours
//!
//! Successor and predecessor have no parent links to climb. While
//! searching for the target they remember the last ancestor the walk left
//! on the answer's side, which is the answer whenever the target has no
//! subtree on that side.

use std::cmp::Ordering;

use crate::key::TreeKey;
use crate::step::{Step, StepKind, StepRecorder, StepSequence};
use crate::tree::Node;

#[derive(Clone, Copy)]
enum Side {
    Left,
    Right,
}

impl Side {
    fn child<K>(self, node: &Node<K>) -> Option<&Node<K>> {
        match self {
            Side::Left => node.left(),
            Side::Right => node.right(),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Walk left from the root to the smallest key
pub fn find_min<K: TreeKey>(root: Option<&Node<K>>) -> StepSequence<K> {
    extreme(root, Side::Left, "Minimum", "min")
}

/// Walk right from the root to the largest key
pub fn find_max<K: TreeKey>(root: Option<&Node<K>>) -> StepSequence<K> {
    extreme(root, Side::Right, "Maximum", "max")
}

fn extreme<K: TreeKey>(
    root: Option<&Node<K>>,
    side: Side,
    title: &str,
    short: &str,
) -> StepSequence<K> {
    let mut rec = StepRecorder::new();
    let Some(mut current) = root else {
        rec.push(Step::new(StepKind::NotFound, None, "Tree is empty."));
        return rec.finish();
    };

    rec.push(
        Step::new(
            StepKind::Visit,
            Some(current.key.clone()),
            format!("Starting at root {}", current.key),
        )
        .with_line(0),
    );
    let dir = side.name();
    while let Some(next) = side.child(current) {
        rec.push(
            Step::new(
                StepKind::Visit,
                Some(current.key.clone()),
                format!("Visiting {}, going {dir}...", current.key),
            )
            .with_line(1)
            .with_comparison(format!("{dir} child exists, go {dir}")),
        );
        current = next;
    }
    rec.push(
        Step::new(
            StepKind::Found,
            Some(current.key.clone()),
            format!("{title} value is {}", current.key),
        )
        .with_line(3)
        .with_comparison(format!("No {dir} child, found {short}: {}", current.key)),
    );
    rec.finish()
}

/// Smallest key greater than `target`
pub fn find_successor<K: TreeKey>(root: Option<&Node<K>>, target: &K) -> StepSequence<K> {
    neighbour(root, target, Side::Right)
}

/// Largest key smaller than `target`
pub fn find_predecessor<K: TreeKey>(root: Option<&Node<K>>, target: &K) -> StepSequence<K> {
    neighbour(root, target, Side::Left)
}

/// `side` is where the answer lives relative to the target: right for
/// successor, left for predecessor.
fn neighbour<K: TreeKey>(root: Option<&Node<K>>, target: &K, side: Side) -> StepSequence<K> {
    let mut rec = StepRecorder::new();
    let (role, inward, bound) = match side {
        Side::Right => ("Successor", "left", "maximum"),
        Side::Left => ("Predecessor", "right", "minimum"),
    };

    let mut current = root;
    let mut candidate: Option<&Node<K>> = None;
    let found = loop {
        let Some(node) = current else {
            break None;
        };
        let ordering = target.cmp(&node.key);
        if ordering == Ordering::Equal {
            break Some(node);
        }
        rec.push(
            Step::new(
                StepKind::Visit,
                Some(node.key.clone()),
                format!("Searching for {target}, visiting {}", node.key),
            )
            .with_line(0)
            .with_comparison(format!("{target} vs {}", node.key)),
        );
        current = match (side, ordering) {
            // leaving this ancestor towards the target, away from the answer side
            (Side::Right, Ordering::Less) => {
                candidate = Some(node);
                node.left()
            }
            (Side::Left, Ordering::Greater) => {
                candidate = Some(node);
                node.right()
            }
            (_, Ordering::Less) => node.left(),
            (_, _) => node.right(),
        };
    };

    let Some(found) = found else {
        rec.push(Step::new(
            StepKind::NotFound,
            Some(target.clone()),
            format!("{target} not found in tree."),
        ));
        return rec.finish();
    };

    rec.push(
        Step::new(StepKind::Found, Some(found.key.clone()), format!("Found {target}")).with_line(0),
    );

    let inner = match side {
        Side::Right => Side::Left,
        Side::Left => Side::Right,
    };
    if let Some(mut current) = side.child(found) {
        while let Some(next) = inner.child(current) {
            rec.push(
                Step::new(
                    StepKind::Visit,
                    Some(current.key.clone()),
                    format!("Going {inward} to find {}...", role.to_lowercase()),
                )
                .with_line(2)
                .with_comparison(format!(
                    "Finding {}most in {} subtree",
                    inward,
                    side.name()
                )),
            );
            current = next;
        }
        rec.push(
            Step::new(
                StepKind::Found,
                Some(current.key.clone()),
                format!("{role} of {target} is {}", current.key),
            )
            .with_line(2)
            .with_comparison(format!("{role}: {}", current.key)),
        );
    } else if let Some(ancestor) = candidate {
        rec.push(
            Step::new(
                StepKind::Found,
                Some(ancestor.key.clone()),
                format!("{role} of {target} is {}", ancestor.key),
            )
            .with_line(4)
            .with_comparison(format!("{role}: {}", ancestor.key)),
        );
    } else {
        rec.push(Step::new(
            StepKind::NotFound,
            None,
            format!("{target} has no {} (it's the {bound}).", role.to_lowercase()),
        ));
    }
    rec.finish()
}
