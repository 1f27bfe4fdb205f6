use std::cmp::Ordering;

use super::Mutation;
use crate::key::TreeKey;
use crate::step::{NodeState, Step, StepKind, StepRecorder};
use crate::tree::{Link, Node};

/// Insert `key`, narrating the descent and the new node's arrival
///
/// A duplicate is a no-op whose log ends in a `visit` step and holds no
/// `insert` step at all. Inserting into an empty tree emits a single
/// `insert` step; otherwise the new node gets an `appearing` step followed
/// by a settling `normal` one.
pub fn insert<K: TreeKey>(mut root: Link<K>, key: K) -> Mutation<K> {
    let mut rec = StepRecorder::new();

    let Some(mut node) = root.as_mut() else {
        rec.push(
            Step::new(
                StepKind::Insert,
                Some(key.clone()),
                format!("Tree was empty. Set {key} as root."),
            )
            .with_state(NodeState::Appearing)
            .with_line(1),
        );
        return Mutation {
            root: Some(Node::boxed(key)),
            steps: rec.finish(),
        };
    };

    loop {
        let here = node.key.clone();
        rec.push(Step::new(
            StepKind::Visit,
            Some(here.clone()),
            format!("Visiting node {here}"),
        ));
        rec.push(
            Step::new(
                StepKind::Compare,
                Some(here.clone()),
                format!("Comparing {key} with {here}"),
            )
            .with_line(2)
            .with_comparison(format!("{key} vs {here}")),
        );

        let (slot, side, op, line) = match key.cmp(&here) {
            Ordering::Less => (&mut node.left, "left", "<", 3),
            Ordering::Greater => (&mut node.right, "right", ">", 5),
            Ordering::Equal => {
                rec.push(
                    Step::new(
                        StepKind::Visit,
                        Some(here.clone()),
                        format!("Value {key} already exists in the tree."),
                    )
                    .with_line(6)
                    .with_comparison(format!("{key} == {here}")),
                );
                break;
            }
        };
        match slot {
            Some(child) => {
                rec.push(
                    Step::new(
                        StepKind::Visit,
                        Some(here.clone()),
                        format!("Going {side} from {here}"),
                    )
                    .with_line(line)
                    .with_comparison(format!("{key} {op} {here}"))
                    .with_edge(here, child.key.clone()),
                );
                node = child;
            }
            None => {
                *slot = Some(Node::boxed(key.clone()));
                arrive(&mut rec, key, here, side, op);
                break;
            }
        }
    }

    Mutation {
        root,
        steps: rec.finish(),
    }
}

/// Appear, then settle
fn arrive<K: TreeKey>(rec: &mut StepRecorder<K>, key: K, parent: K, side: &str, op: &str) {
    rec.push(
        Step::new(
            StepKind::Insert,
            Some(key.clone()),
            format!("Creating new node {key} to the {side} of {parent}"),
        )
        .with_line(1)
        .with_comparison(format!("{key} {op} {parent}, insert {side}"))
        .with_state(NodeState::Appearing)
        .with_edge(parent.clone(), key.clone()),
    );
    rec.push(
        Step::new(
            StepKind::Insert,
            Some(key.clone()),
            format!("Inserted {key} to the {side} of {parent}"),
        )
        .with_line(1)
        .with_comparison(format!("{key} {op} {parent}"))
        .with_state(NodeState::Normal),
    );
}
