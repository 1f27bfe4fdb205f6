use std::cmp::Ordering;

use super::Mutation;
use crate::key::TreeKey;
use crate::step::{Step, StepKind, StepRecorder};
use crate::tree::Link;

/// Delete `key`, narrating the search and the splice
///
/// A node with two children is never unlinked: it takes its in-order
/// successor's key and the successor's own node is removed from the right
/// subtree instead. The log therefore holds a second `delete` step, naming
/// the successor, in that case.
pub fn delete<K: TreeKey>(root: Link<K>, key: &K) -> Mutation<K> {
    let mut rec = StepRecorder::new();
    let root = delete_node(root, key, &mut rec);
    Mutation {
        root,
        steps: rec.finish(),
    }
}

fn delete_node<K: TreeKey>(link: Link<K>, key: &K, rec: &mut StepRecorder<K>) -> Link<K> {
    let Some(mut node) = link else {
        rec.push(Step::new(
            StepKind::NotFound,
            Some(key.clone()),
            format!("{key} not found to delete."),
        ));
        return None;
    };

    rec.push(
        Step::new(
            StepKind::Visit,
            Some(node.key.clone()),
            format!("Visiting {} during deletion search.", node.key),
        )
        .with_line(0),
    );

    match key.cmp(&node.key) {
        Ordering::Less => {
            node.left = delete_node(node.left.take(), key, rec);
            Some(node)
        }
        Ordering::Greater => {
            node.right = delete_node(node.right.take(), key, rec);
            Some(node)
        }
        Ordering::Equal => {
            let line = match (&node.left, &node.right) {
                (None, None) => 1,
                (Some(_), Some(_)) => 5,
                _ => 3,
            };
            rec.push(
                Step::new(
                    StepKind::Delete,
                    Some(node.key.clone()),
                    format!("Found node {} to delete.", node.key),
                )
                .with_line(line),
            );

            match (node.left.take(), node.right.take()) {
                (None, right) => right,
                (left, None) => left,
                (Some(left), Some(right)) => {
                    let successor = right.leftmost().key.clone();
                    rec.push(
                        Step::new(
                            StepKind::Visit,
                            Some(successor.clone()),
                            format!(
                                "Found in-order successor {successor} to replace {}.",
                                node.key
                            ),
                        )
                        .with_line(6),
                    );

                    node.key = successor.clone();
                    node.left = Some(left);
                    node.right = delete_node(Some(right), &successor, rec);
                    Some(node)
                }
            }
        }
    }
}
