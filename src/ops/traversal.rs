//! Depth-first traversals
//!
//! One `traverse` step per node, no visit/compare noise. The pseudocode
//! line points at "visit current vertex" in each order's own listing.

use crate::key::TreeKey;
use crate::step::{Step, StepKind, StepRecorder, StepSequence};
use crate::tree::Node;

#[derive(Clone, Copy)]
enum Order {
    In,
    Pre,
    Post,
}

impl Order {
    fn label(self) -> &'static str {
        match self {
            Order::In => "In-order",
            Order::Pre => "Pre-order",
            Order::Post => "Post-order",
        }
    }

    fn visit_line(self) -> usize {
        match self {
            Order::In => 3,
            Order::Pre => 2,
            Order::Post => 4,
        }
    }
}

/// Left, self, right
pub fn inorder<K: TreeKey>(root: Option<&Node<K>>) -> StepSequence<K> {
    run(root, Order::In)
}

/// Self, left, right
pub fn preorder<K: TreeKey>(root: Option<&Node<K>>) -> StepSequence<K> {
    run(root, Order::Pre)
}

/// Left, right, self
pub fn postorder<K: TreeKey>(root: Option<&Node<K>>) -> StepSequence<K> {
    run(root, Order::Post)
}

fn run<K: TreeKey>(root: Option<&Node<K>>, order: Order) -> StepSequence<K> {
    let mut rec = StepRecorder::new();
    walk(root, order, &mut rec);
    rec.finish()
}

fn walk<K: TreeKey>(node: Option<&Node<K>>, order: Order, rec: &mut StepRecorder<K>) {
    let Some(node) = node else {
        return;
    };
    if let Order::Pre = order {
        emit(node, order, rec);
    }
    walk(node.left(), order, rec);
    if let Order::In = order {
        emit(node, order, rec);
    }
    walk(node.right(), order, rec);
    if let Order::Post = order {
        emit(node, order, rec);
    }
}

fn emit<K: TreeKey>(node: &Node<K>, order: Order, rec: &mut StepRecorder<K>) {
    rec.push(
        Step::new(
            StepKind::Traverse,
            Some(node.key.clone()),
            format!("{} visit: {}", order.label(), node.key),
        )
        .with_line(order.visit_line()),
    );
}
