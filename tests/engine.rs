//! Facade integration tests

mod test_helpers;

use test_helpers::*;
use treestep::{listing, BstEngine, EngineConfig, EngineError, NumericKey, Operation, StepKind};

#[test]
fn test_preview_insert_never_changes_count() {
    let mut engine = sample_engine();
    for _ in 0..5 {
        let steps = engine
            .preview(Operation::Insert, Some(99))
            .expect("preview succeeds");
        assert_eq!(steps.count_kind(StepKind::Insert), 2);
        assert_eq!(engine.count(), 7, "preview must not touch the tree");
    }

    engine
        .commit(Operation::Insert, Some(99))
        .expect("commit succeeds");
    assert_eq!(engine.count(), 8);
    assert_eq!(engine.max(), Some(99));
}

#[test]
fn test_two_children_delete_promotes_successor() {
    let mut engine = sample_engine();
    engine
        .commit(Operation::Delete, Some(50))
        .expect("commit succeeds");

    let root = engine.tree().root().expect("tree still has a root");
    assert_eq!(*root.key(), 62, "root key replaced by in-order successor");
    let right = root.right().expect("right subtree survives");
    assert_eq!(*right.key(), 75);
    assert!(right.left().is_none(), "successor's original node removed");
    assert_eq!(engine.snapshot().serial(), "62(25(12,37),75(-,87))");
}

#[test]
fn test_traversal_shapes() {
    let engine = sample_engine();
    let values = |op: Operation| -> Vec<i32> {
        engine
            .preview(op, None)
            .expect("traversal preview succeeds")
            .iter()
            .filter_map(|s| s.node_value)
            .collect()
    };

    assert_eq!(values(Operation::Inorder), vec![12, 25, 37, 50, 62, 75, 87]);
    assert_eq!(values(Operation::Preorder).first(), Some(&50));
    assert_eq!(values(Operation::Postorder).last(), Some(&50));
}

#[test]
fn test_delete_absent_key() {
    let mut engine = sample_engine();
    let before = engine.snapshot();
    let steps = engine
        .preview(Operation::Delete, Some(40))
        .expect("preview succeeds");
    assert_eq!(steps.count_kind(StepKind::NotFound), 1);
    assert_eq!(steps.last().map(|s| s.kind), Some(StepKind::NotFound));

    engine
        .commit(Operation::Delete, Some(40))
        .expect("commit succeeds");
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn test_empty_engine_reports() {
    let engine = BstEngine::<i32>::empty();
    assert_eq!(engine.height(), -1);
    assert_eq!(engine.count(), 0);
    assert_eq!(engine.min(), None);
    assert_eq!(engine.max(), None);

    let min = engine.preview(Operation::Min, None).expect("min preview");
    assert_eq!(min.kinds(), vec![StepKind::NotFound]);
    assert_eq!(min[0].node_value, None);

    let inorder = engine.preview(Operation::Inorder, None).expect("inorder preview");
    assert!(inorder.is_empty());

    let insert = engine.preview(Operation::Insert, Some(1)).expect("insert preview");
    assert_eq!(insert.kinds(), vec![StepKind::Insert]);
}

#[test]
fn test_every_algorithm_line_is_in_its_listing() {
    let engine = sample_engine();
    for op in Operation::ALL {
        let keys: &[Option<i32>] = if op.takes_key() {
            &[Some(12), Some(37), Some(50), Some(87), Some(40), Some(99)]
        } else {
            &[None]
        };
        let listing = listing::pseudocode(op);
        for key in keys {
            let steps = engine.preview(op, *key).expect("preview succeeds");
            for step in &steps {
                if let Some(line) = step.algorithm_line {
                    assert!(
                        line < listing.len(),
                        "{op} emitted line {line} past its {}-line listing",
                        listing.len()
                    );
                }
            }
        }
    }
}

#[test]
fn test_numeric_keys_from_driver_text() {
    let mut engine = BstEngine::<NumericKey>::new(EngineConfig::starter());
    let op: Operation = "insert".parse().expect("known operation");
    let key: NumericKey = "44.5".parse().expect("valid key");
    engine.commit(op, Some(key)).expect("commit succeeds");
    assert_eq!(engine.count(), 26);

    assert!(matches!(
        "sideways".parse::<Operation>(),
        Err(EngineError::UnknownOperation(_))
    ));
    assert!(matches!(
        NumericKey::new(f64::NAN),
        Err(EngineError::UnorderedKey(_))
    ));
}

#[test]
fn test_revision_tracks_commits_only() {
    let mut engine = sample_engine();
    let start = engine.revision();
    engine.preview(Operation::Delete, Some(25)).expect("preview");
    assert_eq!(engine.revision(), start);
    engine.commit(Operation::Delete, Some(25)).expect("commit");
    assert_eq!(engine.revision(), start + 1);
}

#[test]
fn test_revision_counts_no_op_commits() {
    let mut engine = sample_engine();
    let start = engine.revision();
    let before = engine.snapshot();
    engine.commit(Operation::Insert, Some(37)).expect("duplicate insert");
    engine.commit(Operation::Delete, Some(999)).expect("absent delete");
    assert_eq!(engine.snapshot(), before);
    assert_eq!(engine.revision(), start + 2);
}
