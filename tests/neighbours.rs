//! Successor/predecessor and min/max tables

mod test_helpers;

use test_case::test_case;
use test_helpers::sample_engine;
use treestep::{Operation, StepKind};

fn outcome(op: Operation, key: Option<i32>) -> (StepKind, Option<i32>) {
    let steps = sample_engine().preview(op, key).expect("preview succeeds");
    let last = steps.last().expect("log is never empty for queries");
    (last.kind, last.node_value)
}

#[test_case(50, Some(62); "root goes to right subtree")]
#[test_case(37, Some(50); "right leaf climbs to ancestor")]
#[test_case(25, Some(37); "inner node right child")]
#[test_case(62, Some(75); "left leaf parent")]
#[test_case(87, None; "maximum has none")]
fn successor(key: i32, expected: Option<i32>) {
    let (kind, value) = outcome(Operation::Successor, Some(key));
    match expected {
        Some(answer) => assert_eq!((kind, value), (StepKind::Found, Some(answer))),
        None => assert_eq!((kind, value), (StepKind::NotFound, None)),
    }
}

#[test_case(50, Some(37); "root goes to left subtree")]
#[test_case(62, Some(50); "left leaf climbs to ancestor")]
#[test_case(75, Some(62); "inner node left child")]
#[test_case(37, Some(25); "right leaf parent")]
#[test_case(12, None; "minimum has none")]
fn predecessor(key: i32, expected: Option<i32>) {
    let (kind, value) = outcome(Operation::Predecessor, Some(key));
    match expected {
        Some(answer) => assert_eq!((kind, value), (StepKind::Found, Some(answer))),
        None => assert_eq!((kind, value), (StepKind::NotFound, None)),
    }
}

#[test_case(Operation::Successor; "successor")]
#[test_case(Operation::Predecessor; "predecessor")]
fn missing_target_reports_the_target(op: Operation) {
    assert_eq!(outcome(op, Some(40)), (StepKind::NotFound, Some(40)));
}

#[test_case(Operation::Min, 12; "min")]
#[test_case(Operation::Max, 87; "max")]
fn extremes(op: Operation, expected: i32) {
    assert_eq!(outcome(op, None), (StepKind::Found, Some(expected)));
}
