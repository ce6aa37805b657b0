/*!
# Tests for the joiner family

Inner, outer, left, right, and mixed joiners over the same group shapes,
plus the configuration and closure-contract error paths.
*/

use std::cell::Cell;
use tuplestream::{
    FieldValue, GroupBuffer, GroupClosure, InnerJoin, JoinError, Joiner, LeftJoin, MixedJoin,
    OuterJoin, RightJoin, Tuple,
};

fn int(i: i64) -> FieldValue {
    FieldValue::Integer(i)
}

fn rows_of(joiner: &dyn Joiner, closure: &GroupBuffer) -> Vec<Tuple> {
    joiner
        .join(closure)
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
}

/// Stream 0 has rows, stream 1 is empty for the current key.
fn right_side_empty() -> GroupBuffer {
    GroupBuffer::new()
        .with_stream(1, vec![Tuple::new(vec![int(1)]), Tuple::new(vec![int(2)])])
        .unwrap()
        .with_stream(1, vec![])
        .unwrap()
}

/// Stream 0 is empty, stream 1 has rows.
fn left_side_empty() -> GroupBuffer {
    GroupBuffer::new()
        .with_stream(1, vec![])
        .unwrap()
        .with_stream(1, vec![Tuple::new(vec![int(1)]), Tuple::new(vec![int(2)])])
        .unwrap()
}

#[test]
fn test_inner_join_drops_group_with_any_empty_stream() {
    assert!(rows_of(&InnerJoin, &right_side_empty()).is_empty());
    assert!(rows_of(&InnerJoin, &left_side_empty()).is_empty());
}

#[test]
fn test_outer_join_pads_whichever_side_is_empty() {
    let padded_right = rows_of(&OuterJoin, &right_side_empty());
    assert_eq!(padded_right.len(), 2);
    assert!(padded_right.iter().all(|row| row.get(1).unwrap().is_null()));

    let padded_left = rows_of(&OuterJoin, &left_side_empty());
    assert_eq!(padded_left.len(), 2);
    assert!(padded_left.iter().all(|row| row.get(0).unwrap().is_null()));
}

#[test]
fn test_left_join_keeps_left_rows_and_pads_right() {
    let rows = rows_of(&LeftJoin, &right_side_empty());
    assert_eq!(
        rows,
        vec![
            Tuple::new(vec![int(1), FieldValue::Null]),
            Tuple::new(vec![int(2), FieldValue::Null]),
        ]
    );
}

#[test]
fn test_left_join_drops_group_when_left_is_empty() {
    assert!(rows_of(&LeftJoin, &left_side_empty()).is_empty());
}

#[test]
fn test_right_join_mirrors_left_join() {
    let rows = rows_of(&RightJoin, &left_side_empty());
    assert_eq!(
        rows,
        vec![
            Tuple::new(vec![FieldValue::Null, int(1)]),
            Tuple::new(vec![FieldValue::Null, int(2)]),
        ]
    );

    assert!(rows_of(&RightJoin, &right_side_empty()).is_empty());
}

#[test]
fn test_mixed_join_matches_named_joiners() {
    // [inner, outer] is a left join; [outer, inner] is a right join.
    let closure = right_side_empty();
    assert_eq!(
        rows_of(&MixedJoin::from_flags(&[true, false]), &closure),
        rows_of(&LeftJoin, &closure)
    );
    assert_eq!(
        rows_of(&MixedJoin::from_flags(&[false, true]), &closure),
        rows_of(&RightJoin, &closure)
    );
}

#[test]
fn test_policy_length_mismatch_is_rejected() {
    let closure = right_side_empty();
    let joiner = MixedJoin::from_flags(&[true, false, false]);
    assert_eq!(joiner.num_joins(), Some(3));

    match joiner.join(&closure) {
        Err(JoinError::ConfigurationMismatch {
            policy_len,
            stream_count,
        }) => {
            assert_eq!(policy_len, 3);
            assert_eq!(stream_count, 2);
        }
        other => panic!("expected configuration mismatch, got {:?}", other),
    };
}

#[test]
fn test_all_empty_group_fails_loudly() {
    let closure = GroupBuffer::new()
        .with_stream(1, vec![])
        .unwrap()
        .with_stream(2, vec![])
        .unwrap();

    // Even the full outer join refuses to emit an all-null row for a group
    // no stream contributed to.
    let result = OuterJoin.join(&closure);
    assert!(matches!(result, Err(JoinError::ClosureContract { .. })));
}

#[test]
fn test_zero_stream_closure_is_rejected() {
    let closure = GroupBuffer::new();
    let result = OuterJoin.join(&closure);
    assert!(matches!(result, Err(JoinError::ClosureContract { .. })));
}

/// Closure whose second stream serves its rows only once: the restart the
/// odometer needs comes back empty.
struct NonRestartable {
    right_served: Cell<bool>,
}

impl GroupClosure for NonRestartable {
    fn stream_count(&self) -> usize {
        2
    }

    fn is_empty(&self, _stream: usize) -> bool {
        false
    }

    fn tuples(&self, stream: usize) -> Box<dyn Iterator<Item = Tuple> + '_> {
        if stream == 1 && self.right_served.replace(true) {
            return Box::new(std::iter::empty());
        }
        Box::new(
            vec![Tuple::new(vec![int(1)]), Tuple::new(vec![int(2)])].into_iter(),
        )
    }

    fn null_tuple(&self, _stream: usize) -> Tuple {
        Tuple::null_of(1)
    }
}

#[test]
fn test_non_restartable_stream_surfaces_as_error() {
    let closure = NonRestartable {
        right_served: Cell::new(false),
    };

    let mut iter = InnerJoin.join(&closure).unwrap();
    assert!(iter.next().unwrap().is_ok());
    assert!(iter.next().unwrap().is_ok());

    // Advancing stream 0 forces a restart of stream 1, which now lies.
    match iter.next() {
        Some(Err(JoinError::ClosureContract { stream, .. })) => assert_eq!(stream, Some(1)),
        other => panic!("expected contract violation, got {:?}", other),
    }

    // The iterator is fused after the error.
    assert!(iter.next().is_none());
}

#[test]
fn test_mixed_join_config_serde_round_trip() {
    let joiner = MixedJoin::from_flags(&[true, false]);
    let json = serde_json::to_string(&joiner).unwrap();
    let back: MixedJoin = serde_json::from_str(&json).unwrap();
    assert_eq!(back, joiner);
}
