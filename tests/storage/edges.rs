//! Integration tests for link edges
//!
//! Tests capacity, idempotence, and ordering.

use proptest::prelude::*;
use wingman_foundation::{ErrorKind, ItemId};
use wingman_storage::{EdgeState, LinkEdge, LinkParam};

use crate::id;

#[test]
fn single_edge_holds_one() {
    let mut edge = LinkEdge::single();
    assert_eq!(edge.state(), EdgeState::Empty);

    edge.put(id("P1")).unwrap();
    assert_eq!(edge.state(), EdgeState::Full);

    let err = edge.put(id("P2")).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::LinkFull { capacity: 1 }));
    assert_eq!(edge.ids(), &[id("P1")]);
}

#[test]
fn put_is_idempotent_even_when_full() {
    let mut edge = LinkEdge::bounded(2);
    edge.put(id("A")).unwrap();
    edge.put(id("B")).unwrap();
    edge.put(id("A")).unwrap();
    assert_eq!(edge.ids(), &[id("A"), id("B")]);
}

#[test]
fn remove_absent_is_a_no_op() {
    let mut edge = LinkEdge::unbounded();
    edge.put(id("A")).unwrap();
    assert!(!edge.remove(&id("Z")));
    assert_eq!(edge.len(), 1);
}

#[test]
fn unbounded_edges_never_fill() {
    let mut edge = LinkEdge::unbounded();
    for n in 0..500 {
        edge.put(ItemId::new(format!("F{n}"))).unwrap();
    }
    assert!(!edge.has_capacity());
    assert!(!edge.is_full());
    assert_eq!(edge.state(), EdgeState::Partial);
}

#[test]
fn params_build_matching_edges() {
    let edge = LinkParam::bounded("flightAttendant", 4).edge();
    assert_eq!(edge.capacity(), 4);
    assert!(edge.is_empty());
}

#[derive(Clone, Debug)]
enum Op {
    Put(u8),
    Remove(u8),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![(0u8..8).prop_map(Op::Put), (0u8..8).prop_map(Op::Remove)]
}

proptest! {
    #[test]
    fn size_never_exceeds_capacity(capacity in 1usize..5, ops in prop::collection::vec(op(), 0..64)) {
        let mut edge = LinkEdge::bounded(capacity);
        for op in ops {
            match op {
                Op::Put(n) => {
                    let _ = edge.put(ItemId::new(format!("I{n}")));
                }
                Op::Remove(n) => {
                    edge.remove(&ItemId::new(format!("I{n}")));
                }
            }
            prop_assert!(edge.len() <= capacity);
        }
    }

    #[test]
    fn put_then_remove_restores_membership(seed in prop::collection::vec(0u8..8, 0..4), extra in 8u8..16) {
        let mut edge = LinkEdge::unbounded();
        for n in &seed {
            edge.put(ItemId::new(format!("I{n}"))).unwrap();
        }
        let before = edge.ids().to_vec();

        let new = ItemId::new(format!("I{extra}"));
        edge.put(new.clone()).unwrap();
        edge.remove(&new);
        prop_assert_eq!(edge.ids(), before.as_slice());
    }
}
