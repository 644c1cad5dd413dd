use rbtree_engine::{RbTree, StateError};

#[test]
fn blob_restores_identical_state() {
    let mut tree = RbTree::new();
    for i in 0..50u32 {
        tree.insert(i64::from(i * 29 % 53));
    }
    for key in [3, 17, 40] {
        tree.delete(key);
    }

    let blob = tree.to_bytes().unwrap();
    let restored = RbTree::from_bytes(&blob).unwrap();

    assert_eq!(restored.snapshot(), tree.snapshot());
    assert_eq!(restored.stats(), tree.stats());
    assert_eq!(restored.keys(), tree.keys());
}

#[test]
fn restored_tree_behaves_like_the_original() {
    let mut tree = RbTree::new();
    for key in [10, 20, 30, 5, 15, 25] {
        tree.insert(key);
    }
    tree.delete(15);

    let blob = tree.to_bytes().unwrap();
    let mut restored = RbTree::from_bytes(&blob).unwrap();

    // Link topology must be reproduced exactly, not just keys and colors:
    // the same mutation on both values has to rotate and relink the same
    // way, including reuse of the slot freed by the delete above.
    for op in [1, 40, 2] {
        tree.insert(op);
        restored.insert(op);
        assert_eq!(restored.snapshot(), tree.snapshot());
        assert_eq!(restored.stats(), tree.stats());
    }

    tree.delete(20);
    restored.delete(20);
    assert_eq!(restored.snapshot(), tree.snapshot());
    assert_eq!(restored.keys(), tree.keys());
}

#[test]
fn empty_tree_round_trips() {
    let tree = RbTree::new();
    let blob = tree.to_bytes().unwrap();
    let restored = RbTree::from_bytes(&blob).unwrap();
    assert_eq!(restored.snapshot(), None);
    assert_eq!(restored.stats(), tree.stats());
}

#[test]
fn counters_survive_the_round_trip() {
    let mut tree = RbTree::new();
    for key in [10, 20, 30] {
        tree.insert(key);
    }
    assert_eq!(tree.stats().rotation_count, 1);

    let restored = RbTree::from_bytes(&tree.to_bytes().unwrap()).unwrap();
    assert_eq!(restored.stats().node_count, 3);
    assert_eq!(restored.stats().rotation_count, 1);
}

#[test]
fn garbage_blob_is_rejected() {
    assert!(matches!(RbTree::from_bytes(&[]), Err(StateError::Decode)));
    assert!(matches!(
        RbTree::from_bytes(&[0xff, 0x13, 0x37]),
        Err(StateError::Decode)
    ));
}
