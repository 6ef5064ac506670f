use avl::Tree;
use quickcheck_macros::quickcheck;

use std::collections::{BTreeMap, HashSet};

use crate::common::init_logging;
use crate::Op;

/// The worst case height of an AVL tree holding `n` keys.
fn max_height(n: usize) -> usize {
    (1.44 * ((n + 2) as f64).log2()).ceil() as usize
}

/// Applies a set of operations to a tree and to a count of each key.
/// This way we can ensure that after a random smattering of inserts
/// and removes we have the same keys, duplicates included, in both.
/// Returns how many removes actually removed something.
fn do_ops<K>(ops: &[Op<K>], tree: &mut Tree<K>, counts: &mut BTreeMap<K, usize>) -> usize
where
    K: Ord + Clone,
{
    let mut removed = 0;
    for op in ops {
        match op {
            Op::Insert(k) => {
                tree.insert(k.clone());
                *counts.entry(k.clone()).or_default() += 1;
            }
            Op::Remove(k) => {
                if tree.remove(k) {
                    removed += 1;
                    let count = counts.get_mut(k).expect("removed key was counted");
                    *count -= 1;
                    if *count == 0 {
                        counts.remove(k);
                    }
                }
            }
        }
    }

    removed
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    init_logging();
    let mut tree = Tree::new();
    let mut counts = BTreeMap::new();

    do_ops(&ops, &mut tree, &mut counts);
    counts.keys().all(|key| tree.contains(key))
        && (i8::MIN..=i8::MAX)
            .filter(|key| !counts.contains_key(key))
            .all(|key| !tree.contains(&key))
}

#[quickcheck]
fn balanced_after_any_operations(ops: Vec<Op<i8>>) -> bool {
    init_logging();
    let mut tree = Tree::new();
    let mut counts = BTreeMap::new();

    do_ops(&ops, &mut tree, &mut counts);
    tree.is_balanced() && tree.validate().is_ok()
}

#[quickcheck]
fn height_is_logarithmic(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    tree.height() <= max_height(xs.len())
}

#[quickcheck]
fn height_is_logarithmic_after_removes(ops: Vec<Op<i16>>) -> bool {
    let mut tree = Tree::new();
    let mut counts = BTreeMap::new();

    do_ops(&ops, &mut tree, &mut counts);
    tree.height() <= max_height(tree.len())
}

#[quickcheck]
fn in_order_is_sorted(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut counts = BTreeMap::new();

    do_ops(&ops, &mut tree, &mut counts);
    let keys = tree.in_order().collect::<Vec<_>>();
    keys.windows(2).all(|pair| pair[0] <= pair[1])
}

#[quickcheck]
fn size_is_conserved(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut counts = BTreeMap::new();

    let removed = do_ops(&ops, &mut tree, &mut counts);
    let inserted = ops.iter().filter(|op| matches!(op, Op::Insert(_))).count();

    let expected = inserted - removed;
    tree.len() == expected
        && tree.in_order().count() == expected
        && tree.pre_order().count() == expected
        && tree.post_order().count() == expected
        && tree.level_order().count() == expected
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.remove(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // Each remove takes out a single copy of the key.
        if let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes
        .iter()
        .filter(|x| !still_present.contains(*x))
        .all(|x| !tree.contains(x))
        && still_present.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn removing_absent_key_changes_nothing(xs: Vec<i8>, key: i8) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().filter(|x| *x != key).collect();
    let before = tree.pre_order().copied().collect::<Vec<_>>();

    !tree.remove(&key) && tree.pre_order().copied().eq(before)
}
