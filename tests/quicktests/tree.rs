use int_bst::BinarySearchTree;

use std::collections::BTreeSet;

fn tree_from(xs: &[i8]) -> BinarySearchTree {
    xs.iter().map(|&x| i32::from(x)).collect()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = tree_from(&xs);

    xs.iter().all(|&x| tree.contains(i32::from(x)))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = tree_from(&xs);
    let added: BTreeSet<_> = xs.into_iter().collect();
    let nots: BTreeSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|&x| !tree.search(i32::from(x)))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = tree_from(&xs);
    for delete in &deletes {
        tree.delete(i32::from(*delete));
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|&x| !tree.contains(i32::from(x)))
        && still_present.iter().all(|&x| tree.contains(i32::from(x)))
}

#[quickcheck]
fn in_order_is_strictly_ascending(xs: Vec<i32>, deletes: Vec<i32>) -> bool {
    let mut tree: BinarySearchTree = xs.into_iter().collect();
    for delete in deletes {
        tree.delete(delete);
    }

    let keys = tree.in_order_vec();
    keys.len() == tree.len() && keys.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn in_order_ignores_insertion_order(xs: Vec<i8>) -> bool {
    let forwards = tree_from(&xs);
    let mut reversed = xs.clone();
    reversed.reverse();
    let backwards = tree_from(&reversed);

    let sorted: Vec<i32> = xs
        .iter()
        .map(|&x| i32::from(x))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    forwards.in_order_vec() == sorted && backwards.in_order_vec() == sorted && forwards == backwards
}

#[quickcheck]
fn insert_is_idempotent(xs: Vec<i8>, repeat: i8) -> bool {
    let mut once = tree_from(&xs);
    once.insert(i32::from(repeat));

    let mut twice = once.clone();
    let inserted_again = twice.insert(i32::from(repeat));

    !inserted_again
        && once.in_order_vec() == twice.in_order_vec()
        && once.pre_order().eq(twice.pre_order())
}

#[quickcheck]
fn height_bounds(xs: Vec<i8>) -> bool {
    let tree = tree_from(&xs);

    // A tree of n nodes has at least log2(n + 1) levels and at most n.
    let n = tree.len();
    let min_height = (usize::BITS - n.leading_zeros()) as usize;
    tree.height() <= n && tree.height() >= min_height
}
