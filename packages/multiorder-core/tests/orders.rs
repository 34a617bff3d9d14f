use multiorder_core::{Cursor, Error, OrderKind, OrderedBag};

/// Walk `begin` until it equals `end` using the explicit cursor protocol.
fn walk<T: Clone>(mut begin: Cursor<T>, end: &Cursor<T>) -> Vec<T> {
    let mut out = Vec::new();
    while begin != *end {
        out.push(begin.get_current().unwrap());
        begin.advance().unwrap();
    }
    out
}

fn all_orders<T: Clone + multiorder_core::Orderable>(bag: &OrderedBag<T>) -> [Vec<T>; 6] {
    [
        walk(bag.begin_ascending_order(), &bag.end_ascending_order()),
        walk(bag.begin_descending_order(), &bag.end_descending_order()),
        walk(bag.begin_side_cross_order(), &bag.end_side_cross_order()),
        walk(bag.begin_reverse_order(), &bag.end_reverse_order()),
        walk(bag.begin_insertion_order(), &bag.end_insertion_order()),
        walk(bag.begin_middle_out_order(), &bag.end_middle_out_order()),
    ]
}

#[test]
fn odd_sized_int_bag() {
    let bag: OrderedBag<i32> = vec![4, 9, 3, 11, 5].into();
    let [asc, desc, side, rev, ins, mid] = all_orders(&bag);
    assert_eq!(asc, vec![3, 4, 5, 9, 11]);
    assert_eq!(desc, vec![11, 9, 5, 4, 3]);
    assert_eq!(side, vec![3, 11, 4, 9, 5]);
    assert_eq!(rev, vec![5, 11, 3, 9, 4]);
    assert_eq!(ins, vec![4, 9, 3, 11, 5]);
    assert_eq!(mid, vec![3, 9, 11, 4, 5]);
}

#[test]
fn even_sized_int_bag() {
    let bag: OrderedBag<i32> = vec![10, 2, 7, 1, 6, 12].into();
    let [asc, desc, side, rev, ins, mid] = all_orders(&bag);
    assert_eq!(asc, vec![1, 2, 6, 7, 10, 12]);
    assert_eq!(desc, vec![12, 10, 7, 6, 2, 1]);
    assert_eq!(side, vec![1, 12, 2, 10, 6, 7]);
    assert_eq!(rev, vec![12, 6, 1, 7, 2, 10]);
    assert_eq!(ins, vec![10, 2, 7, 1, 6, 12]);
    assert_eq!(mid, vec![1, 7, 6, 2, 12, 10]);
}

#[test]
fn double_bag() {
    let bag: OrderedBag<f64> = vec![5.5, 3.3, 8.8, 1.1, 7.7].into();
    let [asc, desc, side, rev, ins, mid] = all_orders(&bag);
    assert_eq!(asc, vec![1.1, 3.3, 5.5, 7.7, 8.8]);
    assert_eq!(desc, vec![8.8, 7.7, 5.5, 3.3, 1.1]);
    assert_eq!(side, vec![1.1, 8.8, 3.3, 7.7, 5.5]);
    assert_eq!(rev, vec![7.7, 1.1, 8.8, 3.3, 5.5]);
    assert_eq!(ins, vec![5.5, 3.3, 8.8, 1.1, 7.7]);
    assert_eq!(mid, vec![8.8, 3.3, 1.1, 5.5, 7.7]);
}

#[test]
fn string_bag() {
    let bag: OrderedBag<&str> = vec!["pear", "apple", "fig", "kiwi"].into();
    let [asc, desc, side, rev, ins, mid] = all_orders(&bag);
    assert_eq!(asc, vec!["apple", "fig", "kiwi", "pear"]);
    assert_eq!(desc, vec!["pear", "kiwi", "fig", "apple"]);
    assert_eq!(side, vec!["apple", "pear", "fig", "kiwi"]);
    assert_eq!(rev, vec!["kiwi", "fig", "apple", "pear"]);
    assert_eq!(ins, vec!["pear", "apple", "fig", "kiwi"]);
    assert_eq!(mid, vec!["fig", "apple", "kiwi", "pear"]);
}

#[test]
fn char_bag_with_duplicates() {
    let bag: OrderedBag<char> = "banana".chars().collect();
    let [asc, desc, side, rev, _, mid] = all_orders(&bag);
    assert_eq!(asc, vec!['a', 'a', 'a', 'b', 'n', 'n']);
    assert_eq!(desc, vec!['n', 'n', 'b', 'a', 'a', 'a']);
    assert_eq!(side, vec!['a', 'n', 'a', 'n', 'a', 'b']);
    assert_eq!(rev, vec!['a', 'n', 'a', 'n', 'a', 'b']);
    assert_eq!(mid, vec!['a', 'n', 'n', 'a', 'a', 'b']);
}

#[test]
fn single_element_is_the_same_in_every_order() {
    let bag: OrderedBag<i32> = vec![42].into();
    for kind in OrderKind::ALL {
        assert_eq!(bag.ordered(kind), vec![42], "{kind}");
        assert_eq!(bag.try_ordered(kind), Ok(vec![42]), "{kind}");
    }
}

#[test]
fn empty_bag_begin_equals_end_for_every_order() {
    let bag: OrderedBag<i32> = OrderedBag::new();
    for kind in OrderKind::ALL {
        let begin = bag.begin(kind);
        let end = bag.end(kind);
        assert_eq!(begin, end, "{kind}");
        assert_eq!(
            begin.get_current(),
            Err(Error::OutOfRange { position: 0, len: 0 })
        );
        assert!(end.get_current().is_err());
        assert_eq!(bag.traverse(kind).count(), 0);
    }
}

#[test]
fn reverse_mirrors_insertion() {
    let bag: OrderedBag<u16> = vec![8, 0, 3, 3, 9, 1, 4].into();
    let mut insertion = bag.ordered(OrderKind::Insertion);
    insertion.reverse();
    assert_eq!(bag.ordered(OrderKind::Reverse), insertion);
}
