use proptest::prelude::*;

use super::*;

#[test]
fn new_orders_ends() {
	let r = TextRange::new(Position::new(2, 4), Position::new(1, 7));
	assert_eq!(r.from, Position::new(1, 7));
	assert_eq!(r.to, Position::new(2, 4));
	assert!(!r.is_single_line());
}

#[test]
fn contains_excludes_end() {
	let r = TextRange::on_line(0, 3, 8);
	assert!(!r.contains(Position::new(0, 2)));
	assert!(r.contains(Position::new(0, 3)));
	assert!(!r.contains(Position::new(0, 8)));
}

#[test]
fn contains_inclusive_keeps_both_ends() {
	let r = TextRange::on_line(0, 3, 8);
	assert!(r.contains_inclusive(Position::new(0, 3)));
	assert!(r.contains_inclusive(Position::new(0, 8)));
	assert!(!r.contains_inclusive(Position::new(0, 9)));
	assert!(!r.contains_inclusive(Position::new(1, 0)));
}

#[test]
fn touching_ranges_do_not_overlap() {
	let a = TextRange::on_line(0, 0, 5);
	let b = TextRange::on_line(0, 5, 9);
	assert!(!a.overlaps(&b));
	assert!(a.overlaps(&TextRange::on_line(0, 4, 9)));
}

#[test]
fn multi_line_overlap() {
	let a = TextRange::new(Position::new(0, 10), Position::new(2, 1));
	assert!(a.overlaps(&TextRange::on_line(1, 0, 3)));
	assert!(!a.overlaps(&TextRange::on_line(2, 1, 3)));
}

#[test]
fn empty_ranges_overlap_at_same_point() {
	let a = TextRange::on_line(3, 2, 2);
	assert!(a.overlaps(&TextRange::on_line(3, 2, 2)));
	assert!(!a.overlaps(&TextRange::on_line(3, 3, 3)));
}

fn arb_range() -> impl Strategy<Value = TextRange> {
	((0usize..4, 0usize..12), (0usize..4, 0usize..12)).prop_map(|(a, b)| TextRange::new(a, b))
}

proptest! {
	/// Overlap is symmetric.
	#[test]
	fn prop_overlap_symmetric(a in arb_range(), b in arb_range()) {
		prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
	}
}
