use battleship_duel::{Coordinate, Direction};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_vector_arithmetic() {
    let a = Coordinate::new(2, 3);
    let b = Coordinate::new(-1, 4);
    assert_eq!(a + b, Coordinate::new(1, 7));
    assert_eq!(a * 3, Coordinate::new(6, 9));
    assert_eq!(a * b, Coordinate::new(-2, 12));
}

#[test]
fn test_direction_offsets_in_try_order() {
    let offsets: Vec<_> = Direction::ALL.iter().map(|d| d.offset()).collect();
    assert_eq!(
        offsets,
        vec![
            Coordinate::new(-1, 0),
            Coordinate::new(1, 0),
            Coordinate::new(0, -1),
            Coordinate::new(0, 1),
        ]
    );
}

#[test]
fn test_random_in_range_reaches_one_past_the_edge() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut saw_edge = false;
    for _ in 0..2_000 {
        let c = Coordinate::random_in_range(&mut rng, 6);
        assert!((0..=6).contains(&c.row));
        assert!((0..=6).contains(&c.col));
        if c.row == 6 || c.col == 6 {
            assert!(!c.is_in_bounds(6));
            saw_edge = true;
        }
    }
    assert!(saw_edge, "inclusive upper bound should be drawn eventually");
}

proptest! {
    #[test]
    fn in_bounds_iff_both_axes_inside(size in 1usize..20, row in -5i32..25, col in -5i32..25) {
        let inside = row >= 0 && col >= 0 && (row as usize) < size && (col as usize) < size;
        prop_assert_eq!(Coordinate::new(row, col).is_in_bounds(size), inside);
    }
}
