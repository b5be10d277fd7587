//! Concrete Scenarios
//!
//! The fixed exchanges every implementation has to get right.

use cellswap::prelude::*;

/// Cells start at 100 and 200 and end swapped
#[test]
fn test_demo_cells() {
    let mut m = Cell::new(100);
    let mut n = Cell::new(200);
    m.exchange_with(&mut n);
    assert_eq!(m.get(), 200);
    assert_eq!(n.get(), 100);
}

/// Signs are carried across
#[test]
fn test_negative_and_positive() {
    let mut m = -5;
    let mut n = 5;
    exchange(&mut m, &mut n);
    assert_eq!(m, 5);
    assert_eq!(n, -5);
}

/// Equal values stay equal
#[test]
fn test_equal_values() {
    let mut m = Cell::new(42);
    let mut n = Cell::new(42);
    m.exchange_with(&mut n);
    assert_eq!((m.get(), n.get()), (42, 42));
}

/// The value-returning form agrees with the in-place one
#[test]
fn test_exchanged_rebinding() {
    let (m, n) = (100, 200);
    let (m, n) = exchanged(m, n);
    assert_eq!((m, n), (200, 100));
}

/// Two fields of one struct are distinct locations
#[test]
fn test_disjoint_fields() {
    struct Pair {
        left: i32,
        right: i32,
        untouched: i32,
    }

    let mut pair = Pair {
        left: 1,
        right: 2,
        untouched: 3,
    };
    exchange(&mut pair.left, &mut pair.right);
    assert_eq!((pair.left, pair.right, pair.untouched), (2, 1, 3));
}

/// Slots of one array, addressed by index
#[test]
fn test_exchange_at_array() {
    let mut cells = [Cell::new(100), Cell::new(0), Cell::new(200)];
    exchange_at(&mut cells, 0, 2).unwrap();
    assert_eq!(cells, [Cell::new(200), Cell::new(0), Cell::new(100)]);

    let err = exchange_at(&mut cells, 1, 1).unwrap_err();
    assert!(err.is_aliased());
    assert_eq!(cells, [Cell::new(200), Cell::new(0), Cell::new(100)]);
}
