mod invalid;
mod render;
mod serpentine;

use std::collections::HashSet;

use super::codec::{parse_well_name, well_name};
use super::types::{PlateSize, TraversalPattern, WellCoordinate, WellOrder};
use super::{compute_order, spiral_order};

/// Helper to compute an order that must succeed.
fn order(size: PlateSize, pattern: TraversalPattern) -> WellOrder {
    compute_order(size, pattern)
        .unwrap_or_else(|e| panic!("{size}-well {pattern} order failed: {e}"))
}

/// Coordinates of every well in an order.
fn coords_of(order: &WellOrder) -> Vec<WellCoordinate> {
    order
        .iter()
        .map(|w| parse_well_name(w).unwrap_or_else(|e| panic!("bad well {w}: {e}")))
        .collect()
}

/// Assert the order names every well of its plate exactly once.
fn assert_permutation(order: &WellOrder) {
    let geometry = order.geometry();
    assert_eq!(order.len(), geometry.len(), "wrong number of wells");

    let expected: HashSet<String> = geometry
        .coordinates()
        .map(|c| well_name(geometry, c.row, c.col).unwrap())
        .collect();
    let actual: HashSet<String> = order.iter().map(str::to_string).collect();

    assert_eq!(actual.len(), order.len(), "order contains duplicates");
    assert_eq!(actual, expected, "order is not a permutation of the plate");
}

/// Assert every step of the order moves to an edge-adjacent well.
fn assert_adjacent_steps(order: &WellOrder) {
    let coords = coords_of(order);
    for (i, pair) in coords.windows(2).enumerate() {
        assert!(
            pair[0].is_adjacent(pair[1]),
            "step {} -> {} ({} -> {}) is not between adjacent wells",
            i,
            i + 1,
            order.wells()[i],
            order.wells()[i + 1]
        );
    }
}
