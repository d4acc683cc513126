use super::*;
use crate::plate::render::render_plate_map;

#[test]
fn plate_map_96_spiral() {
    let order = spiral_order(96).unwrap();
    let map = render_plate_map(&order, false).unwrap();
    let lines: Vec<&str> = map.lines().collect();
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], "  01 02 03 04 05 06 07 08 09 10 11 12");
    assert_eq!(lines[1], "A  1  2  3  4  5  6  7  8  9 10 11 12");
    assert_eq!(lines[8], "H 30 29 28 27 26 25 24 23 22 21 20 19");
}

#[test]
fn plate_map_384_widens_cells() {
    let order = spiral_order(384).unwrap();
    let map = render_plate_map(&order, false).unwrap();
    let lines: Vec<&str> = map.lines().collect();
    assert_eq!(lines.len(), 17);
    assert!(lines[0].starts_with("   01  02"));
    assert!(lines[1].starts_with("A   1   2   3"));
    assert!(lines[16].starts_with('P'));
    assert!(lines.iter().all(|l| l.len() == 1 + 24 * 4));
}

#[test]
fn plate_map_serpentine() {
    let order = order(PlateSize::Wells96, TraversalPattern::Serpentine);
    let map = render_plate_map(&order, false).unwrap();
    let line_b = map.lines().nth(2).unwrap();
    assert_eq!(line_b, "B 24 23 22 21 20 19 18 17 16 15 14 13");
}

#[test]
fn plate_map_colored_keeps_layout() {
    let order = spiral_order(96).unwrap();
    let map = render_plate_map(&order, true).unwrap();
    assert_eq!(map.lines().count(), 9);
    assert!(map.ends_with('\n'));
    for letter in ["A", "D", "H"] {
        assert!(map.lines().any(|l| l.contains(letter)));
    }
    assert!(map.contains(" 96"));
}
