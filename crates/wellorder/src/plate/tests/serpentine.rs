use super::*;

#[test]
fn serpentine_covers_plate() {
    for size in PlateSize::ALL {
        let order = order(size, TraversalPattern::Serpentine);
        assert_eq!(order.len() as u32, size.well_count());
        assert_permutation(&order);
    }
}

#[test]
fn serpentine_steps_are_adjacent() {
    for size in PlateSize::ALL {
        assert_adjacent_steps(&order(size, TraversalPattern::Serpentine));
    }
}

#[test]
fn serpentine_96_row_turns() {
    let order = order(PlateSize::Wells96, TraversalPattern::Serpentine);
    let wells = order.wells();
    assert_eq!(wells[0], "A01");
    assert_eq!(wells[11], "A12");
    assert_eq!(wells[12], "B12");
    assert_eq!(wells[23], "B01");
    assert_eq!(wells[24], "C01");
    assert_eq!(wells[95], "H01");
}

#[test]
fn serpentine_differs_from_spiral() {
    let spiral = order(PlateSize::Wells96, TraversalPattern::Spiral);
    let serpentine = order(PlateSize::Wells96, TraversalPattern::Serpentine);
    assert_ne!(spiral.wells(), serpentine.wells());
    assert_eq!(spiral.wells()[..13], serpentine.wells()[..13]);
}
