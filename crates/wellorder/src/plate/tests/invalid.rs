use super::*;
use crate::plate::error::{ErrorKind, PlateError};
use crate::plate::{order_for, resolve_geometry};

#[test]
fn unsupported_plate_size() {
    let err = resolve_geometry(100).unwrap_err();
    assert_eq!(err, PlateError::UnsupportedPlateSize(100));
    assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);
}

#[test]
fn no_silent_default_size() {
    for size in [0, 1, 6, 24, 95, 97, 1536] {
        assert!(resolve_geometry(size).is_err(), "size {size} accepted");
        assert!(spiral_order(size).is_err(), "size {size} produced an order");
    }
}

#[test]
fn supported_geometries() {
    let g96 = resolve_geometry(96).unwrap();
    assert_eq!((g96.rows(), g96.cols()), (8, 12));
    let g384 = resolve_geometry(384).unwrap();
    assert_eq!((g384.rows(), g384.cols()), (16, 24));
    for size in PlateSize::ALL {
        assert_eq!(size.geometry().len() as u32, size.well_count());
    }
}

#[test]
fn unknown_pattern_is_an_error() {
    let err = order_for(96, "zigzag").unwrap_err();
    assert_eq!(err, PlateError::UnknownPattern("zigzag".to_string()));
    assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);
    assert!(order_for(96, "").is_err());
}

#[test]
fn pattern_names_are_case_insensitive() {
    assert_eq!(order_for(96, "SPIRAL").unwrap(), spiral_order(96).unwrap());
    assert_eq!(
        order_for(384, "Serpentine").unwrap().pattern(),
        TraversalPattern::Serpentine
    );
}

#[test]
fn size_checked_before_pattern() {
    assert_eq!(
        order_for(100, "zigzag").unwrap_err(),
        PlateError::UnsupportedPlateSize(100)
    );
}

#[test]
fn error_messages_name_the_input() {
    assert!(
        PlateError::UnsupportedPlateSize(100)
            .to_string()
            .contains("100")
    );
    assert!(
        PlateError::MalformedWellName("X9Y".into())
            .to_string()
            .contains("X9Y")
    );
    assert_eq!(ErrorKind::InvalidConfiguration.to_string(), "invalid_configuration");
}
