//! Visitation orders and well names for 96- and 384-well microplates.
//!
//! ```
//! use wellorder::spiral_order;
//!
//! let order = spiral_order(96).unwrap();
//! assert_eq!(order.len(), 96);
//! assert_eq!(order.wells()[0], "A01");
//! assert_eq!(order.label_of("B12"), Some(13));
//! ```

pub mod plate;

pub use plate::codec::{
    col_number_from_well_name, normalize_well_name, parse_well_name, row_number_from_well_name,
    well_name,
};
pub use plate::error::{ErrorKind, PlateError};
pub use plate::filter::WellFilter;
pub use plate::render::render_plate_map;
pub use plate::types::{PlateGeometry, PlateSize, TraversalPattern, WellCoordinate, WellOrder};
pub use plate::{OrderCache, compute_order, order_for, resolve_geometry, spiral_order};
