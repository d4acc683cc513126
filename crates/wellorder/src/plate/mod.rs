pub mod codec;
pub mod error;
pub mod filter;
pub mod render;
pub mod traversal;
pub mod types;

#[cfg(test)]
mod tests;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use log::{debug, trace};

use error::Result;
use traversal::{path_to_names, serpentine_coordinates, spiral_coordinates};
use types::{PlateGeometry, PlateSize, TraversalPattern, WellOrder};

/// Row/column layout for a plate size given as a well count (96 or 384).
pub fn resolve_geometry(size: u32) -> Result<PlateGeometry> {
    PlateSize::try_from(size).map(PlateSize::geometry)
}

/// Compute the visitation order of every well on a plate.
///
/// The result depends only on the two arguments; see [`OrderCache`] for reuse.
pub fn compute_order(size: PlateSize, pattern: TraversalPattern) -> Result<WellOrder> {
    let geometry = size.geometry();
    let path = match pattern {
        TraversalPattern::Spiral => spiral_coordinates(geometry),
        TraversalPattern::Serpentine => serpentine_coordinates(geometry),
    };
    debug!(
        "computed {} order for {}-well plate ({} wells)",
        pattern,
        size,
        path.len()
    );
    Ok(WellOrder::new(size, pattern, path_to_names(&path)?))
}

/// [`compute_order`] from loosely typed input, as read from a command line or a
/// config file. Fails for sizes other than 96/384 and unknown pattern names.
pub fn order_for(size: u32, pattern: &str) -> Result<WellOrder> {
    let size = PlateSize::try_from(size)?;
    let pattern = pattern.parse()?;
    compute_order(size, pattern)
}

/// Spiral order for a plate size given as a well count.
pub fn spiral_order(size: u32) -> Result<WellOrder> {
    compute_order(PlateSize::try_from(size)?, TraversalPattern::Spiral)
}

/// Memoized orders, keyed by plate size and pattern.
///
/// Safe to share between threads; each order is computed at most once per cache.
#[derive(Debug, Default)]
pub struct OrderCache {
    orders: Mutex<HashMap<(PlateSize, TraversalPattern), Arc<WellOrder>>>,
}

impl OrderCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached order for the key, computing it on first use.
    pub fn get(&self, size: PlateSize, pattern: TraversalPattern) -> Result<Arc<WellOrder>> {
        let mut orders = self.orders.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(order) = orders.get(&(size, pattern)) {
            trace!("order cache hit for {size}/{pattern}");
            return Ok(Arc::clone(order));
        }
        let order = Arc::new(compute_order(size, pattern)?);
        orders.insert((size, pattern), Arc::clone(&order));
        Ok(order)
    }

    /// Number of cached orders.
    pub fn len(&self) -> usize {
        self.orders
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
