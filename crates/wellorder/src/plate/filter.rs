use std::collections::HashSet;

use super::codec::{format_well, parse_well_on};
use super::error::{PlateError, Result};
use super::types::{PlateGeometry, WellCoordinate, WellOrder};

/// A set of wells selected for an analysis job, e.g. `"A01,B02, D04"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WellFilter {
    wells: Vec<WellCoordinate>,
}

impl WellFilter {
    /// Parse a comma-separated well list against a plate geometry.
    ///
    /// Entries are trimmed and empty entries ignored, so an empty string is an
    /// empty filter. Each entry must name a well on the plate, at most once.
    pub fn parse(text: &str, geometry: PlateGeometry) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut wells = Vec::new();

        for entry in text.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let coord = parse_well_on(entry, geometry)?;
            if !seen.insert(coord) {
                return Err(PlateError::DuplicateWell(format_well(coord)?));
            }
            wells.push(coord);
        }

        Ok(Self { wells })
    }

    /// Wells in the order they were listed.
    pub fn wells(&self) -> &[WellCoordinate] {
        &self.wells
    }

    pub fn len(&self) -> usize {
        self.wells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wells.is_empty()
    }

    pub fn contains(&self, coord: WellCoordinate) -> bool {
        self.wells.contains(&coord)
    }

    /// Canonical names of the filtered wells, in listing order.
    pub fn names(&self) -> Result<Vec<String>> {
        self.wells.iter().map(|&c| format_well(c)).collect()
    }

    /// The filtered wells paired with their 1-based labels, in traversal order.
    pub fn apply(&self, order: &WellOrder) -> Result<Vec<(usize, String)>> {
        let selected: HashSet<String> = self.names()?.into_iter().collect();
        Ok(order
            .iter()
            .enumerate()
            .filter(|(_, well)| selected.contains(*well))
            .map(|(position, well)| (position + 1, well.to_string()))
            .collect())
    }
}
