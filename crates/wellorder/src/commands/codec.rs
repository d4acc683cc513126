use anyhow::Result;
use colored::Colorize;
use wellorder::plate::codec::format_well;
use wellorder::{PlateSize, parse_well_name, resolve_geometry, well_name};

use crate::config::Config;

/// Print the name of a 0-based coordinate.
pub fn name(row: usize, col: usize, size: Option<u32>) -> Result<()> {
    let geometry = match size {
        Some(size) => resolve_geometry(size)?,
        None => Config::load_or_default()?
            .plate_size()
            .unwrap_or(PlateSize::Wells96)
            .geometry(),
    };
    println!("{}", well_name(geometry, row, col)?);
    Ok(())
}

/// Print the coordinate of a well name, 0-based and as printed on the plate.
pub fn parse(well: &str) -> Result<()> {
    let coord = parse_well_name(well)?;
    println!("{:<8}{}", "well:".bold(), format_well(coord)?);
    println!("{:<8}{} (row number {})", "row:".bold(), coord.row, coord.row + 1);
    println!("{:<8}{} (column number {})", "column:".bold(), coord.col, coord.col + 1);
    Ok(())
}
