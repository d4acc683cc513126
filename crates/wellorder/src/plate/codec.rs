//! Well-name codec.
//!
//! A well name is a row letter followed by a zero-padded, 1-based column number:
//! `A01` is the top-left well, `H12` the bottom-right well of a 96-well plate.
//!
//! Inside the crate rows and columns are 0-based ([`WellCoordinate`]). The 1-based
//! numbers printed on the plate are only exposed through the `*_number_*` functions.

use std::sync::LazyLock;

use regex::Regex;

use super::error::{PlateError, Result};
use super::types::{PlateGeometry, WellCoordinate};

/// Row letters, top to bottom. Sixteen rows covers a 384-well plate.
const ROW_LETTERS: &[u8; 16] = b"ABCDEFGHIJKLMNOP";

static WELL_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z])([0-9]{1,2})$").expect("valid well-name regex"));

/// Letter for a 0-based row index.
pub fn row_letter(row: usize) -> Result<char> {
    ROW_LETTERS
        .get(row)
        .map(|&b| b as char)
        .ok_or(PlateError::RowOutOfAlphabet(row))
}

/// Canonical name of the well at the 0-based `(row, col)` of `geometry`.
pub fn well_name(geometry: PlateGeometry, row: usize, col: usize) -> Result<String> {
    let coord = WellCoordinate::new(row, col);
    geometry.check(coord)?;
    format_well(coord)
}

/// Canonical name of a coordinate, without a plate bounds check.
pub fn format_well(coord: WellCoordinate) -> Result<String> {
    let letter = row_letter(coord.row)?;
    Ok(format!("{}{:02}", letter, coord.col + 1))
}

/// Parse a well name into its 0-based coordinate.
///
/// Accepts one- or two-digit column numbers (`A1` and `A01` are the same well).
/// Rejects lowercase letters, letters past `P`, column `0` and anything else
/// that is not a letter followed by digits.
pub fn parse_well_name(name: &str) -> Result<WellCoordinate> {
    let malformed = || PlateError::MalformedWellName(name.to_string());

    let caps = WELL_NAME_RE.captures(name).ok_or_else(malformed)?;
    let letter = caps[1].as_bytes()[0];
    let row = ROW_LETTERS
        .iter()
        .position(|&b| b == letter)
        .ok_or_else(malformed)?;
    let number: usize = caps[2].parse().map_err(|_| malformed())?;
    if number == 0 {
        return Err(malformed());
    }

    Ok(WellCoordinate::new(row, number - 1))
}

/// Parse a well name and check it lies on `geometry`.
pub fn parse_well_on(name: &str, geometry: PlateGeometry) -> Result<WellCoordinate> {
    let coord = parse_well_name(name)?;
    geometry.check(coord)?;
    Ok(coord)
}

/// 1-based row number of a well name: `A` is 1.
pub fn row_number_from_well_name(name: &str) -> Result<usize> {
    parse_well_name(name).map(|c| c.row + 1)
}

/// 1-based column number of a well name: `A01` is 1.
pub fn col_number_from_well_name(name: &str) -> Result<usize> {
    parse_well_name(name).map(|c| c.col + 1)
}

/// Rewrite a well name in canonical form (`B7` becomes `B07`).
pub fn normalize_well_name(name: &str) -> Result<String> {
    parse_well_name(name).and_then(format_well)
}
