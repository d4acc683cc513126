use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{PlateError, Result};

/// Supported microplate formats, by total well count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum PlateSize {
    Wells96,
    Wells384,
}

impl PlateSize {
    /// All supported plate sizes, smallest first.
    pub const ALL: [PlateSize; 2] = [PlateSize::Wells96, PlateSize::Wells384];

    /// Total number of wells on the plate.
    pub fn well_count(self) -> u32 {
        match self {
            PlateSize::Wells96 => 96,
            PlateSize::Wells384 => 384,
        }
    }

    /// Row/column layout of the plate.
    pub fn geometry(self) -> PlateGeometry {
        match self {
            PlateSize::Wells96 => PlateGeometry { rows: 8, cols: 12 },
            PlateSize::Wells384 => PlateGeometry { rows: 16, cols: 24 },
        }
    }
}

impl TryFrom<u32> for PlateSize {
    type Error = PlateError;

    fn try_from(size: u32) -> Result<Self> {
        match size {
            96 => Ok(PlateSize::Wells96),
            384 => Ok(PlateSize::Wells384),
            other => Err(PlateError::UnsupportedPlateSize(other)),
        }
    }
}

impl From<PlateSize> for u32 {
    fn from(size: PlateSize) -> Self {
        size.well_count()
    }
}

impl fmt::Display for PlateSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.well_count())
    }
}

/// Row/column layout of a plate. Only obtainable from a [`PlateSize`], so
/// `rows * cols` always equals a supported well count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlateGeometry {
    rows: usize,
    cols: usize,
}

impl PlateGeometry {
    pub fn rows(self) -> usize {
        self.rows
    }

    pub fn cols(self) -> usize {
        self.cols
    }

    /// Number of wells (`rows * cols`).
    pub fn len(self) -> usize {
        self.rows * self.cols
    }

    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Whether the coordinate lies within `[0, rows) x [0, cols)`.
    pub fn contains(self, coord: WellCoordinate) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// Row-major index of a coordinate, if it is on the plate.
    pub fn index_of(self, coord: WellCoordinate) -> Option<usize> {
        self.contains(coord).then_some(coord.row * self.cols + coord.col)
    }

    /// Fails with [`PlateError::OutOfBounds`] unless the coordinate is on the plate.
    pub fn check(self, coord: WellCoordinate) -> Result<()> {
        if self.contains(coord) {
            Ok(())
        } else {
            Err(PlateError::OutOfBounds {
                row: coord.row,
                col: coord.col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Every coordinate on the plate in row-major order.
    pub fn coordinates(self) -> impl Iterator<Item = WellCoordinate> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| WellCoordinate { row, col }))
    }
}

/// Zero-based well position: `row` 0 is `A`, `col` 0 is `01`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WellCoordinate {
    pub row: usize,
    pub col: usize,
}

impl WellCoordinate {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step one well in the given direction. `None` when stepping off the top or left
    /// edge; the bottom and right edges are the geometry's business.
    pub fn step(self, dir: Direction) -> Option<Self> {
        match dir {
            Direction::Up => self.row.checked_sub(1).map(|row| Self { row, col: self.col }),
            Direction::Down => Some(Self {
                row: self.row + 1,
                col: self.col,
            }),
            Direction::Left => self.col.checked_sub(1).map(|col| Self { row: self.row, col }),
            Direction::Right => Some(Self {
                row: self.row,
                col: self.col + 1,
            }),
        }
    }

    /// Manhattan distance in wells.
    pub fn manhattan_to(self, other: WellCoordinate) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Whether the two wells share a grid edge.
    pub fn is_adjacent(self, other: WellCoordinate) -> bool {
        self.manhattan_to(other) == 1
    }
}

impl fmt::Display for WellCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Direction of travel across the plate. Up is towards row `A`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Directions the spiral tries after entering a well travelling in `self`,
    /// in priority order. The inward turn comes first, then straight on.
    pub fn spiral_candidates(self) -> [Direction; 4] {
        match self {
            Direction::Right => [
                Direction::Up,
                Direction::Right,
                Direction::Down,
                Direction::Left,
            ],
            Direction::Up => [
                Direction::Left,
                Direction::Up,
                Direction::Right,
                Direction::Down,
            ],
            Direction::Down => [
                Direction::Right,
                Direction::Down,
                Direction::Left,
                Direction::Up,
            ],
            Direction::Left => [
                Direction::Down,
                Direction::Left,
                Direction::Up,
                Direction::Right,
            ],
        }
    }
}

/// How the wells of a plate are walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraversalPattern {
    /// Inward clockwise spiral from `A01`.
    Spiral,
    /// Row by row, reversing direction on every row.
    Serpentine,
}

impl TraversalPattern {
    pub const ALL: [TraversalPattern; 2] = [TraversalPattern::Spiral, TraversalPattern::Serpentine];

    pub fn as_str(self) -> &'static str {
        match self {
            TraversalPattern::Spiral => "spiral",
            TraversalPattern::Serpentine => "serpentine",
        }
    }
}

impl FromStr for TraversalPattern {
    type Err = PlateError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "spiral" => Ok(TraversalPattern::Spiral),
            "serpentine" => Ok(TraversalPattern::Serpentine),
            _ => Err(PlateError::UnknownPattern(s.to_string())),
        }
    }
}

impl fmt::Display for TraversalPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A complete visitation order over the wells of one plate.
///
/// Holds every well of the plate exactly once. Positions are 0-based; the display
/// label of a well is its position plus one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WellOrder {
    plate_size: PlateSize,
    pattern: TraversalPattern,
    wells: Vec<String>,
}

impl WellOrder {
    pub(crate) fn new(plate_size: PlateSize, pattern: TraversalPattern, wells: Vec<String>) -> Self {
        debug_assert_eq!(wells.len(), plate_size.geometry().len());
        Self {
            plate_size,
            pattern,
            wells,
        }
    }

    pub fn plate_size(&self) -> PlateSize {
        self.plate_size
    }

    pub fn geometry(&self) -> PlateGeometry {
        self.plate_size.geometry()
    }

    pub fn pattern(&self) -> TraversalPattern {
        self.pattern
    }

    /// Well names in visitation order.
    pub fn wells(&self) -> &[String] {
        &self.wells
    }

    pub fn len(&self) -> usize {
        self.wells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.wells.iter().map(String::as_str)
    }

    /// 0-based position of a well in the order.
    pub fn position_of(&self, well: &str) -> Option<usize> {
        self.wells.iter().position(|w| w == well)
    }

    /// 1-based display label of a well.
    pub fn label_of(&self, well: &str) -> Option<usize> {
        self.position_of(well).map(|p| p + 1)
    }

    /// Display labels laid out on the plate: `grid[row][col]` is the 1-based label
    /// of the well at that coordinate.
    pub fn label_grid(&self) -> Vec<Vec<usize>> {
        let geometry = self.geometry();
        let mut grid = vec![vec![0; geometry.cols()]; geometry.rows()];
        for (position, well) in self.wells.iter().enumerate() {
            // Names were produced by the codec for this geometry.
            if let Ok(coord) = super::codec::parse_well_name(well) {
                if geometry.contains(coord) {
                    grid[coord.row][coord.col] = position + 1;
                }
            }
        }
        grid
    }
}

impl<'a> IntoIterator for &'a WellOrder {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.wells.iter()
    }
}
