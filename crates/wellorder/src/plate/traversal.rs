use super::codec::format_well;
use super::error::Result;
use super::types::{Direction, PlateGeometry, WellCoordinate};

/// Visitation index for each well of one traversal, `None` while unvisited.
///
/// Lives for a single traversal call and is never shared.
struct VisitedGrid {
    geometry: PlateGeometry,
    order: Vec<Option<usize>>,
    next: usize,
}

impl VisitedGrid {
    fn new(geometry: PlateGeometry) -> Self {
        Self {
            geometry,
            order: vec![None; geometry.len()],
            next: 0,
        }
    }

    fn is_visited(&self, coord: WellCoordinate) -> bool {
        self.geometry
            .index_of(coord)
            .is_some_and(|i| self.order[i].is_some())
    }

    /// Mark an in-bounds, unvisited coordinate and return its visitation index.
    fn visit(&mut self, coord: WellCoordinate) -> Option<usize> {
        let i = self.geometry.index_of(coord)?;
        if self.order[i].is_some() {
            return None;
        }
        let index = self.next;
        self.order[i] = Some(index);
        self.next += 1;
        Some(index)
    }

    fn visited_count(&self) -> usize {
        self.next
    }
}

/// One pending step of the spiral: enter `coord` while travelling in `direction`.
#[derive(Debug, Clone, Copy)]
struct Frame {
    direction: Direction,
    coord: WellCoordinate,
}

/// Inward spiral over the plate, starting at `A01` heading right.
///
/// Each entered well is numbered, then the walk continues into the travel
/// direction's candidate list (see [`Direction::spiral_candidates`]). Targets that
/// are off the plate or already visited are skipped. The explicit stack yields the
/// same pre-order as the equivalent recursive flood fill: candidates are pushed in
/// reverse so the highest-priority one is popped first.
pub fn spiral_coordinates(geometry: PlateGeometry) -> Vec<WellCoordinate> {
    let mut visited = VisitedGrid::new(geometry);
    let mut path = Vec::with_capacity(geometry.len());
    let mut stack = vec![Frame {
        direction: Direction::Right,
        coord: WellCoordinate::new(0, 0),
    }];

    while let Some(frame) = stack.pop() {
        if !geometry.contains(frame.coord) || visited.is_visited(frame.coord) {
            continue;
        }
        visited.visit(frame.coord);
        path.push(frame.coord);

        for &dir in frame.direction.spiral_candidates().iter().rev() {
            // Stepping off the top or left edge yields no frame at all.
            if let Some(coord) = frame.coord.step(dir) {
                stack.push(Frame {
                    direction: dir,
                    coord,
                });
            }
        }
    }

    debug_assert_eq!(visited.visited_count(), path.len());
    path
}

/// Row-by-row walk that reverses direction on every row: `A01..A12`, `B12..B01`, ...
pub fn serpentine_coordinates(geometry: PlateGeometry) -> Vec<WellCoordinate> {
    let mut path = Vec::with_capacity(geometry.len());
    for row in 0..geometry.rows() {
        if row % 2 == 0 {
            path.extend((0..geometry.cols()).map(|col| WellCoordinate::new(row, col)));
        } else {
            path.extend(
                (0..geometry.cols())
                    .rev()
                    .map(|col| WellCoordinate::new(row, col)),
            );
        }
    }
    path
}

/// Render a coordinate path as well names.
pub fn path_to_names(path: &[WellCoordinate]) -> Result<Vec<String>> {
    path.iter().map(|&c| format_well(c)).collect()
}
