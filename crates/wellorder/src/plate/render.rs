use colored::Colorize;

use super::codec::row_letter;
use super::error::Result;
use super::types::WellOrder;

/// Lay the order out as a plate map: one line per row letter, one column per
/// column number, each cell holding the well's 1-based display label.
///
/// ```text
///   01 02 03
/// A  1  2  3
/// B  8  9  4
/// ```
///
/// With `color`, the header is dimmed and the first and last wells of the walk
/// are highlighted.
pub fn render_plate_map(order: &WellOrder, color: bool) -> Result<String> {
    let grid = order.label_grid();
    let last = order.len();
    let width = last.to_string().len().max(2) + 1;
    let mut out = String::new();

    let mut header = String::from(" ");
    for col in 1..=order.geometry().cols() {
        header.push_str(&format!("{:>width$}", format!("{col:02}")));
    }
    if color {
        out.push_str(&header.dimmed().to_string());
    } else {
        out.push_str(&header);
    }
    out.push('\n');

    for (row, labels) in grid.iter().enumerate() {
        let letter = row_letter(row)?;
        if color {
            out.push_str(&letter.to_string().bold().to_string());
        } else {
            out.push(letter);
        }
        for &label in labels {
            let cell = format!("{label:>width$}");
            if color && label == 1 {
                out.push_str(&cell.green().bold().to_string());
            } else if color && label == last {
                out.push_str(&cell.red().bold().to_string());
            } else {
                out.push_str(&cell);
            }
        }
        out.push('\n');
    }

    Ok(out)
}
