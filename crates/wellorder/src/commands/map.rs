use std::io::IsTerminal;

use anyhow::Result;
use colored::Colorize;

use crate::cli::PlateArgs;

pub fn run(plate: &PlateArgs, color: bool) -> Result<()> {
    let (size, pattern) = super::resolve_plate(plate)?;
    let order = wellorder::compute_order(size, pattern)?;
    let color = color && std::io::stdout().is_terminal();

    println!(
        "{} {}-well plate, {} order",
        "Plate map:".bold(),
        size,
        pattern
    );
    print!("{}", wellorder::render_plate_map(&order, color)?);
    Ok(())
}
