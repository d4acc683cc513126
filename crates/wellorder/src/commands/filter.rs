use anyhow::{Context, Result};
use log::info;
use wellorder::WellFilter;

use crate::cli::PlateArgs;

pub fn run(wells: &str, plate: &PlateArgs) -> Result<()> {
    let (size, pattern) = super::resolve_plate(plate)?;
    let filter = WellFilter::parse(wells, size.geometry())
        .with_context(|| format!("Invalid well filter for a {size}-well plate"))?;
    if filter.is_empty() {
        anyhow::bail!("Well filter is empty");
    }

    let order = wellorder::compute_order(size, pattern)?;
    let selected = filter.apply(&order)?;
    info!("{} of {} wells selected", selected.len(), order.len());

    for (label, well) in selected {
        println!("{label}\t{well}");
    }
    Ok(())
}
