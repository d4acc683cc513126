use anyhow::Result;

use crate::cli::{OutputFormat, PlateArgs};

pub fn run(plate: &PlateArgs, format: OutputFormat) -> Result<()> {
    let (size, pattern) = super::resolve_plate(plate)?;
    let order = wellorder::compute_order(size, pattern)?;

    match format {
        OutputFormat::Text => {
            for (position, well) in order.iter().enumerate() {
                println!("{}\t{well}", position + 1);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&order)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&order)?),
    }
    Ok(())
}
