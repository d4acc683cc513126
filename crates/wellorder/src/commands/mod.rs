pub mod check;
pub mod codec;
pub mod completion;
pub mod config;
pub mod filter;
pub mod map;
pub mod order;

use anyhow::Result;
use log::debug;
use wellorder::{PlateSize, TraversalPattern};

use crate::cli::PlateArgs;
use crate::config::Config;

/// Plate size and pattern for a command: flags first, then the config file,
/// then 96 wells / spiral.
pub fn select_plate(args: &PlateArgs, config: &Config) -> Result<(PlateSize, TraversalPattern)> {
    let size = match args.size {
        Some(size) => PlateSize::try_from(size)?,
        None => config.plate_size().unwrap_or(PlateSize::Wells96),
    };
    let pattern = match &args.pattern {
        Some(pattern) => pattern.parse()?,
        None => config.pattern().unwrap_or(TraversalPattern::Spiral),
    };
    debug!("selected {size}-well plate, {pattern} pattern");
    Ok((size, pattern))
}

/// [`select_plate`] against the user's config file.
pub fn resolve_plate(args: &PlateArgs) -> Result<(PlateSize, TraversalPattern)> {
    select_plate(args, &Config::load_or_default()?)
}
