use std::collections::HashSet;

use anyhow::Result;
use colored::Colorize;
use log::info;
use rayon::prelude::*;
use wellorder::{PlateSize, TraversalPattern, WellOrder, compute_order, parse_well_name};

/// Outcome of verifying one plate size / pattern combination.
#[derive(Debug)]
pub struct CheckOutcome {
    pub size: PlateSize,
    pub pattern: TraversalPattern,
    pub problems: Vec<String>,
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        self.problems.is_empty()
    }
}

pub fn run(quiet: bool) -> Result<()> {
    let combinations: Vec<(PlateSize, TraversalPattern)> = PlateSize::ALL
        .iter()
        .flat_map(|&size| TraversalPattern::ALL.iter().map(move |&pattern| (size, pattern)))
        .collect();
    info!("checking {} plate/pattern combinations", combinations.len());

    let outcomes: Vec<CheckOutcome> = combinations
        .par_iter()
        .map(|&(size, pattern)| verify(size, pattern))
        .collect();

    let mut failed = 0;
    for outcome in &outcomes {
        let label = format!("{}-well {}", outcome.size, outcome.pattern);
        if outcome.passed() {
            if !quiet {
                println!("{} {label}", "ok".green().bold());
            }
        } else {
            failed += 1;
            println!("{} {label}", "FAILED".red().bold());
            for problem in &outcome.problems {
                println!("    {problem}");
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {} combinations failed", outcomes.len());
    }
    Ok(())
}

/// Check that the order visits every well once, starts at `A01` and only
/// moves between adjacent wells.
pub fn verify(size: PlateSize, pattern: TraversalPattern) -> CheckOutcome {
    let problems = match compute_order(size, pattern) {
        Ok(order) => order_problems(&order),
        Err(e) => vec![format!("could not compute order: {e}")],
    };
    CheckOutcome {
        size,
        pattern,
        problems,
    }
}

fn order_problems(order: &WellOrder) -> Vec<String> {
    let mut problems = Vec::new();
    let expected = order.plate_size().well_count() as usize;

    if order.len() != expected {
        problems.push(format!("{} wells, expected {expected}", order.len()));
    }
    if order.wells().first().map(String::as_str) != Some("A01") {
        problems.push("does not start at A01".to_string());
    }

    let mut seen = HashSet::new();
    let mut previous = None;
    for (position, well) in order.iter().enumerate() {
        let coord = match parse_well_name(well) {
            Ok(coord) if order.geometry().contains(coord) => coord,
            _ => {
                problems.push(format!("position {}: {well} is not on the plate", position + 1));
                continue;
            }
        };
        if !seen.insert(coord) {
            problems.push(format!("position {}: {well} visited twice", position + 1));
        }
        if let Some((prev_well, prev)) = previous {
            if !coord.is_adjacent(prev) {
                problems.push(format!(
                    "position {}: {prev_well} -> {well} is not a single step",
                    position + 1
                ));
            }
        }
        previous = Some((well, coord));
    }

    problems
}
