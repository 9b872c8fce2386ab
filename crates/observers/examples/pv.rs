//! p–V diagrams of the Otto, Diesel, and Seliger cycles side by side.
//!
//! # Usage
//!
//! ```text
//! cargo run --example pv --features plot
//! cargo run --example pv --features plot -- 18 2 1.4 0.5
//! ```
//!
//! Arguments are `r ρ κ α` (compression ratio, cutoff ratio, heat-capacity
//! ratio, heat-release split). Missing arguments take their default values.

use std::error::Error;

use cycles_observers::{DiagramPlot, ShowConfig};
use cycles_thermo::{Cycle, CycleParameters, LegFilter, build_diagram};

fn main() -> Result<(), Box<dyn Error>> {
    let params = parse_args()?;

    let mut plot = DiagramPlot::new();
    for cycle in Cycle::ALL {
        let diagram = build_diagram(cycle, &params, &LegFilter::all())?;
        println!("{}  (net work {:.3})", diagram.efficiency, diagram.work());
        plot = plot.add(diagram);
    }

    let title = format!(
        "Ideal cycles: r = {}, ρ = {}, κ = {}, α = {}",
        params.compression_ratio(),
        params.cutoff_ratio(),
        params.heat_capacity_ratio(),
        params.heat_release_split(),
    );
    plot.show(ShowConfig::new().title(title).legend())?;
    Ok(())
}

/// Reads `r ρ κ α` from the command line, falling back to the defaults.
fn parse_args() -> Result<CycleParameters, Box<dyn Error>> {
    let defaults = CycleParameters::default();
    let mut values = [
        defaults.compression_ratio(),
        defaults.cutoff_ratio(),
        defaults.heat_capacity_ratio(),
        defaults.heat_release_split(),
    ];

    for (slot, arg) in values.iter_mut().zip(std::env::args().skip(1)) {
        *slot = arg
            .parse()
            .map_err(|_| format!("invalid number {arg:?}, expected e.g. 18 2 1.4 0.5"))?;
    }

    let [r, rho, kappa, alpha] = values;
    Ok(CycleParameters::new(r, rho, alpha, kappa)?)
}
