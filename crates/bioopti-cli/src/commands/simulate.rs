use crate::cli::SimulateArgs;
use crate::error::Result;
use bioopti::core::catalog::EnzymeCatalog;
use bioopti::core::kinetics::conditions::ReactionConditions;
use bioopti::core::kinetics::rate::reaction_rate;
use bioopti::workflows::simulate::{self, ParameterOverrides, SimulationReport};
use tracing::info;

pub fn run(args: SimulateArgs) -> Result<()> {
    let mut conditions = ReactionConditions::new(args.substrate, args.ph, args.temp);
    if let Some(inhibitor) = args.inhibitor {
        conditions = conditions.with_inhibitor(inhibitor);
    }

    let report = match &args.params.enzyme {
        Some(enzyme) => {
            info!("Loading enzyme catalog from {:?}", &args.params.catalog);
            let catalog = EnzymeCatalog::load(&args.params.catalog)?;
            let overrides = ParameterOverrides {
                ph_sigma: args.params.ph_sigma,
                temp_sigma: args.params.temp_sigma,
                ki: args.params.ki,
            };
            simulate::run(
                &catalog,
                enzyme,
                args.params.organism.as_deref(),
                &conditions,
                &overrides,
            )?
        }
        None => {
            let params = super::explicit_parameters(&args.params)?;
            let rate = reaction_rate(&params, &conditions)?;
            SimulationReport { rate, params }
        }
    };

    match (&args.params.enzyme, &args.params.organism) {
        (Some(enzyme), Some(organism)) => println!(
            "Simulated rate for {enzyme} ({organism}): {:.2} µmol/min",
            report.rate
        ),
        (Some(enzyme), None) => {
            println!("Simulated rate for {enzyme}: {:.2} µmol/min", report.rate)
        }
        _ => println!("Simulated rate: {:.2} µmol/min", report.rate),
    }
    println!();
    super::print_parameters(&report.params);

    Ok(())
}
