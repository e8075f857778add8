use crate::cli::OptimizeArgs;
use crate::error::{CliError, Result};
use crate::utils::parser::parse_bounds;
use crate::utils::progress::SearchProgressHandler;
use bioopti::engine::config::{OptimizeConfig, OptimizeConfigBuilder};
use bioopti::engine::error::EngineError;
use bioopti::engine::progress::ProgressReporter;
use bioopti::workflows::optimize;
use tracing::{info, warn};

pub fn run(args: OptimizeArgs) -> Result<()> {
    let params = super::resolve_parameters(&args.params)?;
    let config = build_config(&args)?;

    let progress_handler = SearchProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!("Searching for optimal reaction conditions...");
    info!("Invoking the condition-optimization workflow...");
    let outcome = optimize::run(&params, &config, &reporter)?;

    if !outcome.converged {
        warn!("Search exhausted its generation budget without converging.");
        println!("Warning: the search used its full generation budget; the result may be coarse.");
    }

    let best = &outcome.best_conditions;
    println!(
        "\nOptimal conditions found after {} generation(s):",
        outcome.generations
    );
    println!("  substrate     = {:.3} mM", best.substrate_conc);
    println!("  pH            = {:.2}", best.ph);
    println!("  temperature   = {:.1} °C", best.temp);
    if let Some(inhibitor) = best.inhibitor_conc {
        println!("  inhibitor     = {inhibitor} mM (held fixed)");
    }
    println!("  maximum rate  = {:.4} µmol/min", outcome.max_rate);

    Ok(())
}

fn build_config(args: &OptimizeArgs) -> Result<OptimizeConfig> {
    let mut builder = OptimizeConfig::builder();

    builder = apply_bounds(builder, args.substrate_bounds.as_deref(), |b, lo, hi| {
        b.substrate_bounds(lo, hi)
    })?;
    builder = apply_bounds(builder, args.ph_bounds.as_deref(), |b, lo, hi| {
        b.ph_bounds(lo, hi)
    })?;
    builder = apply_bounds(builder, args.temp_bounds.as_deref(), |b, lo, hi| {
        b.temp_bounds(lo, hi)
    })?;

    if let Some(generations) = args.generations {
        builder = builder.max_generations(generations);
    }
    if let Some(population) = args.population {
        builder = builder.population_size(population);
    }
    if let Some(tolerance) = args.tolerance {
        builder = builder.tolerance(tolerance);
    }
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }
    if let Some(inhibitor) = args.inhibitor {
        builder = builder.inhibitor_conc(inhibitor);
    }

    Ok(builder.build().map_err(EngineError::from)?)
}

fn apply_bounds(
    builder: OptimizeConfigBuilder,
    bounds: Option<&str>,
    set: impl FnOnce(OptimizeConfigBuilder, f64, f64) -> OptimizeConfigBuilder,
) -> Result<OptimizeConfigBuilder> {
    match bounds {
        Some(input) => {
            let (lower, upper) =
                parse_bounds(input).map_err(|e| CliError::Argument(e.to_string()))?;
            Ok(set(builder, lower, upper))
        }
        None => Ok(builder),
    }
}
