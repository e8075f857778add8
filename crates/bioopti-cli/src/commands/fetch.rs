use crate::cli::FetchArgs;
use crate::error::{CliError, Result};
use crate::prompt;
use crate::remote::sabio::SabioClient;
use bioopti::core::kinetics::params::KineticParameters;
use tracing::info;

pub async fn run(args: FetchArgs) -> Result<()> {
    println!(
        "🔍 Querying SABIO-RK for: {} ({})...",
        args.enzyme,
        args.organism.as_deref().unwrap_or("any organism")
    );

    let client = SabioClient::new();
    let summary = client
        .fetch_summary(&args.enzyme, args.organism.as_deref())
        .await?;
    info!(?summary, "SABIO-RK summary received");

    // Anything the service did not report is filled in at the terminal,
    // unless the user asked for a non-interactive run.
    let interactive = !args.no_input;
    let km = resolve_value("Km (mM)", summary.km, interactive)?;
    let vmax = resolve_value("Vmax (µmol/min)", summary.vmax, interactive)?;
    let optimal_ph = resolve_value("optimal pH", summary.optimal_ph, interactive)?;
    let optimal_temp = resolve_value("optimal temperature (°C)", summary.optimal_temp, interactive)?;

    let params = KineticParameters::builder()
        .vmax(vmax)
        .km(km)
        .optimal_ph(optimal_ph)
        .optimal_temp(optimal_temp)
        .build()?;

    println!("\nKinetic parameters for '{}':", args.enzyme);
    super::print_parameters(&params);

    Ok(())
}

fn resolve_value(label: &str, value: Option<f64>, interactive: bool) -> Result<f64> {
    match value {
        Some(value) => Ok(value),
        None if interactive => prompt::read_f64(label),
        None => Err(CliError::Remote(format!(
            "SABIO-RK reported no {label}; re-run without --no-input to enter it manually"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reported_values_pass_through_untouched() {
        assert_eq!(resolve_value("Km (mM)", Some(0.5), false).unwrap(), 0.5);
        assert_eq!(resolve_value("Km (mM)", Some(0.5), true).unwrap(), 0.5);
    }

    #[test]
    fn missing_values_fail_in_non_interactive_mode() {
        let result = resolve_value("Km (mM)", None, false);
        assert!(matches!(result, Err(CliError::Remote(_))));
    }
}
