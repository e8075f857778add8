use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "The BioOpti Developers",
    version,
    about = "BioOpti CLI - A command-line toolkit for enzyme kinetics: simulate reaction rates, optimize reaction conditions, and look up kinetic parameters and culture media.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate the reaction rate of an enzyme under given conditions.
    Simulate(SimulateArgs),
    /// Search for the substrate/pH/temperature combination that maximizes the reaction rate.
    Optimize(OptimizeArgs),
    /// Fetch kinetic parameters for an enzyme from the SABIO-RK database.
    Fetch(FetchArgs),
    /// Retrieve culture media recipes and growth temperature from BACdive.
    Media(MediaArgs),
}

/// How an enzyme's kinetic parameters are supplied: looked up in the local
/// catalog by name, or given explicitly on the command line.
#[derive(Args, Debug, Clone)]
pub struct ParameterSource {
    /// Enzyme name to look up in the local catalog (e.g. "hexokinase").
    #[arg(short, long, value_name = "NAME")]
    pub enzyme: Option<String>,

    /// Organism the enzyme belongs to (e.g. "Homo sapiens"). Matches any when omitted.
    #[arg(short = 'g', long, value_name = "NAME", requires = "enzyme")]
    pub organism: Option<String>,

    /// Path to the enzyme catalog JSON file.
    #[arg(long, value_name = "PATH", default_value = "data/enzyme_data.json")]
    pub catalog: PathBuf,

    /// Maximum reaction velocity Vmax in µmol/min (explicit parameter entry).
    #[arg(long, value_name = "FLOAT", conflicts_with = "enzyme")]
    pub vmax: Option<f64>,

    /// Michaelis constant Km in mM (explicit parameter entry).
    #[arg(long, value_name = "FLOAT", conflicts_with = "enzyme")]
    pub km: Option<f64>,

    /// Optimal pH of the enzyme.
    #[arg(long, value_name = "FLOAT")]
    pub optimal_ph: Option<f64>,

    /// Optimal temperature of the enzyme in °C.
    #[arg(long, value_name = "FLOAT")]
    pub optimal_temp: Option<f64>,

    /// Tolerance to pH deviation (Gaussian sigma). Overrides the catalog value.
    #[arg(long, value_name = "FLOAT")]
    pub ph_sigma: Option<f64>,

    /// Tolerance to temperature deviation (Gaussian sigma). Overrides the catalog value.
    #[arg(long, value_name = "FLOAT")]
    pub temp_sigma: Option<f64>,

    /// Competitive inhibition constant Ki in mM. Overrides the catalog value.
    #[arg(long, value_name = "FLOAT")]
    pub ki: Option<f64>,
}

/// Arguments for the `simulate` subcommand.
#[derive(Args, Debug)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub params: ParameterSource,

    /// Substrate concentration [S] in mM.
    #[arg(short, long, value_name = "FLOAT", default_value_t = 1.0)]
    pub substrate: f64,

    /// pH of the reaction environment.
    #[arg(long, value_name = "FLOAT", default_value_t = 7.0)]
    pub ph: f64,

    /// Temperature of the reaction environment in °C.
    #[arg(short, long, value_name = "FLOAT", default_value_t = 37.0)]
    pub temp: f64,

    /// Inhibitor concentration [I] in mM.
    #[arg(short, long, value_name = "FLOAT")]
    pub inhibitor: Option<f64>,
}

/// Arguments for the `optimize` subcommand.
#[derive(Args, Debug)]
pub struct OptimizeArgs {
    #[command(flatten)]
    pub params: ParameterSource,

    /// Substrate concentration bounds as "LOWER:UPPER" in mM.
    #[arg(long, value_name = "LOWER:UPPER")]
    pub substrate_bounds: Option<String>,

    /// pH bounds as "LOWER:UPPER".
    #[arg(long, value_name = "LOWER:UPPER")]
    pub ph_bounds: Option<String>,

    /// Temperature bounds as "LOWER:UPPER" in °C.
    #[arg(long, value_name = "LOWER:UPPER")]
    pub temp_bounds: Option<String>,

    /// Ambient inhibitor concentration [I] in mM, held fixed during the search.
    #[arg(short, long, value_name = "FLOAT")]
    pub inhibitor: Option<f64>,

    /// Maximum number of search generations.
    #[arg(long, value_name = "INT")]
    pub generations: Option<usize>,

    /// Population size of the search.
    #[arg(long, value_name = "INT")]
    pub population: Option<usize>,

    /// Relative convergence tolerance.
    #[arg(long, value_name = "FLOAT")]
    pub tolerance: Option<f64>,

    /// Seed for the random generator; fixing it makes runs reproducible.
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,
}

/// Arguments for the `fetch` subcommand.
#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Enzyme name to query (e.g. "hexokinase").
    #[arg(required = true, value_name = "ENZYME")]
    pub enzyme: String,

    /// Restrict the query to one organism.
    #[arg(short = 'g', long, value_name = "NAME")]
    pub organism: Option<String>,

    /// Fail instead of prompting when SABIO-RK does not report a value.
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `media` subcommand.
#[derive(Args, Debug)]
pub struct MediaArgs {
    /// Strain to search for (e.g. "Bacillus subtilis" or a culture
    /// collection number like "DSM 402"). Prompts when omitted.
    #[arg(value_name = "QUERY")]
    pub query: Option<String>,

    /// Path to the TOML file holding BACdive credentials.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
