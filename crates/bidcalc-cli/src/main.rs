mod commands;
mod output;

use bidcalc_core::parsing::{parse_amount, parse_override};
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(
    name = "bidcalc",
    version,
    about = "Job bidding calculator for sports courts and concrete coatings"
)]
struct Cli {
    /// Log filter (e.g. "warn", "debug", "bidcalc_core=debug")
    #[arg(long, global = true, env = "BIDCALC_LOG", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate a bid for a job
    Bid(BidArgs),
    /// Inspect and validate rate tables
    Rates {
        #[command(subcommand)]
        action: RatesAction,
    },
    /// List supported job types and the options each one uses
    Jobs,
}

#[derive(Args)]
pub struct BidArgs {
    /// Job type: "Sports Courts", "Epoxy Flake", "Polished Concrete",
    /// "Sealed Concrete" or "Urethane Cement" (hyphenated forms accepted)
    #[arg(short, long, required_unless_present = "input")]
    pub job_type: Option<String>,

    /// Read the job request from a JSON file instead of flags
    #[arg(short, long, value_name = "FILE", conflicts_with = "job_type")]
    pub input: Option<PathBuf>,

    /// Square footage of the job
    #[arg(short, long, value_parser = parse_amount, required_unless_present = "input")]
    pub area: Option<Decimal>,

    /// One-way distance to the job site in miles
    #[arg(short, long, value_parser = parse_amount, default_value = "0")]
    pub distance: Decimal,

    /// Desired profit margin in percent of the bid price
    #[arg(short, long, value_parser = parse_amount, default_value = "0")]
    pub margin: Decimal,

    /// Number of workers on the crew
    #[arg(short, long, default_value_t = 1)]
    pub workers: u32,

    /// Sports Courts: include a concrete slab
    #[arg(long)]
    pub concrete: bool,

    /// Sports Courts: include lights (requires --num-courts)
    #[arg(long)]
    pub lights: bool,

    /// Sports Courts: number of courts to light
    #[arg(long, value_name = "N")]
    pub num_courts: Option<u32>,

    /// Sports Courts: include basketball hoops
    #[arg(long)]
    pub hoops: bool,

    /// Sports Courts: number of hoops (default 1)
    #[arg(long, value_name = "N")]
    pub num_hoops: Option<u32>,

    /// Sports Courts: include a fence (requires --fence-length)
    #[arg(long)]
    pub fence: bool,

    /// Sports Courts: fence length in feet
    #[arg(long, value_name = "FEET", value_parser = parse_amount)]
    pub fence_length: Option<Decimal>,

    /// Epoxy Flake: quartz system instead of flake
    #[arg(long)]
    pub over_quartz: bool,

    /// Epoxy Flake: urethane cement base coat instead of vapor barrier
    #[arg(long)]
    pub urethane_cement: bool,

    /// Epoxy Flake: residential application (EF topcoat)
    #[arg(long)]
    pub residential: bool,

    #[command(flatten)]
    pub rates: RateArgs,

    /// Output format: table (default) or json
    #[arg(short, long, default_value = "table")]
    pub output: String,

    /// Show itemized material lines
    #[arg(long)]
    pub verbose: bool,
}

#[derive(Args)]
pub struct RateArgs {
    /// JSON file overriding default rates
    #[arg(long = "rates", value_name = "FILE", env = "BIDCALC_RATES")]
    pub file: Option<PathBuf>,

    /// Override a single rate, e.g. --set hourly_wage=32.50
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_override)]
    pub overrides: Vec<(String, Decimal)>,
}

#[derive(Subcommand)]
enum RatesAction {
    /// Show the effective rate table
    List {
        #[command(flatten)]
        rates: RateArgs,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Validate a rate override file
    Validate {
        /// Path to JSON rate file
        file: PathBuf,
    },
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let result = match cli.command {
        Commands::Bid(args) => commands::bid::run(&args),
        Commands::Rates { action } => match action {
            RatesAction::List { rates, output } => commands::rates::list(&rates, &output),
            RatesAction::Validate { file } => commands::rates::validate(&file),
        },
        Commands::Jobs => commands::jobs::list(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
