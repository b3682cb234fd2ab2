use std::path::PathBuf;

use chrono::{Datelike, Local};
use clap::{Args, Parser, Subcommand};
use saju_config::{ConfigLayering, EngineConfig, init_tracing, load_config};
use saju_rs::{
    AspectSet, BirthDateTime, BirthInput, CivilDate, Gender, GeoLocation, QueryType,
    SajuRsError, Theme,
};
use serde::Serialize;
use tracing::debug;

#[derive(Parser)]
#[command(name = "saju", about = "Four Pillars, Western chart and synthesis CLI")]
struct Cli {
    /// Run-layer config file, merged over the base config
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Reference year for "current year" readings (default: config, then today)
    #[arg(long, global = true)]
    reference_year: Option<i32>,
    /// Aspect set for the Western chart: major or all
    #[arg(long, global = true)]
    aspects: Option<AspectSet>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone)]
struct BirthArgs {
    /// Local birth time (YYYY-MM-DDThh:mm, or YYYY-MM-DD for noon)
    #[arg(long)]
    date: BirthDateTime,
    /// male or female
    #[arg(long)]
    gender: Gender,
    /// Birth latitude in degrees (north positive)
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    lat: Option<f64>,
    /// Birth longitude in degrees (east positive)
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    lon: Option<f64>,
}

impl BirthArgs {
    fn input(&self) -> BirthInput {
        let input = BirthInput::new(self.date, self.gender);
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => input.with_location(GeoLocation::new(lat, lon)),
            _ => input,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Four pillars of a birth
    Pillars {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Full saju analysis
    Saju {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Simplified Western natal chart
    Astro {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Weighted synthesis of both systems
    Synthesize {
        #[command(flatten)]
        birth: BirthArgs,
        /// general, personality, timing, career, relationship, health or wealth
        #[arg(long)]
        query: Option<String>,
        /// Also print both underlying charts
        #[arg(long)]
        full: bool,
    },
    /// Fortune for one day
    Daily {
        #[command(flatten)]
        birth: BirthArgs,
        /// Day to read (YYYY-MM-DD, default today)
        #[arg(long)]
        on: Option<CivilDate>,
    },
    /// Fortune for one month
    Monthly {
        #[command(flatten)]
        birth: BirthArgs,
        /// Year (default: reference year)
        #[arg(long)]
        year: Option<i32>,
        /// Month 1-12
        #[arg(long)]
        month: u32,
    },
    /// Themed fortune (love, wealth, career, health, study)
    Themed {
        #[command(flatten)]
        birth: BirthArgs,
        /// Theme name; all five when omitted
        #[arg(long)]
        theme: Option<String>,
    },
    /// Yearly transits against the natal chart
    Transit {
        #[command(flatten)]
        birth: BirthArgs,
        /// Year (default: reference year)
        #[arg(long)]
        year: Option<i32>,
    },
    /// Compatibility of two births
    Compat {
        /// First person: "YYYY-MM-DDThh:mm gender"
        first: BirthInput,
        /// Second person: "YYYY-MM-DDThh:mm gender"
        second: BirthInput,
    },
    /// Print the effective configuration
    Config,
}

fn main() {
    let cli = Cli::parse();
    let config = effective_config(&cli);

    // RUST_LOG wins; the config filter is only the fallback
    if let Err(e) = init_tracing(&config.log_filter) {
        eprintln!("Failed to initialise logging: {e}");
    }
    debug!(?config, "effective configuration");
    let query_default = config.query_type;
    require(saju_rs::init(config.clone()));

    match cli.command {
        Commands::Pillars { birth } => print_json(&require(saju_rs::pillars(&birth.input()))),

        Commands::Saju { birth } => print_json(&require(saju_rs::saju(&birth.input()))),

        Commands::Astro { birth } => print_json(&require(saju_rs::astro(&birth.input()))),

        Commands::Synthesize { birth, query, full } => {
            let query = query.as_deref().map_or(query_default, QueryType::from_name);
            let analysis = require(saju_rs::analyze(&birth.input(), query));
            if full {
                print_json(&analysis);
            } else {
                print_json(&analysis.synthesis);
            }
        }

        Commands::Daily { birth, on } => {
            let date = on.unwrap_or_else(today);
            print_json(&require(saju_rs::daily(&birth.input(), date)));
        }

        Commands::Monthly { birth, year, month } => {
            let year = year.unwrap_or_else(saju_rs::reference_year);
            print_json(&require(saju_rs::monthly(&birth.input(), year, month)));
        }

        Commands::Themed { birth, theme } => match theme {
            Some(name) => print_json(&require(saju_rs::themed(
                &birth.input(),
                Theme::from_name(&name),
            ))),
            None => print_json(&require(saju_rs::themed_all(&birth.input()))),
        },

        Commands::Transit { birth, year } => {
            let year = year.unwrap_or_else(saju_rs::reference_year);
            print_json(&require(saju_rs::transit(&birth.input(), year)));
        }

        Commands::Compat { first, second } => {
            print_json(&require(saju_rs::compatibility(&first, &second)));
        }

        Commands::Config => print_json(&config),
    }
}

/// Layered config with the command-line overrides applied.
fn effective_config(cli: &Cli) -> EngineConfig {
    let mut layering = ConfigLayering::discover();
    if let Some(path) = &cli.config {
        if !path.exists() {
            eprintln!("Config file not found: {}", path.display());
            std::process::exit(1);
        }
        layering = layering.with_run(path.clone());
    }
    let mut config = load_config(layering).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}");
        std::process::exit(1);
    });
    if let Some(year) = cli.reference_year {
        config.reference_year = Some(year);
    }
    if let Some(aspects) = cli.aspects {
        config.aspect_set = aspects;
    }
    config
}

fn today() -> CivilDate {
    let now = Local::now().date_naive();
    CivilDate::new(now.year(), now.month(), now.day()).unwrap_or_else(|e| {
        eprintln!("Invalid local date: {e}");
        std::process::exit(1);
    })
}

fn require<T>(result: Result<T, SajuRsError>) -> T {
    result.unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Failed to serialise output: {e}");
            std::process::exit(1);
        }
    }
}
