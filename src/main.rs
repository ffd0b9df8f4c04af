use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use tenet::region::{RegionRecord, RegionSource};
use tenet::scoring::{Assessor, ScoringConfig};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score one region for healthcare desert severity
    Desert(DesertArgs),
    /// Score one region for telehealth feasibility
    Telehealth(TelehealthArgs),
    /// Score every region in a YAML or JSON region file, worst-served first
    Assess {
        /// Region file (`.json` for JSON, anything else is read as YAML)
        file: PathBuf,

        /// Only assess regions whose name matches this glob (case-insensitive)
        #[arg(short, long)]
        region: Option<String>,
    },
    /// Write the default config file
    Init {
        /// Where to write it (defaults to ~/.config/tenet/config.yaml)
        #[arg(long)]
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Debug)]
struct DesertArgs {
    /// Region name shown in output
    #[arg(long, default_value = "region")]
    name: String,
    /// Number of health facilities
    #[arg(long, default_value_t = 0)]
    facilities: u64,
    /// Population count
    #[arg(long, default_value_t = 1)]
    population: u64,
    /// Average distance to the nearest clinic, in miles
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    distance: f64,
    /// Number of specialist providers
    #[arg(long, default_value_t = 0)]
    specialists: u64,
    /// Public transportation is available
    #[arg(long)]
    transport: bool,
}

#[derive(Args, Debug)]
struct TelehealthArgs {
    /// Region name shown in output
    #[arg(long, default_value = "region")]
    name: String,
    /// Average download speed (Mbps)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    download: f64,
    /// Average upload speed (Mbps)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    upload: f64,
    /// Percentage of residents with internet access (0-100)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    coverage: f64,
    /// Connection reliability (0-1)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    reliability: f64,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
enum OutputFormat {
    #[default]
    Table,
    Tsv,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "tenet")]
#[command(about = "Healthcare desert and telehealth feasibility scoring", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging and score breakdowns
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/tenet/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Override the minimum download speed for telehealth (Mbps)
    #[arg(long, global = true, env = "TENET_MIN_DOWNLOAD_MBPS")]
    min_download: Option<f64>,

    /// Override the minimum upload speed for telehealth (Mbps)
    #[arg(long, global = true, env = "TENET_MIN_UPLOAD_MBPS")]
    min_upload: Option<f64>,

    #[command(subcommand)]
    command: Commands,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Print record validation problems and exit.
fn reject_record(errors: Vec<String>) -> ! {
    eprintln!("Invalid input:");
    for error in errors {
        eprintln!("  - {}", error);
    }
    std::process::exit(EXIT_INPUT);
}

fn effective_scoring(cli: &Cli) -> ScoringConfig {
    let config = match tenet::config::load_config(cli.config.clone()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let scoring = config
        .scoring
        .with_speed_overrides(cli.min_download, cli.min_upload);

    // Validate scoring config at startup
    if let Err(errors) = tenet::scoring::validate_scoring(&scoring) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    scoring
}

fn render_json<T: Serialize + ?Sized>(value: &T) -> String {
    match tenet::output::format_json(value) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(EXIT_INPUT);
        }
    }
}

fn run_init(path: Option<PathBuf>, force: bool) -> String {
    let path = match path {
        Some(p) => p,
        None => match tenet::config::get_config_path() {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Config error: {:#}", e);
                std::process::exit(EXIT_CONFIG);
            }
        },
    };
    if let Err(e) = tenet::config::write_default_config(&path, force) {
        eprintln!("Config error: {:#}", e);
        std::process::exit(EXIT_CONFIG);
    }
    format!("Config written to {}", path.display())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let start_time = Instant::now();
    let use_colors = tenet::output::should_use_colors();

    let rendered = match &cli.command {
        Commands::Init { path, force } => run_init(path.clone(), *force),
        Commands::Desert(args) => {
            let assessor = Assessor::new(&effective_scoring(&cli));
            let record = RegionRecord {
                name: args.name.clone(),
                facility_count: Some(args.facilities),
                population: Some(args.population),
                avg_distance: Some(args.distance),
                specialists: Some(args.specialists),
                has_transportation: Some(args.transport),
                ..RegionRecord::default()
            };
            if let Err(errors) = tenet::region::validate_record(&record) {
                reject_record(errors);
            }

            let result = assessor.desert.assess(&record.region_metrics());
            match cli.format {
                OutputFormat::Table => {
                    tenet::output::format_desert(&result, cli.verbose, use_colors)
                }
                OutputFormat::Tsv => format!("{:.4}\t{}", result.score, result.classification),
                OutputFormat::Json => render_json(&result),
            }
        }
        Commands::Telehealth(args) => {
            let assessor = Assessor::new(&effective_scoring(&cli));
            let record = RegionRecord {
                name: args.name.clone(),
                download_speed: Some(args.download),
                upload_speed: Some(args.upload),
                internet_coverage: Some(args.coverage),
                reliability: Some(args.reliability),
                ..RegionRecord::default()
            };
            if let Err(errors) = tenet::region::validate_record(&record) {
                reject_record(errors);
            }

            let result = assessor.telehealth.assess(&record.connectivity_metrics());
            match cli.format {
                OutputFormat::Table => {
                    tenet::output::format_telehealth(&result, cli.verbose, use_colors)
                }
                OutputFormat::Tsv => format!(
                    "{:.4}\t{}\t{}",
                    result.score, result.classification, result.viable
                ),
                OutputFormat::Json => render_json(&result),
            }
        }
        Commands::Assess { file, region } => {
            let assessor = Assessor::new(&effective_scoring(&cli));
            let mut source = tenet::region::FileRegionSource::new(file);
            let records = match source.collect() {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Region file error: {:#}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };

            let (valid, errors) =
                match tenet::region::select_regions(&source, records, region.as_deref()) {
                    Ok(selected) => selected,
                    Err(e) => {
                        eprintln!("{}: {:#}", file.display(), e);
                        std::process::exit(EXIT_INPUT);
                    }
                };
            for error in &errors {
                tracing::warn!("skipping invalid region: {}", error);
            }
            tracing::debug!(valid = valid.len(), problems = errors.len(), "selected regions");

            let assessments = assessor.assess_all(&valid);
            match cli.format {
                OutputFormat::Table if cli.verbose && !assessments.is_empty() => assessments
                    .iter()
                    .map(|a| tenet::output::format_region_detail(a, use_colors))
                    .collect::<Vec<_>>()
                    .join("\n\n"),
                OutputFormat::Table => {
                    tenet::output::format_assessment_table(&assessments, use_colors)
                }
                OutputFormat::Tsv => tenet::output::format_tsv(&assessments),
                OutputFormat::Json => render_json(&assessments),
            }
        }
    };

    println!("{}", rendered);

    tracing::debug!(elapsed = ?start_time.elapsed(), "done");
    std::process::exit(EXIT_SUCCESS);
}
