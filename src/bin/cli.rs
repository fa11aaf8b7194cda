use clap::{Parser, Subcommand, Args, ValueEnum};
use homehealth::prelude::*;
use homehealth::constants::ANY_SENTINEL;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hhcli")]
#[command(about = "Home Health Directory CLI - Find home health providers by insurance, first-dose availability, and service area", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search providers by insurance, first-dose availability, and service area
    Search(SearchArgs),
    /// Show summary statistics for a provider data file
    Stats(StatsArgs),
    /// List the selectable insurance plans and service areas
    Options(OptionsArgs),
}

#[derive(Args)]
struct SearchArgs {
    /// Path to the provider data file
    #[arg(short, long, env = "HOMEHEALTH_DATA_FILE")]
    data_file: Option<PathBuf>,
    /// Insurance plan (case-insensitive substring match; "Any" means no filter)
    #[arg(long)]
    insurance: Option<String>,
    /// Only show providers offering a first dose
    #[arg(long)]
    first_dose: bool,
    /// Service area to match exactly (repeat for multiple areas)
    #[arg(long = "area")]
    areas: Vec<String>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Args)]
struct StatsArgs {
    /// Path to the provider data file
    #[arg(short, long, env = "HOMEHEALTH_DATA_FILE")]
    data_file: Option<PathBuf>,
}

#[derive(Args)]
struct OptionsArgs {
    /// Path to the provider data file
    #[arg(short, long, env = "HOMEHEALTH_DATA_FILE")]
    data_file: Option<PathBuf>,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();
    match cli.command {
        Commands::Search(args) => cmd_search(args),
        Commands::Stats(args) => cmd_stats(args),
        Commands::Options(args) => cmd_options(args),
    }
}

/// Resolve the data file from the CLI flag, then the configured default
fn resolve_data_file(flag: Option<PathBuf>) -> PathBuf {
    if let Some(path) = flag {
        return path;
    }
    if let Some(path) = homehealth::config::global_config().data_file {
        return path;
    }
    eprintln!(
        "No provider data file specified.\n\nSuggestion: pass --data-file, set \
        HOMEHEALTH_DATA_FILE, or set data_file in the config file."
    );
    std::process::exit(1);
}

fn load_directory(flag: Option<PathBuf>, quiet: bool) -> ProviderDirectory {
    let path = resolve_data_file(flag);
    let builder = ProviderDirectoryBuilder::new().data_file(&path);
    #[cfg(feature = "progress")]
    let builder = builder
        .show_progress(!quiet && homehealth::config::global_config().enable_progress_bar);
    match builder.build() {
        Ok(directory) => directory,
        Err(e) => {
            eprintln!("Error loading provider directory: {}", e.user_message());
            std::process::exit(1);
        }
    }
}

fn cmd_search(args: SearchArgs) {
    // Machine-readable output loads silently
    let directory = load_directory(args.data_file, args.format == OutputFormat::Json);

    let mut selections = FilterSelections::new()
        .require_first_dose(args.first_dose)
        .with_service_areas(args.areas);
    // "Any" is the UI sentinel for "no insurance filter"
    if let Some(plan) = args.insurance {
        if !plan.trim().eq_ignore_ascii_case(ANY_SENTINEL) {
            selections = selections.with_insurance(plan);
        }
    }

    let results = directory.search(&selections);

    match args.format {
        OutputFormat::Json => match serde_json::to_string_pretty(&results) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error rendering results: {}", e);
                std::process::exit(1);
            }
        },
        OutputFormat::Text => {
            if results.is_empty() {
                println!("No providers match your filters.");
                return;
            }
            for provider in &results {
                println!("Name: {}", provider.name);
                println!("  First dose: {}", provider.first_dose_label());
                println!("  Service areas: {}", provider.service_area_display());
                println!("  Insurance: {}", provider.insurance_display());
                if let Some(email) = &provider.email {
                    println!("  Email: {}", email);
                }
            }
            println!("Total matches: {}", results.len());
        }
    }
}

fn cmd_stats(args: StatsArgs) {
    let directory = load_directory(args.data_file, false);
    directory.statistics().print_summary();
}

fn cmd_options(args: OptionsArgs) {
    let directory = load_directory(args.data_file, false);

    println!("Insurance plans:");
    println!("  {}", ANY_SENTINEL);
    for plan in directory.insurance_options() {
        println!("  {}", plan);
    }

    println!("Service areas:");
    for area in directory.service_area_options() {
        println!("  {}", area);
    }
}
