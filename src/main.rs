use clap::{Parser, Subcommand};
use std::path::PathBuf;

use policy_matrix::output::{OutputFormat, SortOrder};

const EXIT_SUCCESS: i32 = 0;
const EXIT_CONFIG: i32 = 4;
const EXIT_INPUT: i32 = 5;
const EXIT_SCORING: i32 = 6;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute weighted totals per option (default if no subcommand)
    Score,
    /// Print the embedded decision table
    Table,
}

#[derive(Parser, Debug)]
#[command(name = "policy-matrix")]
#[command(about = "Weighted decision-matrix scoring for policy engines", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging (breakdown and row summary on stderr)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/policy-matrix/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Read the table from a file instead of the embedded one ('-' for stdin)
    #[arg(short, long, global = true)]
    table: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Order of the printed totals
    #[arg(short, long, global = true, value_enum)]
    sort: Option<SortOrder>,

    /// Exit non-zero if any row was skipped or had a malformed cell
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Score);

    if let Commands::Table = command {
        print!("{}", policy_matrix::matrix::EMBEDDED_TABLE);
        std::process::exit(EXIT_SUCCESS);
    }

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match policy_matrix::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate table layout at startup
    let matrix = config.matrix.clone().unwrap_or_default();
    if let Err(errors) = policy_matrix::matrix::validate_matrix(&matrix) {
        eprintln!("Matrix config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let output_config = config.output.clone().unwrap_or_default();
    let format = cli.format.or(output_config.format).unwrap_or_default();
    let sort = cli.sort.or(output_config.sort).unwrap_or_default();

    // CLI flag wins over the config file; otherwise the embedded table
    let table_text = match cli.table.or(config.table) {
        Some(path) => {
            if cli.verbose {
                eprintln!("Reading table from {}", path.display());
            }
            match policy_matrix::config::read_table(&path) {
                Ok(text) => text,
                Err(e) => {
                    eprintln!("Input error: {:#}", e);
                    std::process::exit(EXIT_INPUT);
                }
            }
        }
        None => {
            if cli.verbose {
                eprintln!("Using embedded decision table");
            }
            policy_matrix::matrix::EMBEDDED_TABLE.to_string()
        }
    };

    let parsed = policy_matrix::matrix::parse_table(&table_text, &matrix);

    // Malformed cells are always reported; wrong-width rows only in verbose mode
    for failure in &parsed.failures {
        eprintln!("{}", failure);
    }
    if cli.verbose {
        for skipped in &parsed.skipped {
            eprintln!("Skipped {}", skipped);
        }
    }

    let mut totals = match policy_matrix::scoring::calculate_totals(&parsed.scores, &parsed.weights) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Scoring error: {}", e);
            std::process::exit(EXIT_SCORING);
        }
    };

    let use_colors = policy_matrix::output::should_use_colors();

    if cli.verbose {
        match policy_matrix::scoring::calculate_breakdown(&parsed) {
            Ok(breakdown) => {
                let stderr_colors = policy_matrix::output::should_color_stderr();
                eprintln!(
                    "{}",
                    policy_matrix::output::format_breakdown(&breakdown, stderr_colors)
                );
                eprintln!();
            }
            Err(e) => eprintln!("Breakdown unavailable: {}", e),
        }
    }

    policy_matrix::output::sort_totals(&mut totals, sort);

    match policy_matrix::output::format_totals(&totals, format, use_colors) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Output error: {:#}", e);
            std::process::exit(EXIT_SCORING);
        }
    }

    if cli.verbose {
        eprintln!("{}", policy_matrix::output::format_row_summary(&parsed));
    }

    if cli.strict && !parsed.is_clean() {
        eprintln!(
            "Strict mode: {} lines skipped, {} malformed cells",
            parsed.skipped.len(),
            parsed.failures.len()
        );
        std::process::exit(EXIT_SCORING);
    }

    std::process::exit(EXIT_SUCCESS);
}
