mod commands;
mod output;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "markbook",
    version,
    about = "Student marksheet analysis: extract marks, merge exams, grade performance"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract mark records from a single marksheet (PDF or XLSX) without analyzing
    Extract {
        /// Path to PDF or XLSX marksheet
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write extracted records to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Analyze one or more marksheets into a merged, graded result table
    Analyze {
        /// Paths to PDF or XLSX marksheets, in exam order
        input_files: Vec<PathBuf>,

        /// Maximum achievable mark per sheet, repeated positionally (e.g. -m 100 -m 50)
        #[arg(short, long = "max-marks", value_name = "N")]
        max_marks: Vec<Decimal>,

        /// Analysis config JSON file (class/subject metadata and max marks)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the full result table to a CSV spreadsheet
        #[arg(long, value_name = "FILE")]
        csv: Option<PathBuf>,

        /// How many top students to show in the summary
        #[arg(long, default_value_t = 5)]
        top: usize,
    },
    /// Inspect and validate analysis configs
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// List recognized subjects
    Subjects,
    /// Print an example config JSON
    Example,
    /// Validate a config file
    Validate {
        /// Path to JSON config file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            input_file,
            output,
            out,
        } => commands::extract::run(input_file, &output, out),
        Commands::Analyze {
            input_files,
            max_marks,
            config,
            output,
            csv,
            top,
        } => commands::analyze::run(input_files, max_marks, config, &output, csv, top),
        Commands::Config { action } => match action {
            ConfigAction::Subjects => commands::config::subjects(),
            ConfigAction::Example => commands::config::example(),
            ConfigAction::Validate { file } => commands::config::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
