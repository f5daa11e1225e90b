mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "footprint",
    version,
    about = "Annual carbon footprint estimation from self-reported data"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a footprint from a JSON input record
    Compute {
        /// Path to the input record (JSON)
        input_file: PathBuf,

        /// Custom factor table JSON file (default: builtin table)
        #[arg(short, long = "factors", value_name = "FILE")]
        factors: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Include fallback warnings in the result
        #[arg(long)]
        trace: bool,

        /// Append reduction recommendations
        #[arg(long)]
        recommend: bool,
    },
    /// Manage and inspect factor tables
    Factors {
        #[command(subcommand)]
        action: FactorsAction,
    },
}

#[derive(Subcommand)]
enum FactorsAction {
    /// Show the builtin factor table
    Show,
    /// Print the JSON schema with field descriptions and example
    Schema,
    /// Validate a custom factor table file
    Validate {
        /// Path to JSON factor file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compute {
            input_file,
            factors,
            output,
            trace,
            recommend,
        } => commands::compute::run(input_file, factors, &output, trace, recommend),
        Commands::Factors { action } => match action {
            FactorsAction::Show => commands::factors::show(),
            FactorsAction::Schema => commands::factors::schema(),
            FactorsAction::Validate { file } => commands::factors::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
