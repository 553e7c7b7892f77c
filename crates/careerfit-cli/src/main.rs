//! careerfit command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(
    name = "careerfit",
    version,
    about = "Aptitude tests and degree guidance for students"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a completed aptitude test
    Evaluate {
        /// Degree the test evaluates (e.g. "bscs")
        #[arg(long)]
        degree: String,

        /// Comma-separated option indices, one per question ("-" for unanswered)
        #[arg(long, allow_hyphen_values = true)]
        answers: String,

        /// Catalog .toml file or directory (default: built-in catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// City used to suggest university programs
        #[arg(long)]
        city: Option<String>,

        /// Output format: text, json, html
        #[arg(long, default_value = "text")]
        format: String,

        /// Directory to save the submission and HTML results page in
        #[arg(long)]
        output: Option<PathBuf>,

        /// Accept unanswered questions and answer counts that differ from the test
        #[arg(long)]
        lenient: bool,
    },

    /// Display a saved submission
    Show {
        /// Submission JSON file
        #[arg(long)]
        submission: PathBuf,

        /// Catalog .toml file or directory (default: built-in catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// City used to suggest university programs
        #[arg(long)]
        city: Option<String>,

        /// Output format: text, json, html
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Print the questions of a degree's aptitude test
    Questions {
        /// Degree the test evaluates
        #[arg(long)]
        degree: String,

        /// Catalog .toml file or directory (default: built-in catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// List degree programs, optionally filtered by educational background
    Degrees {
        /// Educational background id (e.g. "ics")
        #[arg(long)]
        background: Option<String>,

        /// Catalog .toml file or directory (default: built-in catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// List university programs for a degree in a city
    Programs {
        /// Degree id
        #[arg(long)]
        degree: String,

        /// City to search
        #[arg(long)]
        city: String,

        /// Catalog .toml file or directory (default: built-in catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Validate catalog TOML files
    Validate {
        /// Path to catalog file or directory
        #[arg(long)]
        catalog: PathBuf,
    },

    /// Show the next step in your profile
    Status {
        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create starter config and catalog
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("careerfit=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Evaluate {
            degree,
            answers,
            catalog,
            config,
            city,
            format,
            output,
            lenient,
        } => commands::evaluate::execute(
            degree, answers, catalog, config, city, format, output, lenient,
        ),
        Commands::Show {
            submission,
            catalog,
            config,
            city,
            format,
        } => commands::show::execute(submission, catalog, config, city, format),
        Commands::Questions { degree, catalog } => commands::questions::execute(degree, catalog),
        Commands::Degrees { background, catalog } => {
            commands::degrees::execute(background, catalog)
        }
        Commands::Programs {
            degree,
            city,
            catalog,
        } => commands::programs::execute(degree, city, catalog),
        Commands::Validate { catalog } => commands::validate::execute(catalog),
        Commands::Status { config } => commands::status::execute(config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
