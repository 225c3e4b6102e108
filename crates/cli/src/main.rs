mod logging;
mod session;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use roster_core::{Console, Publishers, StudentController, StudentValidator, ValidatorConfig};

/// Interactive student record console.
#[derive(Parser)]
#[command(name = "roster", version, about = "Interactive student record console")]
struct Cli {
    /// JSON array of students to load before the session starts
    #[arg(long, global = true)]
    seed: Option<PathBuf>,

    /// Lowest accepted score (inclusive)
    #[arg(
        long,
        global = true,
        allow_negative_numbers = true,
        default_value_t = ValidatorConfig::DEFAULT_MIN_SCORE
    )]
    min_score: f32,

    /// Highest accepted score (inclusive)
    #[arg(
        long,
        global = true,
        allow_negative_numbers = true,
        default_value_t = ValidatorConfig::DEFAULT_MAX_SCORE
    )]
    max_score: f32,

    /// Only log errors
    #[arg(long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Log debug detail (prompts, validation, service calls)
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Run a single operation instead of the main menu
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Clone, Copy)]
enum Commands {
    /// Add one student
    Add,
    /// Open the search menu
    Search,
    /// Update one student
    Update,
    /// Remove one student
    Remove,
}

fn main() {
    let cli = Cli::parse();
    logging::configure(cli.quiet, cli.verbose);

    let config = match ValidatorConfig::new(cli.min_score, cli.max_score) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    let validator = StudentValidator::new(config);

    let service = match session::load_service(cli.seed.as_deref(), &validator) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    let mut controller = StudentController::new(
        service,
        validator,
        Publishers::logging(),
        Console::stdio(),
    );

    match cli.command {
        None => controller.run(),
        Some(Commands::Add) => {
            controller.add_student();
        }
        Some(Commands::Search) => controller.search_students(),
        Some(Commands::Update) => {
            controller.update_student();
        }
        Some(Commands::Remove) => {
            controller.remove_student();
        }
    }
}
