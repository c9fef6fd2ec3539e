//! pgcast command-line interface

use clap::{ArgAction, Parser, Subcommand};
use pgcast::cli::{check, config, emit, eval, logging, output};
use std::path::PathBuf;

/// PostgreSQL-dialect cast tool
#[derive(Parser)]
#[command(name = "pgcast")]
#[command(author, version, about = "PostgreSQL-dialect boolean and timestamp casts", long_about = None)]
struct Cli {
    /// Verbose output (repeat for more)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Cast configuration file (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// SQL dialect (default, postgresql)
    #[arg(short, long, global = true)]
    dialect: Option<String>,

    /// Session zone id (UTC, +08:00, GMT-3, ...)
    #[arg(short, long, global = true)]
    zone: Option<String>,

    /// Strict host casts
    #[arg(long, global = true)]
    ansi: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    color: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cast a literal with the interpreted backend
    Eval {
        /// Target type (boolean, timestamp)
        target: String,

        /// Value to cast; omit to cast NULL
        value: Option<String>,

        /// Source type of the value
        #[arg(short, long, default_value = "string")]
        from: String,

        /// Print the value as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the Rust code computing a cast
    Emit {
        /// Target type (boolean, timestamp)
        target: String,

        /// Source type of the input column
        #[arg(short, long, default_value = "string")]
        from: String,

        /// Cast a literal instead of an input column
        #[arg(short, long)]
        literal: Option<String>,

        /// Name of the generated function
        #[arg(short, long, default_value = "eval_cast")]
        name: String,

        /// Append the references the function expects
        #[arg(short, long)]
        references: bool,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Type check casts from one or more source types
    Check {
        /// Target type (boolean, timestamp)
        target: String,

        /// Source types to validate
        sources: Vec<String>,
    },
}

fn main() {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    output::setup_colors(&cli.color);
    logging::initialize(cli.verbose);

    let overrides = config::ConfigOverrides {
        config_file: cli.config,
        dialect: cli.dialect,
        zone: cli.zone,
        ansi: cli.ansi,
    };

    let result = match cli.command {
        Commands::Eval {
            target,
            value,
            from,
            json,
        } => eval::eval(eval::EvalConfig {
            target,
            from,
            value,
            json,
            overrides,
        }),

        Commands::Emit {
            target,
            from,
            literal,
            name,
            references,
            output,
        } => emit::emit(emit::EmitConfig {
            target,
            from,
            literal,
            name,
            references,
            output_file: output,
            overrides,
        }),

        Commands::Check { target, sources } => check::check(check::CheckConfig {
            target,
            sources,
            overrides,
        }),
    };

    if let Err(e) = result {
        eprintln!("{}", output::format_error(&e));
        std::process::exit(1);
    }
}
