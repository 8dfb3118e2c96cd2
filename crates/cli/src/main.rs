use clap::{Parser, Subcommand, ValueEnum};

mod commands;

#[derive(Parser)]
#[command(name = "pwrules")]
#[command(version, about = "Password rules inspector", long_about = None)]
struct Cli {
    /// Log interpretation details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interpret a rule string
    Parse {
        /// Rule string, e.g. "minlength: 8; required: digit;"
        rule: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Show the property map of a rule string
    Tokens {
        /// Rule string
        rule: String,
    },
    /// Show the members of a character class
    Class {
        /// Class name (e.g. "upper") or bracket expression (e.g. "[!@#]")
        spec: String,

        /// Number of members to print
        #[arg(short, long, default_value_t = 64)]
        limit: usize,
    },
    /// Find the rule for a domain in a quirks file
    Lookup {
        /// Path to a .json or .toml quirks file
        file: String,

        /// Domain to look up; parent domains are tried in turn
        domain: String,
    },
    /// Interpret every rule of a quirks file and report adjustments
    Check {
        /// Path to a .json or .toml quirks file
        file: String,
    },
}

/// Output format for `parse`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Canonical rule string and diagnostics
    Text,
    /// JSON document
    Json,
    /// TOML document
    Toml,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Parse { rule, format } => commands::rule::parse(&rule, format)?,
        Commands::Tokens { rule } => commands::rule::tokens(&rule),
        Commands::Class { spec, limit } => commands::rule::class(&spec, limit)?,
        Commands::Lookup { file, domain } => commands::quirks::lookup(&file, &domain)?,
        Commands::Check { file } => commands::quirks::check(&file)?,
    }

    Ok(())
}
