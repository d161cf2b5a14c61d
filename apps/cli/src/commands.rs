//! CLI command definitions, routing, and tracing setup.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use ratescoverage_shared::{AppConfig, MergedRecord, init_config, load_config};
use tracing::info;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// rates-coverage — build the reference-rates coverage CSV files.
#[derive(Parser)]
#[command(
    name = "rates-coverage",
    version,
    about = "Build the reference-rates coverage list and its factsheet-only subset.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Config file (defaults to ./rates-coverage.toml, then ~/.rates-coverage/).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Defaults to `generate` when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Regenerate both CSV files.
    Generate {
        /// Output directory (overrides `[output] dir`).
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// Print the merged rows without writing any file.
    List {
        /// Emit JSON instead of a table.
        #[arg(long)]
        json: bool,

        /// Directory holding the prior coverage file (overrides `[output] dir`).
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags. Logs go to stderr.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(cli.verbose)));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

/// Filter directives for the library crates (`ratescoverage_*`) and this
/// binary (`rates_coverage`).
fn default_filter(verbose: u8) -> String {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    format!("ratescoverage={level},rates_coverage={level}")
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();
    match cli.command.unwrap_or(Command::Generate { dir: None }) {
        Command::Generate { dir } => cmd_generate(load_with_dir(config_path, dir)?),
        Command::List { json, dir } => cmd_list(load_with_dir(config_path, dir)?, json),
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(load_config(config_path)?),
        },
    }
}

/// Resolve config, then apply a `--dir` override.
fn load_with_dir(config_path: Option<&Path>, dir: Option<PathBuf>) -> Result<AppConfig> {
    let mut config = load_config(config_path)?;
    if let Some(dir) = dir {
        config.output.dir = dir;
    }
    Ok(config)
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

fn cmd_generate(config: AppConfig) -> Result<()> {
    info!(
        dir = %config.output.dir.display(),
        extra = config.extra_indices.len(),
        "generating coverage files"
    );

    let report = ratescoverage_core::generate(&config)?;

    println!();
    println!("  Coverage files written.");
    println!("  Records:     {}", report.records_in);
    println!("  Recovered:   {}", report.factsheets_recovered);
    println!(
        "  Coverage:    {} rows -> {}",
        report.rows_written,
        report.coverage_path.display()
    );
    println!(
        "  Factsheets:  {} rows -> {}",
        report.factsheet_rows,
        report.factsheets_path.display()
    );
    println!();

    Ok(())
}

fn cmd_list(config: AppConfig, json: bool) -> Result<()> {
    let rows = ratescoverage_core::build_rows(&config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    print_table(&rows);
    Ok(())
}

/// Aligned ticker / family / disseminations / factsheet table.
fn print_table(rows: &[MergedRecord]) {
    let ticker_w = rows.iter().map(|r| r.ticker.len()).max().unwrap_or(0).max(6);
    let family_w = rows.iter().map(|r| r.family.len()).max().unwrap_or(0).max(6);
    let dissem_w = rows
        .iter()
        .map(|r| r.disseminations.len())
        .max()
        .unwrap_or(0)
        .max(14);

    println!(
        "{:<ticker_w$}  {:<family_w$}  {:<dissem_w$}  FACTSHEET",
        "TICKER", "FAMILY", "DISSEMINATIONS"
    );
    for row in rows {
        println!(
            "{:<ticker_w$}  {:<family_w$}  {:<dissem_w$}  {}",
            row.ticker,
            row.family,
            row.disseminations,
            if row.has_factsheet() { "yes" } else { "-" }
        );
    }
    println!();
    println!("  {} rows", rows.len());
}

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show(config: AppConfig) -> Result<()> {
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_defaults_to_generate() {
        let cli = Cli::try_parse_from(["rates-coverage"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn generate_accepts_dir_override() {
        let cli = Cli::try_parse_from(["rates-coverage", "-vv", "generate", "--dir", "/tmp/out"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Command::Generate { dir }) => assert_eq!(dir, Some(PathBuf::from("/tmp/out"))),
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn list_json_flag() {
        let cli = Cli::try_parse_from(["rates-coverage", "list", "--json"]).unwrap();
        assert!(matches!(cli.command, Some(Command::List { json: true, dir: None })));
    }

    #[test]
    fn default_filter_covers_binary_target() {
        assert_eq!(default_filter(0), "ratescoverage=info,rates_coverage=info");
        assert_eq!(default_filter(1), "ratescoverage=debug,rates_coverage=debug");
        assert_eq!(default_filter(5), "ratescoverage=trace,rates_coverage=trace");
        assert!(module_path!().starts_with("rates_coverage"));
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
