//! tfrefmt CLI entry point.
//!
//! This binary provides the command-line interface for tfrefmt.

use clap::Parser;
use std::process::ExitCode;
use tfrefmt::cli::{CheckArgs, Cli, Commands};
use tfrefmt::{Checker, Config};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.quiet);

    // Run the appropriate command
    match run(cli).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            tracing::error!(error = %e, "Fatal error");

            // Print error with full chain
            eprintln!("Error: {e}");

            // Print error chain (cause chain)
            let mut source = e.source();
            if source.is_some() {
                eprintln!("\nCaused by:");
                let mut i = 0;
                while let Some(cause) = source {
                    eprintln!("  {i}: {cause}");
                    source = cause.source();
                    i += 1;
                }
            }

            let code = e
                .downcast_ref::<tfrefmt::TfRefmtError>()
                .map_or(1, tfrefmt::TfRefmtError::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        // First try to use RUST_LOG from environment, otherwise use verbose flag
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            // Default filter: show logs for tfrefmt only, suppress all other crates
            let base_level = match verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            };
            // Filter string: tfrefmt at specified level, everything else at warn
            EnvFilter::new(format!("warn,tfrefmt={base_level}"))
        })
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(false))
        .with(filter)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    // Load configuration
    tracing::debug!("Loading configuration");
    let config = load_config(&cli)?;
    tracing::debug!("Configuration loaded successfully");

    match cli.command {
        Commands::Check(args) => {
            tracing::debug!("Executing check command");
            let config = apply_check_args(config, &args, cli.verbose);

            let checker = Checker::new(config.clone());
            let paths: Vec<&std::path::Path> =
                args.paths.iter().map(std::path::PathBuf::as_path).collect();
            let result = checker.check_paths(&paths).await?;

            // Generate report
            let reporter = tfrefmt::reporter::Reporter::new(&config);
            let report = reporter.generate(&result, args.format)?;

            // Output report
            if let Some(output_path) = args.output {
                std::fs::write(&output_path, &report)?;
                tracing::info!(path = %output_path.display(), "Report written");
            } else {
                println!("{report}");
            }

            // Return appropriate exit code
            let exit_code = if result.has_failures() {
                2 // Some files could not be checked
            } else if result.has_changes() && args.strict {
                1 // Drift found in strict mode
            } else {
                0 // Success
            };

            Ok(ExitCode::from(exit_code))
        }

        Commands::Init => {
            // Generate example configuration file
            let example_config = Config::example_yaml();
            let config_path = std::path::Path::new("tfrefmt.yaml");

            if config_path.exists() {
                anyhow::bail!("Configuration file already exists: {}", config_path.display());
            }

            std::fs::write(config_path, example_config)?;
            println!("Created example configuration: tfrefmt.yaml");
            Ok(ExitCode::from(0))
        }

        Commands::Validate(args) => {
            // Validate configuration file
            let config_content = std::fs::read_to_string(&args.config)?;
            match Config::from_yaml(&config_content) {
                Ok(_) => {
                    println!("Configuration is valid: {}", args.config.display());
                    Ok(ExitCode::from(0))
                }
                Err(e) => {
                    eprintln!("Configuration error: {e}");
                    Ok(ExitCode::from(1))
                }
            }
        }
    }
}

/// Layer check command arguments on top of the loaded configuration.
fn apply_check_args(mut config: Config, args: &CheckArgs, verbose: u8) -> Config {
    if let Some(context) = args.context {
        config.diff.context_lines = context;
    }
    if args.counts_only {
        config.diff.counts_only = true;
    }
    if args.no_color {
        config.output.colored = false;
    }
    if args.fail_fast {
        config.scan.continue_on_error = false;
    }
    if verbose > 0 {
        config.output.verbose = true;
    }
    config
        .scan
        .exclude_patterns
        .extend(args.exclude_patterns.iter().cloned());
    config
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    // Check for explicit config file
    if let Some(ref config_path) = cli.config {
        tracing::debug!(path = %config_path.display(), "Loading configuration from explicit path");
        let content = std::fs::read_to_string(config_path)?;
        return Ok(Config::from_yaml(&content)?);
    }

    // Look for default config files
    let default_paths = ["tfrefmt.yaml", "tfrefmt.yml", ".tfrefmt.yaml"];
    tracing::debug!("Searching for default configuration files");
    for path in &default_paths {
        if std::path::Path::new(path).exists() {
            tracing::debug!(path = %path, "Found configuration file");
            let content = std::fs::read_to_string(path)?;
            return Ok(Config::from_yaml(&content)?);
        }
    }

    tracing::debug!("No configuration file found, using default configuration");
    Ok(Config::default())
}
