//! Ticklist - terminal checklist viewer
//!
//! Run with `ticklist` or `ticklist --help` for usage.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ticklist::{
    config::Config,
    tui::{build_document, defer_panic_report, App},
    APP_NAME, VERSION,
};

#[derive(Parser)]
#[command(name = APP_NAME)]
#[command(version = VERSION)]
#[command(about = "A terminal-resident checklist viewer")]
#[command(long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive checklist (default)
    View,

    /// Print the checklist as plain text
    Print,

    /// Show configuration
    Config {
        /// Initialize config file with defaults
        #[arg(long)]
        init: bool,
    },
}

fn setup_logging(debug: bool, log_file: Option<PathBuf>) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    match log_file {
        // Log to file in interactive mode so logs don't draw over the screen
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;

            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(file).with_ansi(false).with_target(false))
                .with(filter)
                .init();
        }
        None => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
                .with(filter)
                .init();
        }
    }

    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> Config {
    let loaded = match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    loaded.unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load config, using defaults: {}", e);
        Config::default()
    })
}

/// Install color-eyre hooks
///
/// Panic reports raised during the interactive session are held back until
/// the terminal has left the alternate screen, otherwise they would vanish
/// with it.
fn install_hooks() -> Result<()> {
    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook.install()?;

    std::panic::set_hook(Box::new(move |info| {
        let report = panic_hook.panic_report(info).to_string();
        if let Some(report) = defer_panic_report(report) {
            eprintln!("{report}");
        }
    }));
    Ok(())
}

fn main() -> Result<()> {
    install_hooks()?;

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref());
    let debug = cli.debug || config.debug;

    match cli.command {
        None | Some(Commands::View) => {
            setup_logging(debug, Some(config.log_file_path()))?;
            info!("Starting {} v{}", APP_NAME, VERSION);

            let document = build_document(&config);
            let mut app = App::new(&config, document);
            app.run()?;

            info!("Exited cleanly");
        }

        Some(Commands::Print) => {
            setup_logging(debug, None)?;

            let document = build_document(&config);
            for entry in document.entries() {
                println!("{}", entry.render(config.show_timestamps).text);
            }
        }

        Some(Commands::Config { init }) => {
            setup_logging(debug, None)?;

            let path = match cli.config {
                Some(path) => path,
                None => Config::config_file_path()?,
            };

            if init {
                config.save_to(&path)?;
                println!("Configuration initialized at {:?}", path);
            } else {
                println!("Configuration:");
                println!("{}", toml::to_string_pretty(&config)?);
                println!("\nConfig file: {:?}", path);
                println!("Log file: {:?}", config.log_file_path());
            }
        }
    }

    Ok(())
}
