use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tally::app::App;
use tally::cli::{run_classify, Cli, Commands};
use tally::engine::{Config, TallyError};
use tally::ui::TuiManager;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), TallyError> {
    match cli.command {
        Some(Commands::Tui) | None => {
            setup_tui_logging(cli.debug)?;
            let config = Config::load(cli.config.as_deref())?;

            let mut app = App::new(&config);
            let mut tui = TuiManager::new(config.ui.tick_rate_ms())?;

            // The TUI handles all user input including file loading commands
            tui.run_event_loop(&mut app)?;
        }
        Some(Commands::Classify(args)) => {
            setup_logging(cli.debug);
            println!("{}", run_classify(cli.config.as_deref(), &args)?);
        }
    }

    Ok(())
}

fn env_filter(debug: bool, fallback: &str) -> EnvFilter {
    if debug {
        EnvFilter::new("tally=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
    }
}

/// Log to stderr for one-shot commands
fn setup_logging(debug: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(debug, "tally=warn"))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Log to a file while the TUI owns the screen
fn setup_tui_logging(debug: bool) -> io::Result<()> {
    use std::fs::OpenOptions;
    use std::sync::Arc;

    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tally")
        .join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("tally.log"))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(debug, "tally=info"))
        .with_writer(Arc::new(file))
        .with_target(false)
        .with_ansi(false)
        .init();

    Ok(())
}
