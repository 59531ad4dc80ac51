use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info, warn};

use estimator_ui::logging::init_logging;
use estimator_ui::{AppConfig, Outcome, Session};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Systems and points estimator.
///
/// Reads one command per line from stdin (or a script file) and prints the
/// resulting page. Type `help` for the command list.
#[derive(Debug, Parser)]
struct Cli {
    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level or filter directive. Overrides the config file; `RUST_LOG` wins over both.
    #[arg(long)]
    log_level: Option<String>,

    /// Append log records to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Read commands from this file instead of stdin.
    #[arg(long)]
    script: Option<PathBuf>,
}

// ─── configuration ───────────────────────────────────────────────────────────

fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("loading config from '{}'", path.display()))?,
        None => AppConfig::default(),
    };
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }
    if let Some(file) = &cli.log_file {
        config.logging.file = Some(file.clone());
    }
    Ok(config)
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_logging(&config.logging).context("initializing logging")?;
    debug!(?config, "configuration loaded");

    let (mut input, interactive): (Box<dyn BufRead>, bool) = match &cli.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("opening script '{}'", path.display()))?;
            info!(script = %path.display(), "running script");
            (Box::new(BufReader::new(file)), false)
        }
        None => (Box::new(io::stdin().lock()), io::stdin().is_terminal()),
    };

    let mut session = Session::new(config.estimate);
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", session.page())?;

    let mut line = String::new();
    loop {
        if interactive {
            write!(stdout, "{}> ", session.route())?;
            stdout.flush()?;
        }
        line.clear();
        if input.read_line(&mut line).context("reading command")? == 0 {
            break;
        }
        match session.handle_line(&line) {
            Ok(Outcome::Continue(text)) if text.is_empty() => {}
            Ok(Outcome::Continue(text)) => writeln!(stdout, "{text}")?,
            Ok(Outcome::Quit) => break,
            Err(err) => {
                warn!(%err, command = %line.trim(), "command rejected");
                writeln!(stdout, "error: {err}")?;
            }
        }
    }

    info!("session ended");
    Ok(())
}
