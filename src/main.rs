use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tasklist::config::{self, AppConfig};
use tasklist::session::{Outcome, Session, HELP};

#[derive(Parser)]
#[command(name = "tasklist")]
#[command(about = "Task list sorted by priority, then deadline")]
struct Cli {
    /// strftime pattern for the deadline column (overrides config)
    #[arg(long, global = true)]
    date_format: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session (default)
    Shell,
    /// Print the effective configuration
    Config {
        /// Write the effective configuration to the config file
        #[arg(long)]
        save: bool,
    },
}

/// Logs go to stderr so stdout only carries the table.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "tasklist=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run_shell(config: AppConfig) -> anyhow::Result<()> {
    let mut session = Session::new(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    write!(stdout, "{}", HELP)?;
    write!(stdout, "{}", session.render())?;

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).context("Failed to read input")? == 0 {
            break;
        }

        match session.handle_line(&line) {
            Outcome::Output(text) => write!(stdout, "{}", text)?,
            Outcome::Quit => break,
        }
    }

    tracing::debug!("Session ended with {} tasks", session.manager().len());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = AppConfig::load();
    if let Some(format) = cli.date_format.as_deref() {
        if !config.set_date_format(format) {
            anyhow::bail!("Invalid date format: {}", format);
        }
    }

    match cli.command {
        Some(Commands::Config { save }) => {
            println!("{}", serde_json::to_string_pretty(&config)?);
            if save {
                config.save()?;
                println!("Saved to {}", config::get_config_path()?.display());
            }
        }
        Some(Commands::Shell) | None => run_shell(config)?,
    }

    Ok(())
}
