use std::io::{self, Write};

use anyhow::{Context, Result};
use ash_cli::{build_responder, AppConfig, ChatSession};
use ash_core::Locale;
use ash_observability::{init_tracing, AppMetrics, LogFormat};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "ash")]
#[command(about = "Ash, a rule-based mental-health support companion")]
struct Cli {
    /// Locale for the culture-specific wrapper (`tw` or `default`).
    #[arg(long, env = "ASH_LOCALE", default_value = "tw")]
    locale: String,

    /// Seed for reply selection; omit for fresh randomness each run.
    #[arg(long, env = "ASH_SEED")]
    seed: Option<u64>,

    #[arg(long, env = "ASH_MAX_INPUT", default_value_t = 2000)]
    max_input: usize,

    #[arg(long, env = "ASH_LOG_FORMAT", value_enum, default_value_t = LogFormatArg::Pretty)]
    log_format: LogFormatArg,

    /// Print structured replies as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Interactive chat (the default).
    Chat,
    /// Reply to a single message and exit.
    Say { text: String },
    /// Walk through a CBT module by name.
    Cbt { name: String },
    /// List available CBT modules.
    Modules,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormatArg {
    Pretty,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing("ash_cli", cli.log_format.into());

    let locale = cli
        .locale
        .parse::<Locale>()
        .context("invalid --locale value")?;
    let config = AppConfig {
        locale,
        seed: cli.seed,
        max_input_graphemes: cli.max_input,
        json: cli.json,
    };

    let responder = build_responder(&config);
    let metrics = AppMetrics::shared();
    let stdout = io::stdout();

    match cli.command.unwrap_or(Command::Chat) {
        Command::Chat => {
            let session =
                ChatSession::new(&responder, config.locale, metrics).with_json(config.json);
            session.run(io::stdin().lock(), stdout.lock())?;
        }
        Command::Say { text } => {
            let reply = ChatSession::new(&responder, config.locale, metrics).handle_turn(&text);
            let mut out = stdout.lock();
            if config.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&reply)?)?;
            } else {
                writeln!(out, "{}", reply.text)?;
            }
        }
        Command::Cbt { name } => {
            metrics.record_cbt_lookup(responder.find_cbt(&name).is_some());
            tracing::debug!(module = %name, metrics = ?metrics.snapshot(), "cbt module requested");
            writeln!(stdout.lock(), "{}", responder.start_cbt(&name))?;
        }
        Command::Modules => {
            let names = responder.cbt_modules().collect::<Vec<_>>();
            let mut out = stdout.lock();
            if config.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&names)?)?;
            } else {
                for name in names {
                    writeln!(out, "- {name}")?;
                }
            }
        }
    }

    Ok(())
}
