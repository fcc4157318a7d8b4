mod display;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nyaya_ai::LegalAssistant;
use nyaya_core::{DocType, SearchFilters, Settings, ViabilityFilters};
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Legal research over statute sections and judgment excerpts.
#[derive(Parser, Debug)]
#[command(name = "nyaya", version, about)]
struct Cli {
    /// Settings file (JSON). Missing fields take defaults.
    #[arg(long, global = true, env = "NYAYA_CONFIG")]
    config: Option<PathBuf>,

    /// Corpus file (JSON array of chunks). Defaults to the built-in sample.
    #[arg(long, global = true, env = "NYAYA_CORPUS")]
    corpus: Option<PathBuf>,

    /// Log filter such as `info` or `nyaya_store=debug`. Overrides RUST_LOG.
    #[arg(long, global = true, env = "NYAYA_LOG_LEVEL")]
    log_level: Option<String>,

    /// Simulated answer latency in milliseconds.
    #[arg(long, global = true, env = "NYAYA_LATENCY_MS")]
    latency_ms: Option<u64>,

    /// Print JSON instead of cards.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank corpus chunks against a query.
    Search {
        query: String,
        #[arg(long, default_value_t = 5)]
        top_k: usize,
        /// `statute` or `judgment`.
        #[arg(long)]
        doc_type: Option<DocType>,
        #[arg(long)]
        act: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        court: Option<String>,
        #[arg(long)]
        case_type: Option<String>,
    },
    /// Ask a question. Without a query, start an interactive session.
    Chat {
        query: Option<String>,
        #[arg(long, default_value = "cli")]
        session: String,
    },
    /// Predict case viability from similar judgments.
    Viability {
        facts: String,
        #[arg(long)]
        court: Option<String>,
        #[arg(long)]
        case_type: Option<String>,
    },
    /// Prosecution and defense arguments for a scenario.
    Arguments { scenario: String },
    /// Drafting clauses for a petition need.
    Clauses { need: String },
    /// Section and act suggestions.
    Autocomplete { q: String },
    /// Service status.
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref())?;
    info!("nyaya v{}", env!("CARGO_PKG_VERSION"));

    let mut settings = match &cli.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };
    if let Some(ms) = cli.latency_ms {
        settings.simulated_latency_ms = ms;
    }

    let assistant = LegalAssistant::open(settings, cli.corpus.as_deref())
        .context("failed to start legal assistant")?;
    run(&assistant, cli.command, cli.json).await
}

fn init_tracing(filter: Option<&str>) -> Result<()> {
    let filter = match filter {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("invalid log filter {directives:?}"))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

async fn run(assistant: &LegalAssistant, command: Command, json: bool) -> Result<()> {
    match command {
        Command::Search {
            query,
            top_k,
            doc_type,
            act,
            category,
            court,
            case_type,
        } => {
            let filters = SearchFilters {
                doc_type,
                act_name: act,
                category,
                court,
                case_type,
            };
            let filters = (!filters.is_empty()).then_some(filters);
            let response = assistant.search(&query, filters.as_ref(), top_k)?;
            emit(json, &response, display::print_search)
        }
        Command::Chat {
            query: Some(query),
            session,
        } => {
            let response = assistant.chat(&session, &query).await?;
            emit(json, &response, display::print_chat)
        }
        Command::Chat {
            query: None,
            session,
        } => repl(assistant, &session, json).await,
        Command::Viability {
            facts,
            court,
            case_type,
        } => {
            let filters = ViabilityFilters { court, case_type };
            let result = assistant.predict_viability(&facts, Some(&filters))?;
            emit(json, &result, display::print_viability)
        }
        Command::Arguments { scenario } => {
            let result = assistant.extract_arguments(&scenario)?;
            emit(json, &result, display::print_arguments)
        }
        Command::Clauses { need } => {
            let result = assistant.select_clauses(&need)?;
            emit(json, &result, display::print_clauses)
        }
        Command::Autocomplete { q } => {
            let suggestions = assistant.autocomplete(&q)?;
            emit(json, &suggestions, |s| display::print_suggestions(s))
        }
        Command::Health => emit(json, &assistant.health(), display::print_health),
    }
}

/// Interactive chat on stdin. `:history` shows the session, `:clear` resets
/// it, `:quit` or end of input exits.
async fn repl(assistant: &LegalAssistant, session: &str, json: bool) -> Result<()> {
    eprintln!("session {session}; :history, :clear, :quit");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        let line = line.trim();
        match line {
            "" => continue,
            ":quit" | ":q" => break,
            ":history" => {
                let turns = assistant.history(session);
                if json {
                    println!("{}", serde_json::to_string_pretty(&turns)?);
                } else {
                    display::print_history(session, &turns);
                }
            }
            ":clear" => {
                assistant.clear_session(session);
                eprintln!("cleared session {session}");
            }
            query => match assistant.chat(session, query).await {
                Ok(response) => emit(json, &response, display::print_chat)?,
                Err(e) => eprintln!("error: {e}"),
            },
        }
        println!();
    }
    Ok(())
}

fn emit<T: Serialize>(json: bool, value: &T, card: impl Fn(&T)) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        card(value);
    }
    Ok(())
}
