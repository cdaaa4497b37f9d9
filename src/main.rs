//! rapid-summarizer CLI
//!
//! Two modes:
//!
//! - `serve`: load language resources once, then answer `POST /summarize`
//!   requests over HTTP until interrupted.
//! - `summarize`: summarize a file (or stdin) and print the result.
//!
//! Language resources are loaded before anything else; if they cannot be
//! loaded the process exits with an error and never serves traffic.

use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rapid_summarizer::service::server;
use rapid_summarizer::{
    LanguageResources, ScoringMethod, ServerConfig, ServiceResponse, SummarizeService,
    Summarizer, SummarizerConfig,
};

/// Frequency-based extractive text summarization
///
/// Examples:
///   rapid-summarizer serve --port 8080
///   rapid-summarizer summarize article.txt --ratio 0.2
///   cat article.txt | rapid-summarizer summarize --method frequency
#[derive(Parser, Debug)]
#[command(name = "rapid-summarizer")]
#[command(version)]
#[command(about, long_about = None)]
struct Cli {
    /// Verbose logging (debug level unless RUST_LOG is set)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP service
    Serve(ServeArgs),
    /// Summarize a file or stdin
    Summarize(SummarizeArgs),
}

#[derive(Args, Debug)]
struct ServeArgs {
    /// Config file (defaults to ./summarizer.toml when present)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Address to bind
    #[arg(long)]
    host: Option<String>,

    /// Port to bind
    #[arg(short, long)]
    port: Option<u16>,

    /// Stopword language
    #[arg(short, long)]
    language: Option<String>,
}

#[derive(Args, Debug)]
struct SummarizeArgs {
    /// Input file; reads stdin when omitted
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Fraction of sentences to keep
    #[arg(short, long, default_value_t = rapid_summarizer::DEFAULT_RATIO)]
    ratio: f64,

    /// Scoring method: extractive or frequency
    #[arg(short, long, default_value = "extractive")]
    method: String,

    /// Stopword language
    #[arg(short, long, default_value = "en")]
    language: String,

    /// Print the JSON response the HTTP service would return
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Serve(args) => run_serve(args),
        Command::Summarize(args) => run_summarize(args),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load resources, bind, and serve until Ctrl-C.
fn run_serve(args: ServeArgs) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
    let mut config = ServerConfig::load(args.config.as_deref(), &cwd)
        .context("Failed to load configuration")?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(language) = args.language {
        config.language = language;
    }
    tracing::info!("{}", config.display_summary());

    let resources = LanguageResources::load(&config.language).with_context(|| {
        format!("Failed to load language resources for '{}'", config.language)
    })?;
    let summarizer = Summarizer::new(Arc::new(resources));
    let service = Arc::new(SummarizeService::new(summarizer, config.defaults));

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    runtime.block_on(async move {
        let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port))
            .await
            .with_context(|| format!("Failed to bind {}:{}", config.host, config.port))?;
        server::serve(listener, service)
            .await
            .context("HTTP server failed")
    })
}

/// Summarize one document and print the result.
fn run_summarize(args: SummarizeArgs) -> Result<()> {
    let text = match args.input {
        Some(ref path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read '{}'", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let resources = LanguageResources::load(&args.language).with_context(|| {
        format!("Failed to load language resources for '{}'", args.language)
    })?;
    let summarizer = Summarizer::new(Arc::new(resources));

    let result = args
        .method
        .parse::<ScoringMethod>()
        .and_then(|method| {
            let cfg = SummarizerConfig::default()
                .with_ratio(args.ratio)
                .with_method(method);
            summarizer.summarize(&text, &cfg)
        });

    if args.json {
        let response = match result {
            Ok(summary) => ServiceResponse::summary(summary.text),
            Err(ref err) => ServiceResponse::error(err),
        };
        println!("{}", serde_json::to_string_pretty(&response.body)?);
        return Ok(());
    }

    let summary = result?;
    tracing::debug!(
        sentences = summary.sentence_count,
        selected = summary.selected.len(),
        "summary ready"
    );
    println!("{summary}");
    Ok(())
}
