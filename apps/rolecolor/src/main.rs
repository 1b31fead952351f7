use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use rolecolor::config::Config;
use rolecolor::input::resolve_input;
use rolecolor::llm_client;
use rolecolor::rewriting::Rewriter;
use rolecolor::run_pipeline;
use rolecolor::scoring::taxonomy::taxonomy_summary;

#[derive(Parser, Debug)]
#[command(author, version, about = "RoleColor NLP Pipeline", long_about = None)]
struct Args {
    /// Path to a resume file (.txt or .pdf). Reads piped stdin when omitted.
    #[arg(long, alias = "input_data", value_name = "PATH")]
    input_data: Option<PathBuf>,

    /// Print the role taxonomy and exit
    #[arg(long)]
    list_roles: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    dotenvy::dotenv().ok(); // load .env before logging so RUST_LOG there applies

    // Logs go to stderr; stdout carries only the JSON document.
    tracing_subscriber::registry()
        .with(EnvFilter::new(Config::log_directive(|key| {
            std::env::var(key).ok()
        })))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if args.list_roles {
        print_json(&taxonomy_summary())?;
        return Ok(());
    }

    let stdin = std::io::stdin();
    let text = resolve_input(args.input_data.as_deref(), stdin.is_terminal(), stdin.lock())?;

    // Fails fast on a missing GEMINI_API_KEY, before any call is attempted.
    let config = Config::from_env()?;
    let rewriter = Rewriter::new(&config)?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let output = run_pipeline(&text, &rewriter).await?;
    print_json(&output)?;

    Ok(())
}

/// Pretty-prints `value` to stdout with 4-space indentation.
fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    println!("{}", String::from_utf8(buf)?);
    Ok(())
}
