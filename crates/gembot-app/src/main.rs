mod cli;
mod repl;

use std::process::ExitCode;

use gembot_ai::{builtin_registry, ClockTool, EmailTool, GeminiClient, GeminiConfig, Session};
use gembot_common::GembotError;
use gembot_config::BotConfig;
use tracing_subscriber::EnvFilter;

/// `--log-level` wins, then `RUST_LOG`, then the config file's level.
fn init_logging(args: &cli::Args) {
    let filter = match &args.log_level {
        Some(level) => EnvFilter::try_new(level).ok(),
        None => EnvFilter::try_from_default_env().ok(),
    }
    .unwrap_or_else(|| {
        EnvFilter::try_new(peek_log_level(args)).unwrap_or_else(|_| EnvFilter::new("warn"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_registry(config: &BotConfig) -> Result<gembot_ai::ToolRegistry, GembotError> {
    let tz = config.clock.tz()?;
    builtin_registry(ClockTool::new(tz), EmailTool::new(config.smtp.clone()))
        .map_err(|e| GembotError::Ai(e.to_string()))
}

async fn run(args: cli::Args) -> Result<(), GembotError> {
    let mut config = gembot_config::load_config(args.config.as_deref())?;
    if let Some(model) = &args.model {
        gembot_config::override_model(&mut config, model)?;
    }

    let registry = build_registry(&config)?;
    if args.list_tools {
        println!("{}", registry.describe_all());
        return Ok(());
    }

    let gemini = GeminiConfig::from_settings(&config.gemini)?;
    tracing::info!(model = %gemini.model, "Using Gemini model");
    let client = GeminiClient::new(gemini).map_err(|e| GembotError::Ai(e.to_string()))?;

    let mut session = Session::start(client, registry);
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    repl::run(&mut session, &config.console, stdin, tokio::io::stdout()).await?;

    let usage = session.tracker();
    tracing::info!(
        round_trips = usage.round_trips(),
        input_tokens = usage.total().input_tokens,
        output_tokens = usage.total().output_tokens,
        total_tokens = usage.total_tokens(),
        "Session ended"
    );
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = cli::parse();

    init_logging(&args);

    tracing::info!("Gembot v{} starting...", env!("CARGO_PKG_VERSION"));

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// The `logging.level` from the config file, without touching the
/// environment or creating a default file.
fn peek_log_level(args: &cli::Args) -> String {
    let path = match &args.config {
        Some(path) => Some(path.clone()),
        None => gembot_config::toml_loader::default_config_path().ok(),
    };
    path.and_then(|p| std::fs::read_to_string(p).ok())
        .and_then(|text| gembot_config::toml_loader::parse_str(&text).ok())
        .map(|config| config.logging.level)
        .unwrap_or_else(|| gembot_config::LoggingConfig::default().level)
}
