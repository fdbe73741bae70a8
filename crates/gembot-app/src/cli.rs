use std::path::PathBuf;

use clap::Parser;

/// Gembot — a Gemini chatbot that can read the clock and send email.
#[derive(Parser, Debug)]
#[command(name = "gembot", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. debug, gembot_ai=debug).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Model name override.
    #[arg(long)]
    pub model: Option<String>,

    /// Print the tools the model can call, then exit.
    #[arg(long)]
    pub list_tools: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
