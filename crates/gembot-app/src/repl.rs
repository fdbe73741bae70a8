//! Interactive console loop.

use gembot_ai::{ChatHandle, Session};
use gembot_config::ConsoleConfig;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

/// Read prompts from `input` until the quit command or EOF, writing each
/// reply to `output`. A failed turn is reported and the loop carries on.
pub async fn run<C, R, W>(
    session: &mut Session<C>,
    console: &ConsoleConfig,
    input: R,
    mut output: W,
) -> std::io::Result<()>
where
    C: ChatHandle,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();

    output
        .write_all(format!("{}\n", console.banner).as_bytes())
        .await?;

    loop {
        output.write_all(console.user_label.as_bytes()).await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            debug!("stdin closed");
            output.write_all(b"\n").await?;
            break;
        };

        if console.is_quit(&line) {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let text = match session.ask(line).await {
            Ok(reply) => format!("{}{reply}\n", console.bot_label),
            Err(e) => {
                warn!(error = %e, "Turn failed");
                format!("error: {e}\n")
            }
        };
        output.write_all(text.as_bytes()).await?;
    }

    output.flush().await
}
