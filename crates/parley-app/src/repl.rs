//! Line-based chat loop.

use std::io::Write;

use parley_ai::{CompletionProvider, ConversationSession};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::warn;

const EXIT_WORDS: [&str; 2] = ["exit", "quit"];

fn is_exit(line: &str) -> bool {
    EXIT_WORDS.iter().any(|w| line.eq_ignore_ascii_case(w))
}

/// Read prompts until EOF or an exit word, printing each reply.
///
/// Each line goes to the session exactly as typed, blank lines included.
/// Only a bare `exit` or `quit` (any case) ends the loop.
///
/// Provider failures are printed and the loop carries on; only I/O errors
/// on the terminal end it early.
pub async fn run<R, W>(
    session: &mut ConversationSession,
    provider: &dyn CompletionProvider,
    input: R,
    out: &mut W,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(
        out,
        "Chatting with {}. Type 'exit' or 'quit' to leave.",
        session.params().model()
    )?;

    let mut lines = input.lines();
    loop {
        write!(out, "You: ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };
        if is_exit(&line) {
            writeln!(out, "Exiting the chat. Goodbye!")?;
            break;
        }

        match session.get_response(provider, &line).await {
            Ok(reply) => writeln!(out, "ChatGPT: {reply}")?,
            Err(e) => {
                warn!(error = %e, "turn failed");
                writeln!(out, "Error: {e}")?;
            }
        }
    }
    Ok(())
}
