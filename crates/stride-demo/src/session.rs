//! The stdin command loop.

use stride_controller::Controller;
use stride_core::traits::{IActivityModel, IRandomSource, IRenderSurface};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::warn;

use crate::commands::{Command, HELP};

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Quit,
    EndOfInput,
    ReadFailed,
}

/// Dispatch each input line to `controller`, in arrival order, until `quit`,
/// end of input, or a read error. Lines that are not UTF-8 or not a known
/// command are reported and skipped.
pub async fn run_session<M, R, S, I>(controller: &Controller<M, R, S>, input: I) -> SessionEnd
where
    M: IActivityModel,
    R: IRandomSource,
    S: IRenderSurface,
    I: AsyncBufRead + Unpin,
{
    let mut lines = input.split(b'\n');
    loop {
        let raw = match lines.next_segment().await {
            Ok(Some(raw)) => raw,
            Ok(None) => return SessionEnd::EndOfInput,
            Err(e) => {
                warn!(error = %e, "failed to read input; ending session");
                return SessionEnd::ReadFailed;
            }
        };

        let line = match String::from_utf8(raw) {
            Ok(line) => line,
            Err(e) => {
                warn!(error = %e, "skipping input line that is not valid UTF-8");
                continue;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(Command::Trigger(event)) => {
                controller.dispatch(event).await;
            }
            Ok(Command::Help) => println!("{HELP}"),
            Ok(Command::Quit) => return SessionEnd::Quit,
            Err(e) => eprintln!("{e}"),
        }
    }
}
