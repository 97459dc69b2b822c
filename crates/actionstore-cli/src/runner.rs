use std::io::Write;

use actionstore_core::Dispatcher;
use tracing::warn;

use crate::source::MessageSource;

/// Counts reported once the source is exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub succeeded: usize,
    pub bad_commands: usize,
    pub failed: usize,
}

/// Dispatch every message from `source`, one at a time, writing one result
/// line per message to `out`.
///
/// Unknown codes and undecodable lines are reported as bad commands, apart
/// from actions that ran and failed. Neither stops the loop; an unreadable
/// source does.
pub async fn run(
    source: &mut dyn MessageSource,
    dispatcher: &Dispatcher,
    out: &mut (dyn Write + Send),
) -> anyhow::Result<RunSummary> {
    let mut summary = RunSummary::default();

    loop {
        let message = match source.next_message().await {
            Ok(Some(message)) => message,
            Ok(None) => break,
            Err(err) if err.is_recoverable() => {
                warn!(error = %err, "skipping undecodable message");
                writeln!(out, "error: bad command: {err}")?;
                summary.bad_commands += 1;
                continue;
            }
            Err(err) => return Err(err.into()),
        };

        match dispatcher.dispatch_message(&message) {
            Ok(()) => {
                writeln!(out, "ok {}", message.code)?;
                summary.succeeded += 1;
            }
            Err(err) if err.is_unknown_action() => {
                warn!(code = err.code(), "unknown action code");
                writeln!(out, "error: bad command: {err}")?;
                summary.bad_commands += 1;
            }
            Err(err) => {
                writeln!(out, "error: {err}")?;
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}
