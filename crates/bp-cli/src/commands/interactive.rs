//! Interactive session reading records from a line source.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::Config;
use crate::session::{FAREWELL, Session, decode_line};

/// Why the interactive loop stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// The user typed one of the exit commands.
    Command(String),
    /// The input ran out.
    EndOfInput,
}

/// Reads records until an exit command or end of input, then says goodbye.
///
/// The session keeps whatever counts it already holds, so a preceding
/// preload carries over. A line that is not valid UTF-8 is rejected as a
/// malformed record instead of ending the session.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session<W>,
    mut reader: R,
    config: &Config,
) -> Result<StopReason> {
    let mut stop = StopReason::EndOfInput;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .context("failed to read input")?;
        if read == 0 {
            break;
        }
        let line = decode_line(&buf);
        if config.is_exit_command(&line) {
            stop = StopReason::Command(line.into_owned());
            break;
        }
        session.handle_line(&line)?;
        session.flush()?;
    }

    tracing::debug!(
        ?stop,
        accepted = session.table().accepted(),
        rejected = session.rejected(),
        "interactive session finished"
    );
    session.say(FAREWELL)?;
    Ok(stop)
}
