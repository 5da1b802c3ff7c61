//! Batch preload of break records from a file.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::session::{Session, decode_line};

/// Summary of a preload run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreloadSummary {
    pub accepted: usize,
    pub rejected: usize,
}

/// Feeds every line of `path` to the session, in file order.
///
/// A file that cannot be read is fatal; individual bad records, including
/// lines that are not valid UTF-8, are reported and skipped.
pub fn run<W: Write>(session: &mut Session<W>, path: &Path) -> Result<PreloadSummary> {
    let contents = std::fs::read(path)
        .with_context(|| format!("Failed to read file `{}`!", path.display()))?;

    let accepted_before = session.table().accepted();
    let rejected_before = session.rejected();
    for raw in contents.split_inclusive(|&b| b == b'\n') {
        session.handle_line(&decode_line(raw))?;
    }
    session.flush()?;

    let summary = PreloadSummary {
        accepted: session.table().accepted() - accepted_before,
        rejected: session.rejected() - rejected_before,
    };
    tracing::debug!(
        path = %path.display(),
        accepted = summary.accepted,
        rejected = summary.rejected,
        "preloaded records"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;

    use crate::session::OutputFormat;

    #[test]
    fn preload_reports_each_line() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("breaks.txt");
        std::fs::write(&path, "08:0010:00\n09:0011:00\nnot a record\n09:3009:45\n").unwrap();

        let mut session = Session::new(Vec::new(), OutputFormat::Text);
        let summary = run(&mut session, &path).unwrap();

        assert_eq!(
            summary,
            PreloadSummary {
                accepted: 3,
                rejected: 1
            }
        );
        let output = String::from_utf8(session.into_writer()).unwrap();
        assert_snapshot!(output, @r"
        Busiest range is 08:00-10:00 with 1 driver taking a break.
        Busiest range is 09:00-10:00 with 2 drivers taking a break.
        Failed parsing time range `not a record`! Pattern does not match.
        Busiest range is 09:30-09:45 with 3 drivers taking a break.
        ");
    }

    #[test]
    fn preload_handles_crlf_line_endings() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("breaks.txt");
        std::fs::write(&path, "08:0010:00\r\n09:0011:00\r\n").unwrap();

        let mut session = Session::new(Vec::new(), OutputFormat::Text);
        let summary = run(&mut session, &path).unwrap();

        assert_eq!(summary.accepted, 2);
        assert_eq!(summary.rejected, 0);
    }

    #[test]
    fn preload_treats_blank_lines_as_records() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("breaks.txt");
        std::fs::write(&path, "08:0010:00\n\n").unwrap();

        let mut session = Session::new(Vec::new(), OutputFormat::Text);
        let summary = run(&mut session, &path).unwrap();

        assert_eq!(summary.accepted, 1);
        assert_eq!(summary.rejected, 1);
    }

    #[test]
    fn preload_skips_lines_that_are_not_utf8() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("breaks.txt");
        std::fs::write(&path, b"09:0010:00\n\xe9t\xe9\n09:3010:30\n").unwrap();

        let mut session = Session::new(Vec::new(), OutputFormat::Text);
        let summary = run(&mut session, &path).unwrap();

        assert_eq!(
            summary,
            PreloadSummary {
                accepted: 2,
                rejected: 1
            }
        );
        let output = String::from_utf8(session.into_writer()).unwrap();
        assert_eq!(
            output,
            "Busiest range is 09:00-10:00 with 1 driver taking a break.\n\
             Failed parsing time range `\u{fffd}t\u{fffd}`! Pattern does not match.\n\
             Busiest range is 09:30-10:00 with 2 drivers taking a break.\n"
        );
    }

    #[test]
    fn preload_of_empty_file_reports_nothing() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("breaks.txt");
        std::fs::write(&path, "").unwrap();

        let mut session = Session::new(Vec::new(), OutputFormat::Text);
        let summary = run(&mut session, &path).unwrap();

        assert_eq!(summary.accepted + summary.rejected, 0);
        assert!(session.into_writer().is_empty());
    }

    #[test]
    fn preload_fails_on_missing_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("missing.txt");

        let mut session = Session::new(Vec::new(), OutputFormat::Text);
        let err = run(&mut session, &path).unwrap_err();

        assert!(err.to_string().starts_with("Failed to read file `"));
        assert!(session.table().is_empty());
        assert!(session.into_writer().is_empty());
    }
}
