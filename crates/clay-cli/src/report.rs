//! Error reporting on stderr
//!
//! Plain style prints the one-line `[line:column] Error: ...` form. Rich
//! style renders the same diagnostic as an ariadne report over the source.

use std::error::Error;
use std::path::Path;

use ariadne::{Color, Label, Report, ReportKind, Source};
use clap::ValueEnum;
use clay_parser::Diagnostic;

use crate::CliError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportStyle {
    /// One line per error
    #[default]
    Plain,
    /// Annotated source excerpt
    Rich,
}

/// Turn a stage error into a positioned diagnostic, if it has a position
pub fn diagnostic_for(error: &CliError, source: &str) -> Option<Diagnostic> {
    match error {
        CliError::Parse(err) => Some(Diagnostic::from(err)),
        CliError::Codegen(err) => {
            let span = err.span()?;
            let location = err.location()?;
            let lexeme = source.get(span.start..span.end).unwrap_or("");
            Some(Diagnostic::new(location, err.to_string(), lexeme, span))
        }
        CliError::Read { .. } | CliError::Write { .. } | CliError::Json(_) => None,
    }
}

/// Print exactly one report for `error`
pub fn report(error: &CliError, style: ReportStyle, file: &Path, source: Option<&str>) {
    let diagnostic = source.and_then(|src| diagnostic_for(error, src).map(|d| (d, src)));

    match (diagnostic, style) {
        (Some((diag, src)), ReportStyle::Rich) => {
            if report_rich(&diag, file, src).is_err() {
                eprintln!("{diag}");
            }
        }
        (Some((diag, _)), ReportStyle::Plain) => eprintln!("{diag}"),
        (None, _) => match error.source() {
            Some(cause) => eprintln!("{error}: {cause}"),
            None => eprintln!("{error}"),
        },
    }
}

fn report_rich(diag: &Diagnostic, file: &Path, source: &str) -> std::io::Result<()> {
    let name = file.to_string_lossy().to_string();
    // ariadne counts characters, spans count bytes
    let start = char_offset(source, diag.span.start);
    let end = char_offset(source, diag.span.end);

    Report::build(ReportKind::Error, name.clone(), start)
        .with_message(&diag.message)
        .with_label(
            Label::new((name.clone(), start..end))
                .with_message(format!("{} at {}", diag.message, diag.location))
                .with_color(Color::Red),
        )
        .finish()
        .eprint((name, Source::from(source)))
}

fn char_offset(source: &str, byte: usize) -> usize {
    source.get(..byte).map_or(0, |prefix| prefix.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::translate;

    #[test]
    fn test_parse_error_has_diagnostic() {
        let source = "print 1\nwat";
        let err = translate(source).unwrap_err();
        let diag = diagnostic_for(&err, source).expect("diagnostic");
        assert_eq!(diag.to_string(), "[2:1] Error: Unknown identifier at 'wat'");
    }

    #[test]
    fn test_io_error_has_no_diagnostic() {
        let err = CliError::Read {
            path: "x.clay".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(diagnostic_for(&err, "").is_none());
    }

    #[test]
    fn test_char_offset() {
        assert_eq!(char_offset("h\u{e9}llo", 3), 2);
        assert_eq!(char_offset("abc", 10), 0);
    }
}
