//! Rendering of extraction errors as build diagnostics

use ariadne::{Color, Config, Label, Report, ReportKind, Source};

use crate::error::EventError;

impl EventError {
    /// Renders the error against the source text of `filename` as a plain-text
    /// report pointing at the offending node.
    pub fn render(&self, filename: &str, source: &str) -> String {
        let span = (filename, self.span.start..self.span.end);
        let mut out = Vec::new();
        let written = Report::build(ReportKind::Error, span.clone())
            .with_config(Config::default().with_color(false))
            .with_code(self.kind.code())
            .with_message(format!("Unable to extract event \"{}\"", self.declaration))
            .with_label(
                Label::new(span)
                    .with_message(self.kind.to_string())
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut out);

        match written {
            Ok(()) => String::from_utf8_lossy(&out).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}
