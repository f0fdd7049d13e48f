use std::{io::Write, path::PathBuf};

use codespan_reporting::{
    diagnostic::{Diagnostic as Report, Label as ReportLabel, Severity},
    files::SimpleFiles,
    term::{self, Config},
};
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

use super::src_span::SrcSpan;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Warning,
    Error,
}

impl Level {
    fn name(self) -> &'static str {
        match self {
            Level::Warning => "warning",
            Level::Error => "error",
        }
    }

    fn colour(self) -> Color {
        match self {
            Level::Warning => Color::Yellow,
            Level::Error => Color::Red,
        }
    }
}

impl From<Level> for Severity {
    fn from(level: Level) -> Self {
        match level {
            Level::Warning => Severity::Warning,
            Level::Error => Severity::Error,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Label {
    pub text: Option<String>,
    pub span: SrcSpan
}

/// Where in which source a diagnostic points.
#[derive(Debug, Clone)]
pub struct Location<'a> {
    pub src: &'a str,
    pub path: PathBuf,
    pub label: Label,
}

impl Location<'_> {
    fn report_label(&self, file_id: usize) -> ReportLabel<usize> {
        let range = self.label.span.start as usize..self.label.span.end as usize;
        let label = ReportLabel::primary(file_id, range);

        match &self.label.text {
            Some(text) => label.with_message(text),
            None => label,
        }
    }
}

/// A report ready to be written. `text` and `hint` end up as trailing notes.
#[derive(Debug, Clone)]
pub struct Diagnostic<'a> {
    pub title: String,
    pub text: String,
    pub hint: Option<String>,
    pub level: Level,
    pub location: Option<Location<'a>>
}

impl Diagnostic<'_> {
    pub fn write(&self, buf: &mut Buffer) {
        match &self.location {
            Some(location) => self.write_located(location, buf),
            None => self.write_unlocated(buf),
        }
    }

    fn notes(&self) -> Vec<String> {
        let text = Some(self.text.clone()).filter(|text| !text.is_empty());
        let hint = self.hint.as_ref().map(|hint| format!("hint: {hint}"));

        text.into_iter().chain(hint).collect()
    }

    fn write_located(&self, location: &Location, buf: &mut Buffer) {
        let mut files = SimpleFiles::new();
        let file_id = files.add(location.path.display().to_string(), location.src);

        let report = Report::new(self.level.into())
            .with_message(&self.title)
            .with_labels(vec![location.report_label(file_id)])
            .with_notes(self.notes());

        term::emit(buf, &Config::default(), &files, &report)
            .expect("emit located diagnostic");
    }

    fn write_unlocated(&self, buf: &mut Buffer) {
        buf.set_color(ColorSpec::new().set_bold(true).set_fg(Some(self.level.colour())))
            .expect("unlocated diagnostic level colour");
        write!(buf, "{}", self.level.name()).expect("unlocated diagnostic level");

        buf.set_color(ColorSpec::new().set_bold(true))
            .expect("unlocated diagnostic title colour");
        writeln!(buf, ": {}", self.title).expect("unlocated diagnostic title");
        buf.reset().expect("unlocated diagnostic reset");

        for note in self.notes() {
            writeln!(buf, "  = {note}").expect("unlocated diagnostic note");
        }
    }
}
