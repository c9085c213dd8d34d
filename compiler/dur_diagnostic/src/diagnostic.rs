//! Core diagnostic type.

use std::fmt;

use dur_ir::Span;

use crate::LintCode;

/// A span with a message. Each finding has one primary label at the
/// offending value and may point at related code with secondary ones.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub span: Span,
    pub message: String,
    pub is_primary: bool,
}

/// One finding: a lint code, a message and where it applies.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: LintCode,
    pub message: String,
    pub labels: Vec<Label>,
    pub notes: Vec<String>,
}

impl Diagnostic {
    #[cold]
    pub fn new(code: LintCode) -> Self {
        Diagnostic {
            code,
            message: String::new(),
            labels: Vec::new(),
            notes: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add a primary label at the finding's location.
    pub fn with_label(self, span: Span, message: impl Into<String>) -> Self {
        self.labeled(span, message.into(), true)
    }

    pub fn with_secondary_label(self, span: Span, message: impl Into<String>) -> Self {
        self.labeled(span, message.into(), false)
    }

    fn labeled(mut self, span: Span, message: String, is_primary: bool) -> Self {
        self.labels.push(Label {
            span,
            message,
            is_primary,
        });
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Span of the first primary label.
    pub fn primary_span(&self) -> Option<Span> {
        self.labels.iter().find(|l| l.is_primary).map(|l| l.span)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        for label in &self.labels {
            let marker = if label.is_primary { "-->" } else { "   " };
            write!(f, "\n  {marker} {}: {}", label.span, label.message)?;
        }
        for note in &self.notes {
            write!(f, "\n  = note: {note}")?;
        }
        Ok(())
    }
}

/// A unit-less value flows into a duration-typed assignment target.
#[cold]
pub fn unitless_assignment(span: Span) -> Diagnostic {
    Diagnostic::new(LintCode::L0001)
        .with_message("untyped constant in time.Duration assignment")
        .with_label(span, "unit-less value assigned to a duration")
        .with_note("multiply by a unit such as `time.Second` to state the intended unit")
}

/// A unit-less value is passed where a duration parameter is expected.
#[cold]
pub fn unitless_argument(span: Span) -> Diagnostic {
    Diagnostic::new(LintCode::L0002)
        .with_message("untyped constant in time.Duration argument")
        .with_label(span, "unit-less value passed as a duration")
        .with_note("multiply by a unit such as `time.Second` to state the intended unit")
}

/// An integer is converted to a duration and never multiplied by a unit.
///
/// `span` is the converted value, `conversion` the whole conversion call.
#[cold]
pub fn improper_conversion(span: Span, conversion: Span) -> Diagnostic {
    Diagnostic::new(LintCode::L0003)
        .with_message(
            "converting integer via time.Duration() without multiplication by proper duration",
        )
        .with_label(span, "integer interpreted as nanoseconds")
        .with_secondary_label(conversion, "converted here")
        .with_note("multiply the conversion by a unit, e.g. `time.Duration(n) * time.Second`")
}
