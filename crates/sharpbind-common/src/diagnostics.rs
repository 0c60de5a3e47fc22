//! Use-site diagnostics.
//!
//! Accessibility and best-type queries are pure, but the host lookups they
//! perform (walking base types, classifying conversions) can discover problems
//! with the symbols they touch: a base type from an unreferenced assembly, a
//! circular base chain, a type argument list nested too deeply. Those are
//! reported through a [`UseSiteDiagnostics`] accumulator that the caller owns
//! and passes down explicitly.
//!
//! Diagnostics are stored as structured data (code plus arguments) and only
//! rendered into text by [`UseSiteDiagnostic::message_text`], so tentative
//! queries that throw their accumulator away never pay for formatting.

use serde::Serialize;
use smallvec::SmallVec;

/// Diagnostic category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum DiagnosticCategory {
    Warning = 0,
    Error = 1,
    Info = 2,
}

/// A diagnostic message template.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub message: &'static str,
}

pub mod diagnostic_codes {
    pub const TYPE_DEFINED_IN_UNREFERENCED_ASSEMBLY: u32 = 12;
    pub const CIRCULAR_BASE_DEPENDENCY: u32 = 146;
    pub const EXPRESSION_TOO_COMPLEX: u32 = 8078;
}

pub mod diagnostic_messages {
    use super::{DiagnosticCategory, DiagnosticMessage, diagnostic_codes};

    pub const TYPE_DEFINED_IN_UNREFERENCED_ASSEMBLY: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::TYPE_DEFINED_IN_UNREFERENCED_ASSEMBLY,
        category: DiagnosticCategory::Error,
        message: "The type '{0}' is defined in an assembly that is not referenced. You must add a reference to assembly '{1}'.",
    };

    pub const CIRCULAR_BASE_DEPENDENCY: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::CIRCULAR_BASE_DEPENDENCY,
        category: DiagnosticCategory::Error,
        message: "Circular base type dependency involving '{0}' and '{1}'",
    };

    pub const EXPRESSION_TOO_COMPLEX: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::EXPRESSION_TOO_COMPLEX,
        category: DiagnosticCategory::Error,
        message: "An expression is too long or complex to compile",
    };

    pub const ALL: &[DiagnosticMessage] = &[
        TYPE_DEFINED_IN_UNREFERENCED_ASSEMBLY,
        CIRCULAR_BASE_DEPENDENCY,
        EXPRESSION_TOO_COMPLEX,
    ];
}

pub fn get_message_template(code: u32) -> Option<&'static str> {
    diagnostic_messages::ALL
        .iter()
        .find(|m| m.code == code)
        .map(|m| m.message)
}

pub fn format_message(message: &str, args: &[&str]) -> String {
    let mut result = message.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}

/// A diagnostic discovered while using a symbol, without a source location.
///
/// The binder attaches the span of the expression that triggered the query
/// when it turns these into user-facing diagnostics.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct UseSiteDiagnostic {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub args: SmallVec<[String; 2]>,
}

impl UseSiteDiagnostic {
    pub fn new(message: DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            code: message.code,
            category: message.category,
            args: args.iter().map(|a| (*a).to_string()).collect(),
        }
    }

    /// Render the message text. Unknown codes render as their bare arguments.
    pub fn message_text(&self) -> String {
        let args: SmallVec<[&str; 2]> = self.args.iter().map(String::as_str).collect();
        match get_message_template(self.code) {
            Some(template) => format_message(template, &args),
            None => args.join(", "),
        }
    }
}

/// Accumulator for use-site diagnostics.
///
/// Created either accumulating ([`UseSiteDiagnostics::new`]) or discarding
/// ([`UseSiteDiagnostics::discarded`]). A discarding accumulator accepts and
/// drops everything, for callers that only want the boolean answer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UseSiteDiagnostics {
    diagnostics: Vec<UseSiteDiagnostic>,
    discarding: bool,
}

impl UseSiteDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn discarded() -> Self {
        Self {
            diagnostics: Vec::new(),
            discarding: true,
        }
    }

    #[inline]
    pub fn is_discarding(&self) -> bool {
        self.discarding
    }

    /// Record a diagnostic. Exact duplicates are kept once.
    pub fn add(&mut self, diagnostic: UseSiteDiagnostic) {
        if self.discarding || self.diagnostics.contains(&diagnostic) {
            return;
        }
        self.diagnostics.push(diagnostic);
    }

    pub fn report(&mut self, message: DiagnosticMessage, args: &[&str]) {
        if self.discarding {
            return;
        }
        self.add(UseSiteDiagnostic::new(message, args));
    }

    /// Move everything accumulated in `other` into `self`.
    pub fn merge(&mut self, other: UseSiteDiagnostics) {
        for diagnostic in other.diagnostics {
            self.add(diagnostic);
        }
    }

    /// Number of diagnostics recorded so far. Useful as a checkpoint to find
    /// out whether a nested query reported anything.
    #[inline]
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.category == DiagnosticCategory::Error)
    }

    pub fn iter(&self) -> impl Iterator<Item = &UseSiteDiagnostic> {
        self.diagnostics.iter()
    }
}

#[cfg(test)]
#[path = "../tests/diagnostics_tests.rs"]
mod tests;
