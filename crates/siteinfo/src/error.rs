// ABOUTME: Error types for the siteinfo parser including ErrorCode enum and ParseError struct.
// ABOUTME: Provides categorized errors with convenience constructors and boolean helpers.

use std::fmt;

/// Error codes representing different categories of parse failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// The page's own marker says no statistics exist for this domain.
    InsufficientData,
    /// A scalar selector matched nothing, or matched only empty text.
    FieldNotFound,
    /// A numeric field's text failed to parse after separator stripping.
    MalformedNumber,
    /// A tabular section's row container matched no node.
    TableAbsent,
    /// The fetch failed or returned a non-success status.
    Transport,
    /// The input bytes could not be turned into an HTML document.
    Parse,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InsufficientData => "insufficient data",
            ErrorCode::FieldNotFound => "field not found",
            ErrorCode::MalformedNumber => "malformed number",
            ErrorCode::TableAbsent => "section absent",
            ErrorCode::Transport => "transport error",
            ErrorCode::Parse => "parse error",
        };
        write!(f, "{}", s)
    }
}

/// The main error type for siteinfo operations.
#[derive(Debug, thiserror::Error)]
pub struct ParseError {
    pub code: ErrorCode,
    /// Field or section name the error refers to; the request URL for
    /// transport errors. Empty for document-level errors.
    pub field: String,
    #[source]
    pub source: Option<anyhow::Error>,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "siteinfo: ")?;
        if !self.field.is_empty() {
            write!(f, "{}: ", self.field)?;
        }
        write!(f, "{}", self.code)?;
        if let Some(ref src) = self.source {
            write!(f, ": {}", src)?;
        }
        Ok(())
    }
}

impl ParseError {
    /// Create an InsufficientData error.
    pub fn insufficient_data() -> Self {
        Self {
            code: ErrorCode::InsufficientData,
            field: String::new(),
            source: None,
        }
    }

    /// Create a FieldNotFound error for the named field.
    pub fn field_not_found(field: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::FieldNotFound,
            field: field.into(),
            source: None,
        }
    }

    /// Create a MalformedNumber error for the named field.
    pub fn malformed_number(field: impl Into<String>, source: Option<anyhow::Error>) -> Self {
        Self {
            code: ErrorCode::MalformedNumber,
            field: field.into(),
            source,
        }
    }

    /// Create a TableAbsent error for the named section.
    pub fn table_absent(section: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::TableAbsent,
            field: section.into(),
            source: None,
        }
    }

    /// Create a Transport error for the given URL.
    pub fn transport(url: impl Into<String>, source: Option<anyhow::Error>) -> Self {
        Self {
            code: ErrorCode::Transport,
            field: url.into(),
            source,
        }
    }

    /// Create a Parse error.
    pub fn parse(source: Option<anyhow::Error>) -> Self {
        Self {
            code: ErrorCode::Parse,
            field: String::new(),
            source,
        }
    }

    /// Returns true if this is an InsufficientData error.
    pub fn is_insufficient_data(&self) -> bool {
        self.code == ErrorCode::InsufficientData
    }

    /// Returns true if this is a FieldNotFound error.
    pub fn is_field_not_found(&self) -> bool {
        self.code == ErrorCode::FieldNotFound
    }

    /// Returns true if this is a MalformedNumber error.
    pub fn is_malformed_number(&self) -> bool {
        self.code == ErrorCode::MalformedNumber
    }

    /// Returns true if this is a TableAbsent error.
    pub fn is_table_absent(&self) -> bool {
        self.code == ErrorCode::TableAbsent
    }

    /// Returns true if this is a Transport error.
    pub fn is_transport(&self) -> bool {
        self.code == ErrorCode::Transport
    }

    /// Returns true if this is a Parse error.
    pub fn is_parse(&self) -> bool {
        self.code == ErrorCode::Parse
    }
}
