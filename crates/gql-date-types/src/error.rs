//! Coercion errors for the Date scalar

use gql_date_diagnostics::{
    Diagnostic, ErrorCode, GQLD0001, GQLD0002, GQLD0003, GQLD0100, GQLD0400, SourceLocation,
    Span,
};
use gql_date_parser::{Component, GrammarError};
use thiserror::Error;

/// Coercion result
pub type CoercionResult<T> = Result<T, CoercionError>;

/// Broad failure category, as seen by the executor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoercionErrorKind {
    /// Malformed or calendrically invalid text, or non-text input to a parse
    Format,
    /// Value representation not supported by the operation
    Type,
}

/// Coercion errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoercionError {
    /// Input text does not denote a valid date/time
    #[error("{code}: invalid Date value {input:?}: {reason}")]
    Format {
        code: ErrorCode,
        input: String,
        reason: String,
        span: Option<Span>,
    },

    /// Value cannot be represented as a Date
    #[error("{code}: cannot serialize {found} as Date")]
    Type { code: ErrorCode, found: String },
}

impl CoercionError {
    /// Text failed to match the grammar
    pub fn grammar(input: &str, err: &GrammarError) -> Self {
        Self::Format {
            code: GQLD0001,
            input: input.to_string(),
            reason: err.to_string(),
            span: Some(err.span()),
        }
    }

    /// Text matched the grammar but a component is out of range
    pub fn out_of_range(input: &str, component: Component, span: Option<Span>) -> Self {
        Self::Format {
            code: GQLD0002,
            input: input.to_string(),
            reason: format!("{} out of range", component),
            span,
        }
    }

    /// Parse input was not a string
    pub fn not_text(kind: &str) -> Self {
        Self::Format {
            code: GQLD0003,
            input: kind.to_string(),
            reason: format!("expected a string, found {}", kind),
            span: None,
        }
    }

    /// Serialize input has no Date representation
    pub fn unsupported(found: impl Into<String>) -> Self {
        Self::Type {
            code: GQLD0100,
            found: found.into(),
        }
    }

    pub fn kind(&self) -> CoercionErrorKind {
        match self {
            Self::Format { .. } => CoercionErrorKind::Format,
            Self::Type { .. } => CoercionErrorKind::Type,
        }
    }

    pub fn is_format_error(&self) -> bool {
        self.kind() == CoercionErrorKind::Format
    }

    pub fn is_type_error(&self) -> bool {
        self.kind() == CoercionErrorKind::Type
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Format { code, .. } | Self::Type { code, .. } => *code,
        }
    }

    /// Span inside the input text, if the failure could be located
    pub fn span(&self) -> Option<Span> {
        match self {
            Self::Format { span, .. } => *span,
            Self::Type { .. } => None,
        }
    }

    /// Convert to a diagnostic
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Self::Format {
                code,
                input,
                reason,
                span,
            } => {
                let diag = Diagnostic::error(*code, format!("invalid Date value: {}", reason));
                match span {
                    Some(span) => diag.with_location(SourceLocation::from_span(*span, input)),
                    None => diag,
                }
            }
            Self::Type { code, found } => {
                Diagnostic::error(*code, format!("cannot serialize {} as Date", found))
            }
        }
    }
}

/// Invalid coercer configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Offset beyond ±14:00
    #[error("GQLD0400: unqualified offset of {minutes} minutes is outside ±14:00")]
    OffsetOutOfRange { minutes: i16 },

    /// Configuration document could not be read
    #[error("GQLD0400: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConfigError {
    pub fn code(&self) -> ErrorCode {
        GQLD0400
    }
}
