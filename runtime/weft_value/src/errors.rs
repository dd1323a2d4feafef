//! Error types for reference reads and updates.
//!
//! # Structured Error Categories
//!
//! `RenderErrorKind` provides typed error categories for programmatic
//! matching. Factory functions (e.g., `read_only_reference()`) are the
//! public API; they populate both `kind` and `message`.
//!
//! The helper layer never raises errors of its own: every error either
//! originates in an embedder-supplied computation (`Custom`) or in an
//! update against a reference without an update handler
//! (`ReadOnlyReference`), and propagates unchanged from there.

use std::fmt;

/// Result of a reference read, update, or reification.
pub type RenderResult<T> = Result<T, RenderError>;

/// Typed error category for structured matching.
///
/// Factory functions populate both `kind` and `message`; the `Display`
/// impl here is the single source of the message strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderErrorKind {
    /// Update attempted on a reference with no update handler.
    ReadOnlyReference { label: Option<String> },

    /// Embedder-supplied computation failed with a free-form message.
    Custom { message: String },
}

impl fmt::Display for RenderErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadOnlyReference { label: Some(label) } => {
                write!(f, "cannot update read-only reference `{label}`")
            }
            Self::ReadOnlyReference { label: None } => {
                write!(f, "cannot update a read-only reference")
            }
            Self::Custom { message } => write!(f, "{message}"),
        }
    }
}

/// Rendering error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderError {
    /// Structured error category.
    pub kind: RenderErrorKind,
    /// Human-readable error message; equals `kind.to_string()` for
    /// factory-created errors.
    pub message: String,
}

impl RenderError {
    /// Create an error with just a message.
    ///
    /// Uses `Custom` kind. Prefer specific factory functions when a
    /// structured kind is available.
    pub fn new(message: impl Into<String>) -> Self {
        let msg = message.into();
        Self {
            kind: RenderErrorKind::Custom {
                message: msg.clone(),
            },
            message: msg,
        }
    }

    /// Create an error from a structured kind.
    ///
    /// The message is computed from the kind's `Display` impl.
    fn from_kind(kind: RenderErrorKind) -> Self {
        let message = kind.to_string();
        Self { kind, message }
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for RenderError {}

/// Update attempted on a read-only reference.
#[cold]
pub fn read_only_reference(label: Option<&str>) -> RenderError {
    RenderError::from_kind(RenderErrorKind::ReadOnlyReference {
        label: label.map(str::to_string),
    })
}
