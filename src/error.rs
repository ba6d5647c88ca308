use miette::Diagnostic;
use thiserror::Error;

/// Main error type for plover-sig operations
#[derive(Error, Diagnostic, Debug)]
pub enum SigError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(plover::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("JSON error: {0}")]
    #[diagnostic(code(plover::json))]
    Json(#[from] serde_json::Error),

    #[error("Parse error: {message}")]
    #[diagnostic(code(plover::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid signature: {message}")]
    #[diagnostic(code(plover::signature))]
    Signature {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Unknown directive: {name}")]
    #[diagnostic(code(plover::directive))]
    UnknownDirective {
        name: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation failed: {message}")]
    #[diagnostic(code(plover::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl SigError {
    /// Shorthand for a signature rejection without help text.
    pub fn signature(message: impl Into<String>) -> Self {
        SigError::Signature {
            message: message.into(),
            help: None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SigError>;
