//! Signature builders for the Plover documentation domain.
//!
//! Each directive kind owns a builder that turns the raw directive argument
//! into one or more [`ParsedSignature`]s:
//!
//! - [`GenericBuilder`] - operators and combos, lexed token by token
//! - [`CommandBuilder`] - `cmd[:arg]` commands
//! - [`HookBuilder`] - hooks, delegated to a function-signature parser
//! - [`FunctionBuilder`] - plain functions, used outside the domain
//!
//! # Usage
//!
//! ```ignore
//! use plover_sig::signature::{GenericBuilder, SignatureBuilder};
//! use plover_sig::types::RefContext;
//!
//! let parsed = GenericBuilder.parse_signature("{^}; {^^}", &RefContext::new())?;
//! assert_eq!(parsed.len(), 2);
//! ```

mod command;
mod function;
mod generic;
mod hook;

use std::fmt;

use crate::error::Result;
use crate::types::{ParsedSignature, RefContext};

pub use command::{CommandBuilder, CommandSignature, COMMAND_PREFIX};
pub use function::FunctionBuilder;
pub use generic::{GenericBuilder, SIGNATURE_SEPARATOR};
pub use hook::{HookBuilder, HOOK_KEYWORD};

/// Which builder implementation handles a directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuilderKind {
    Generic,
    Command,
    Hook,
    Function,
}

impl BuilderKind {
    pub fn name(&self) -> &'static str {
        match self {
            BuilderKind::Generic => "generic",
            BuilderKind::Command => "command",
            BuilderKind::Hook => "hook",
            BuilderKind::Function => "function",
        }
    }
}

impl fmt::Display for BuilderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Turns a directive's raw argument into rendered signatures.
pub trait SignatureBuilder: Send + Sync {
    fn kind(&self) -> BuilderKind;

    /// Parse `text` into one result per signature it contains.
    fn parse_signature(&self, text: &str, ctx: &RefContext) -> Result<Vec<ParsedSignature>>;
}
