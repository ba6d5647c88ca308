//! plover-sig - Signature grammar for Plover documentation
//!
//! Turns the free-form signatures written for Plover operators, commands,
//! hooks and combos into typed display nodes plus a cross-reference
//! identifier.

pub mod cli;
pub mod document;
pub mod error;
pub mod index;
pub mod output;
pub mod parser;
pub mod registry;
pub mod signature;
pub mod types;
pub mod validation;

pub use document::{EntryDocument, EntrySpec, Outcome, ProcessedDocument, ProcessedEntry};
pub use error::{Result, SigError};
pub use index::{IndexEntry, ObjectIndex};
pub use parser::{tokenize, FunctionSignatureParser, PyStyleParser, Token, TokenKind};
pub use registry::{DomainRegistry, ObjectType};
pub use signature::{
    BuilderKind, CommandBuilder, CommandSignature, FunctionBuilder, GenericBuilder, HookBuilder,
    SignatureBuilder,
};
pub use types::{NodeRole, ParsedSignature, RefContext, SignatureNode};
pub use validation::{validate_document, Diagnostic, Severity, ValidationResult};
