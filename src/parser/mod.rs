//! Parsers for signature text.
//!
//! - [`lexer`] - the tolerant tokenizer behind operator and combo signatures
//! - [`function`] - `name(params) -> returns` declarations, used for hooks
//!
//! # Usage
//!
//! ```ignore
//! use plover_sig::parser::{tokenize, TokenKind};
//!
//! let kinds: Vec<TokenKind> = tokenize("{^[word]}").map(|t| t.kind).collect();
//! ```

pub mod function;
pub mod lexer;
pub mod span;

pub use function::{FunctionSignature, FunctionSignatureParser, Parameter, ParamKind, PyStyleParser};
pub use lexer::{dropped, tokenize, DroppedChar, Lexer, Token, TokenKind, PUNCTUATION};
pub use span::Span;
