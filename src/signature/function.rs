//! Plain function directive: the parser without the hook adjustments.

use crate::error::Result;
use crate::parser::{FunctionSignatureParser, PyStyleParser};
use crate::types::{ParsedSignature, RefContext};

use super::{BuilderKind, SignatureBuilder};

/// Parses function signatures under the caller's module context.
#[derive(Debug, Clone)]
pub struct FunctionBuilder<P = PyStyleParser> {
    parser: P,
}

impl Default for FunctionBuilder {
    fn default() -> Self {
        Self::new(PyStyleParser)
    }
}

impl<P: FunctionSignatureParser> FunctionBuilder<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }
}

impl<P: FunctionSignatureParser> SignatureBuilder for FunctionBuilder<P> {
    fn kind(&self) -> BuilderKind {
        BuilderKind::Function
    }

    fn parse_signature(&self, text: &str, ctx: &RefContext) -> Result<Vec<ParsedSignature>> {
        Ok(vec![self.parser.parse(text, ctx)?])
    }
}
