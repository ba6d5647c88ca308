//! Hook adapter over a function-signature parser.

use crate::error::Result;
use crate::parser::{FunctionSignatureParser, PyStyleParser};
use crate::types::{ParsedSignature, RefContext, SignatureNode};

use super::{BuilderKind, SignatureBuilder};

pub const HOOK_KEYWORD: &str = "hook";

/// Parses hooks as functions with no module, prefixed by `hook `.
#[derive(Debug, Clone)]
pub struct HookBuilder<P = PyStyleParser> {
    parser: P,
}

impl Default for HookBuilder {
    fn default() -> Self {
        Self::new(PyStyleParser)
    }
}

impl<P: FunctionSignatureParser> HookBuilder<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }

    pub fn parser(&self) -> &P {
        &self.parser
    }
}

impl<P: FunctionSignatureParser> SignatureBuilder for HookBuilder<P> {
    fn kind(&self) -> BuilderKind {
        BuilderKind::Hook
    }

    fn parse_signature(&self, text: &str, ctx: &RefContext) -> Result<Vec<ParsedSignature>> {
        // Hooks never belong to the surrounding module.
        let hook_ctx = ctx.without_module();
        let mut parsed = self.parser.parse(text, &hook_ctx)?;

        let mut nodes = vec![SignatureNode::keyword(HOOK_KEYWORD), SignatureNode::space()];
        nodes.append(&mut parsed.nodes);
        parsed.nodes = nodes;
        Ok(vec![parsed])
    }
}
