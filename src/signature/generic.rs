//! Token-driven builder for operators and combos.

use crate::error::Result;
use crate::parser::{tokenize, Token, TokenKind};
use crate::types::{ParsedSignature, RefContext, SignatureNode};

use super::{BuilderKind, SignatureBuilder};

/// Separator between signatures in one directive argument.
pub const SIGNATURE_SEPARATOR: &str = "; ";

/// Renders each lexed token as one node; the identifier is the raw text.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericBuilder;

impl GenericBuilder {
    /// Parse a single signature piece.
    pub fn parse_piece(&self, piece: &str) -> ParsedSignature {
        let nodes = tokenize(piece).map(token_node).collect();
        ParsedSignature::new(nodes, piece)
    }
}

fn token_node(token: Token<'_>) -> SignatureNode {
    match token.kind {
        TokenKind::Param => SignatureNode::param_name(token.text),
        TokenKind::Literal => SignatureNode::name(token.text),
        TokenKind::Punctuation => SignatureNode::additional_text(token.text),
        TokenKind::Space => SignatureNode::space(),
    }
}

impl SignatureBuilder for GenericBuilder {
    fn kind(&self) -> BuilderKind {
        BuilderKind::Generic
    }

    fn parse_signature(&self, text: &str, _ctx: &RefContext) -> Result<Vec<ParsedSignature>> {
        Ok(text
            .split(SIGNATURE_SEPARATOR)
            .map(|piece| self.parse_piece(piece))
            .collect())
    }
}
