//! Rendered signature nodes.

use std::fmt;

use serde::Serialize;

/// The display role of a rendered node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeRole {
    /// The documented object's own name.
    Name,
    /// A parameter or placeholder name (also used for the `command` meta-keyword).
    ParamName,
    /// Surrounding text such as punctuation, prefixes or annotations.
    AdditionalText,
    Keyword,
    Space,
    /// Structural punctuation emitted by the function-signature parser.
    Punctuation,
    /// A function's return annotation.
    Returns,
}

impl NodeRole {
    pub fn name(&self) -> &'static str {
        match self {
            NodeRole::Name => "name",
            NodeRole::ParamName => "param-name",
            NodeRole::AdditionalText => "additional-text",
            NodeRole::Keyword => "keyword",
            NodeRole::Space => "space",
            NodeRole::Punctuation => "punctuation",
            NodeRole::Returns => "returns",
        }
    }
}

impl fmt::Display for NodeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A typed unit of rendered inline text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignatureNode {
    pub role: NodeRole,
    pub text: String,
}

impl SignatureNode {
    pub fn new(role: NodeRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }

    pub fn name(text: impl Into<String>) -> Self {
        Self::new(NodeRole::Name, text)
    }

    pub fn param_name(text: impl Into<String>) -> Self {
        Self::new(NodeRole::ParamName, text)
    }

    pub fn additional_text(text: impl Into<String>) -> Self {
        Self::new(NodeRole::AdditionalText, text)
    }

    pub fn keyword(text: impl Into<String>) -> Self {
        Self::new(NodeRole::Keyword, text)
    }

    /// A separator space. Whitespace runs collapse to a single space.
    pub fn space() -> Self {
        Self::new(NodeRole::Space, " ")
    }

    pub fn punctuation(text: impl Into<String>) -> Self {
        Self::new(NodeRole::Punctuation, text)
    }

    pub fn returns(text: impl Into<String>) -> Self {
        Self::new(NodeRole::Returns, text)
    }
}

/// One parsed signature: its nodes in display order plus its cross-reference key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedSignature {
    pub nodes: Vec<SignatureNode>,
    pub identifier: String,
}

impl ParsedSignature {
    pub fn new(nodes: Vec<SignatureNode>, identifier: impl Into<String>) -> Self {
        Self {
            nodes,
            identifier: identifier.into(),
        }
    }

    /// Node texts in order.
    pub fn texts(&self) -> Vec<&str> {
        self.nodes.iter().map(|n| n.text.as_str()).collect()
    }

    /// Plain-text rendering of all nodes.
    pub fn display_text(&self) -> String {
        self.nodes.iter().map(|n| n.text.as_str()).collect()
    }
}

impl fmt::Display for ParsedSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in &self.nodes {
            f.write_str(&node.text)?;
        }
        Ok(())
    }
}
