//! Builder for `{plover:cmd[:arg]}` command signatures.

use crate::error::Result;
use crate::types::{ParsedSignature, RefContext, SignatureNode};

use super::{BuilderKind, SignatureBuilder};

/// Prefix of every command identifier.
pub const COMMAND_PREFIX: &str = "plover:";

/// The command name that documents commands themselves.
const META_COMMAND: &str = "command";

/// A command signature split at its first `:`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSignature<'a> {
    pub cmd: &'a str,
    /// Everything after the first `:`, if there was one.
    pub arg: Option<&'a str>,
}

impl<'a> CommandSignature<'a> {
    /// Never fails; a string without `:` is all command.
    pub fn parse(sig: &'a str) -> Self {
        match sig.split_once(':') {
            Some((cmd, arg)) => Self { cmd, arg: Some(arg) },
            None => Self { cmd: sig, arg: None },
        }
    }

    /// Cross-reference key. The argument is not part of it.
    pub fn identifier(&self) -> String {
        format!("{}{}", COMMAND_PREFIX, self.cmd)
    }

    pub fn render(&self) -> Vec<SignatureNode> {
        let mut nodes = vec![SignatureNode::additional_text("{plover:")];

        if self.cmd == META_COMMAND {
            nodes.push(SignatureNode::param_name(self.cmd));
        } else {
            nodes.push(SignatureNode::name(self.cmd));
        }

        // An empty argument after ':' renders like no argument.
        if let Some(arg) = self.arg.filter(|a| !a.is_empty()) {
            nodes.push(SignatureNode::additional_text(":"));
            nodes.push(SignatureNode::param_name(arg));
        }

        nodes.push(SignatureNode::additional_text("}"));
        nodes
    }
}

/// Builds command signatures. Commands take exactly one signature.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandBuilder;

impl SignatureBuilder for CommandBuilder {
    fn kind(&self) -> BuilderKind {
        BuilderKind::Command
    }

    fn parse_signature(&self, text: &str, _ctx: &RefContext) -> Result<Vec<ParsedSignature>> {
        let sig = CommandSignature::parse(text);
        Ok(vec![ParsedSignature::new(sig.render(), sig.identifier())])
    }
}
