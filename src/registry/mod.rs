//! The Plover documentation domain.
//!
//! A [`DomainRegistry`] is built once at startup and handed to whatever
//! drives documentation. It answers three questions:
//!
//! - which builder handles a directive
//! - which display namespace a directive or role files into
//! - what the domain is called
//!
//! # Example
//!
//! ```ignore
//! use plover_sig::registry::DomainRegistry;
//! use plover_sig::types::RefContext;
//!
//! let registry = DomainRegistry::new();
//! let parsed = registry.parse_signature("command", "lookup:WORD", &RefContext::new())?;
//! assert_eq!(parsed[0].identifier, "plover:lookup");
//! assert_eq!(registry.namespace_for_directive("command"), "cmd");
//! ```

pub mod types;

use crate::error::Result;
use crate::parser::{FunctionSignatureParser, PyStyleParser};
use crate::signature::{BuilderKind, CommandBuilder, GenericBuilder, HookBuilder, SignatureBuilder};
use crate::types::{ParsedSignature, RefContext};

pub use types::ObjectType;

/// Domain name, also the prefix of qualified directive names.
pub const DOMAIN_NAME: &str = "plover";

/// Human-readable domain label.
pub const DOMAIN_LABEL: &str = "Plover";

/// Directive name -> display namespace. Unlisted names map to themselves.
const NAMESPACE_FROM_OBJTYPE: &[(&str, &str)] = &[("command", "cmd")];

/// Role name -> display namespace. Unlisted names map to themselves.
const NAMESPACE_FROM_ROLE: &[(&str, &str)] = &[("command", "cmd")];

fn remap<'a>(table: &[(&str, &'static str)], name: &'a str) -> &'a str {
    table
        .iter()
        .find(|(from, _)| *from == name)
        .map(|(_, to)| *to)
        .unwrap_or(name)
}

/// Directive-to-builder mapping for the Plover domain.
///
/// Immutable once constructed. Operators and combos share the generic
/// builder; every [`ObjectType`] has exactly one builder.
pub struct DomainRegistry {
    generic: GenericBuilder,
    command: CommandBuilder,
    hook: Box<dyn SignatureBuilder>,
}

impl DomainRegistry {
    /// Registry with the default function-signature parser for hooks.
    pub fn new() -> Self {
        Self::with_function_parser(PyStyleParser)
    }

    /// Registry whose hook builder delegates to `parser`.
    pub fn with_function_parser<P>(parser: P) -> Self
    where
        P: FunctionSignatureParser + 'static,
    {
        Self {
            generic: GenericBuilder,
            command: CommandBuilder,
            hook: Box::new(HookBuilder::new(parser)),
        }
    }

    pub fn name(&self) -> &'static str {
        DOMAIN_NAME
    }

    pub fn label(&self) -> &'static str {
        DOMAIN_LABEL
    }

    /// Resolve a directive by bare (`command`) or qualified (`plover:command`) name.
    pub fn resolve(&self, directive: &str) -> Result<ObjectType> {
        let bare = directive
            .strip_prefix(DOMAIN_NAME)
            .and_then(|rest| rest.strip_prefix(':'))
            .unwrap_or(directive);
        bare.parse()
    }

    /// The builder registered for `object_type`.
    pub fn builder(&self, object_type: ObjectType) -> &dyn SignatureBuilder {
        match object_type {
            ObjectType::Operator | ObjectType::Combo => &self.generic,
            ObjectType::Command => &self.command,
            ObjectType::Hook => self.hook.as_ref(),
        }
    }

    /// Registered directives with the builder kind handling each.
    pub fn directives(&self) -> impl Iterator<Item = (ObjectType, BuilderKind)> + '_ {
        ObjectType::ALL
            .into_iter()
            .map(|t| (t, self.builder(t).kind()))
    }

    /// Cross-reference role names. One role per directive.
    pub fn roles(&self) -> impl Iterator<Item = &'static str> + '_ {
        ObjectType::ALL.into_iter().map(|t| t.name())
    }

    pub fn namespace_for_directive<'a>(&self, directive: &'a str) -> &'a str {
        remap(NAMESPACE_FROM_OBJTYPE, directive)
    }

    pub fn namespace_for_role<'a>(&self, role: &'a str) -> &'a str {
        remap(NAMESPACE_FROM_ROLE, role)
    }

    /// `plover:<directive>`
    pub fn qualified_name(&self, object_type: ObjectType) -> String {
        format!("{}:{}", DOMAIN_NAME, object_type)
    }

    /// Resolve `directive` and run its builder over `text`.
    pub fn parse_signature(
        &self,
        directive: &str,
        text: &str,
        ctx: &RefContext,
    ) -> Result<Vec<ParsedSignature>> {
        let object_type = self.resolve(directive)?;
        self.builder(object_type).parse_signature(text, ctx)
    }
}

impl Default for DomainRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DomainRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.directives().map(|(t, kind)| (t.name(), kind)))
            .finish()
    }
}
