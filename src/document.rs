//! Entry documents: a YAML list of directives to run through the domain.
//!
//! ```yaml
//! module: plover.engine
//! entries:
//!   - directive: operator
//!     signature: "{^}; {^^}"
//!   - directive: command
//!     signature: "lookup:WORD"
//!   - directive: hook
//!     signature: "stroked(stroke: Stroke)"
//!     module: plover.steno
//! ```
//!
//! `module` at the top sets the starting module context; `module` on an
//! entry switches it for that entry and every entry after it.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SigError};
use crate::index::{IndexEntry, ObjectIndex};
use crate::registry::{DomainRegistry, ObjectType};
use crate::types::{ParsedSignature, RefContext, SignatureNode};

/// An entry document as written.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryDocument {
    /// Module context before the first entry.
    pub module: Option<String>,
    pub entries: Vec<EntrySpec>,
}

/// One directive instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntrySpec {
    pub directive: String,
    #[serde(default)]
    pub signature: String,
    #[serde(default)]
    pub module: Option<String>,
}

/// What a builder made of an entry.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum Outcome {
    Parsed { signatures: Vec<ParsedSignature> },
    /// The builder refused the text; it is shown verbatim and not indexed.
    Rejected {
        fallback: SignatureNode,
        message: String,
    },
}

/// An entry after its builder ran.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessedEntry {
    pub directive: ObjectType,
    pub namespace: String,
    pub module: Option<String>,
    pub signature: String,
    pub outcome: Outcome,
}

impl ProcessedEntry {
    /// Parsed signatures, empty when rejected.
    pub fn signatures(&self) -> &[ParsedSignature] {
        match &self.outcome {
            Outcome::Parsed { signatures } => signatures,
            Outcome::Rejected { .. } => &[],
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self.outcome, Outcome::Rejected { .. })
    }
}

/// All entries of a document plus the index they populated.
#[derive(Debug)]
pub struct ProcessedDocument {
    pub entries: Vec<ProcessedEntry>,
    pub index: ObjectIndex,
}

impl EntryDocument {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SigError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read entry document: {}", e),
        })?;

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| SigError::Parse {
            message: format!("Invalid entry document: {}", e),
            help: Some("Each entry needs a `directive` and a `signature`".to_string()),
        })
    }

    /// Run every entry through `registry`, in order.
    ///
    /// Fails only on an unknown directive. A builder rejecting its text is
    /// recorded on the entry instead.
    pub fn process(&self, registry: &DomainRegistry) -> Result<ProcessedDocument> {
        let mut ctx = RefContext {
            module: self.module.clone(),
        };
        let mut entries = Vec::with_capacity(self.entries.len());
        let mut index = ObjectIndex::new();

        for spec in &self.entries {
            if let Some(module) = &spec.module {
                ctx.module = Some(module.clone());
            }

            let directive = registry.resolve(&spec.directive)?;
            let namespace = registry.namespace_for_directive(directive.name()).to_string();

            let outcome = match registry.builder(directive).parse_signature(&spec.signature, &ctx) {
                Ok(signatures) => {
                    for sig in &signatures {
                        index.add(IndexEntry {
                            namespace: namespace.clone(),
                            directive: directive.name().to_string(),
                            identifier: sig.identifier.clone(),
                            display: sig.display_text(),
                        });
                    }
                    Outcome::Parsed { signatures }
                }
                Err(e) => Outcome::Rejected {
                    fallback: SignatureNode::name(&spec.signature),
                    message: e.to_string(),
                },
            };

            entries.push(ProcessedEntry {
                directive,
                namespace,
                module: ctx.module.clone(),
                signature: spec.signature.clone(),
                outcome,
            });
        }

        Ok(ProcessedDocument { entries, index })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    const SAMPLE: &str = r#"
module: plover.engine
entries:
  - directive: operator
    signature: "{^}; {^^}"
  - directive: command
    signature: "lookup:WORD"
  - directive: hook
    signature: "stroked(stroke)"
  - directive: plover:combo
    signature: "[a] [b]"
"#;

    #[test]
    fn test_parse_document() {
        let doc = EntryDocument::parse(SAMPLE).unwrap();

        assert_eq!(doc.module.as_deref(), Some("plover.engine"));
        assert_eq!(doc.entries.len(), 4);
        assert_eq!(doc.entries[1].signature, "lookup:WORD");
        assert_eq!(doc.entries[1].module, None);
    }

    #[test]
    fn test_parse_empty_document() {
        let doc = EntryDocument::parse("").unwrap();
        assert!(doc.entries.is_empty());
        assert!(doc.module.is_none());
    }

    #[test]
    fn test_parse_invalid_document() {
        let result = EntryDocument::parse("entries: [{signature: x}]");
        assert!(matches!(result, Err(SigError::Parse { .. })));
    }

    #[test]
    fn test_process_indexes_each_piece() {
        let doc = EntryDocument::parse(SAMPLE).unwrap();
        let processed = doc.process(&DomainRegistry::new()).unwrap();

        assert_eq!(processed.entries.len(), 4);
        assert_eq!(processed.entries[0].signatures().len(), 2);
        assert_eq!(processed.index.len(), 5);
        assert_eq!(processed.index.lookup("operator", "{^^}").count(), 1);
        assert_eq!(processed.index.lookup("cmd", "plover:lookup").count(), 1);
        assert_eq!(processed.index.lookup("hook", "stroked").count(), 1);
        assert_eq!(processed.entries[3].directive, ObjectType::Combo);
    }

    #[test]
    fn test_entry_module_switches_context() {
        let yaml = r#"
entries:
  - directive: hook
    signature: "first()"
    module: plover.steno
  - directive: operator
    signature: "{^}"
"#;
        let processed = EntryDocument::parse(yaml)
            .unwrap()
            .process(&DomainRegistry::new())
            .unwrap();

        assert_eq!(processed.entries[0].module.as_deref(), Some("plover.steno"));
        assert_eq!(processed.entries[1].module.as_deref(), Some("plover.steno"));
        // Hook ignores the module it was documented under
        assert_eq!(processed.entries[0].signatures()[0].identifier, "first");
    }

    #[test]
    fn test_rejected_hook_falls_back() {
        let yaml = "entries:\n  - directive: hook\n    signature: \"not a function\"\n";
        let processed = EntryDocument::parse(yaml)
            .unwrap()
            .process(&DomainRegistry::new())
            .unwrap();

        let entry = &processed.entries[0];
        assert!(entry.is_rejected());
        assert!(entry.signatures().is_empty());
        assert!(processed.index.is_empty());
        match &entry.outcome {
            Outcome::Rejected { fallback, .. } => {
                assert_eq!(fallback, &SignatureNode::name("not a function"));
            }
            _ => panic!("Expected rejected outcome"),
        }
    }

    #[test]
    fn test_unknown_directive_fails() {
        let yaml = "entries:\n  - directive: macro\n    signature: x\n";
        let result = EntryDocument::parse(yaml)
            .unwrap()
            .process(&DomainRegistry::new());
        assert!(matches!(result, Err(SigError::UnknownDirective { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let doc = EntryDocument::load(file.path()).unwrap();
        assert_eq!(doc.entries.len(), 4);
    }

    #[test]
    fn test_load_missing_file() {
        let result = EntryDocument::load(Path::new("/nonexistent/entries.yaml"));
        assert!(matches!(result, Err(SigError::Io { .. })));
    }
}
