//! Individual validation checks over a processed document.

use crate::document::{Outcome, ProcessedDocument};
use crate::parser::dropped;
use crate::signature::{BuilderKind, SIGNATURE_SEPARATOR};
use crate::registry::DomainRegistry;

use super::warning::{Diagnostic, ValidationResult};

/// Identifiers claimed more than once within a namespace.
pub fn check_duplicate_ids(doc: &ProcessedDocument) -> ValidationResult {
    let mut result = ValidationResult::new();

    for dup in doc.index.duplicates() {
        let mut d = Diagnostic::warning(
            "plover::validate::duplicate-id",
            format!(
                "'{}' is defined {} times in namespace '{}'",
                dup.identifier, dup.count, dup.namespace
            ),
        );
        if dup.namespace == "cmd" {
            d = d.with_help("Command arguments are not part of the identifier; document each command once");
        }
        result.push(d);
    }

    result
}

/// Generic signatures whose every character was dropped, or that were empty.
pub fn check_empty_signatures(doc: &ProcessedDocument) -> ValidationResult {
    let mut result = ValidationResult::new();

    for entry in &doc.entries {
        for sig in entry.signatures() {
            if sig.nodes.is_empty() {
                result.push(
                    Diagnostic::warning(
                        "plover::validate::empty-signature",
                        format!("{} '{}' renders as nothing", entry.directive, sig.identifier),
                    )
                    .with_help("Signatures may only use letters, [params], punctuation and spaces"),
                );
            }
        }
    }

    result
}

/// Characters the lexer ignored in generic signatures.
pub fn check_dropped_chars(doc: &ProcessedDocument, registry: &DomainRegistry) -> ValidationResult {
    let mut result = ValidationResult::new();

    for entry in &doc.entries {
        if registry.builder(entry.directive).kind() != BuilderKind::Generic {
            continue;
        }

        for piece in entry.signature.split(SIGNATURE_SEPARATOR) {
            let skipped = dropped(piece);
            if skipped.is_empty() {
                continue;
            }

            let listing: Vec<String> = skipped
                .iter()
                .map(|d| format!("{:?} at {}", d.ch, d.offset))
                .collect();
            result.push(Diagnostic::warning(
                "plover::validate::dropped-chars",
                format!("{} '{}': ignored {}", entry.directive, piece, listing.join(", ")),
            ));
        }
    }

    result
}

/// Entries whose builder rejected the signature.
pub fn check_rejected(doc: &ProcessedDocument) -> ValidationResult {
    let mut result = ValidationResult::new();

    for entry in &doc.entries {
        if let Outcome::Rejected { message, .. } = &entry.outcome {
            result.push(Diagnostic::error(
                "plover::validate::invalid-signature",
                format!("{} '{}': {}", entry.directive, entry.signature, message),
            ));
        }
    }

    result
}
