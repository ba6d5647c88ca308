//! Validation of processed entry documents.
//!
//! The builders never complain: unknown characters vanish and colliding
//! identifiers are filed side by side. These checks surface both so authors
//! can see them. Used by `plover-sig check`.

mod checks;
mod warning;

pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::document::ProcessedDocument;
use crate::output::Printer;
use crate::registry::DomainRegistry;

/// Run all checks against a processed document.
pub fn validate_document(doc: &ProcessedDocument, registry: &DomainRegistry) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_rejected(doc));
    result.merge(checks::check_duplicate_ids(doc));
    result.merge(checks::check_empty_signatures(doc));
    result.merge(checks::check_dropped_chars(doc, registry));

    result
}

/// Print diagnostics and a summary line to stderr.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        let label = printer.severity(&d.severity.to_string(), d.severity == Severity::Error);
        eprintln!("  {}[{}]: {}", label, d.code, d.message);
        if let Some(help) = &d.help {
            eprintln!("    {} {}", printer.dim("help:"), help);
        }
    }

    let errors = result.error_count();
    let warnings = result.warning_count();

    if errors > 0 {
        printer.error("Failed", &format!("{} error(s), {} warning(s)", errors, warnings));
    } else if warnings > 0 {
        printer.warning("Checked", &format!("{} warning(s)", warnings));
    } else {
        printer.success("Checked", "no problems found");
    }
}
