//! Check command implementation.
//!
//! Loads an entry document, runs every entry through the domain and
//! reports diagnostics.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::document::{EntryDocument, Outcome, ProcessedEntry};
use crate::error::{Result, SigError};
use crate::output::{display_path, plural, Printer};
use crate::registry::DomainRegistry;
use crate::validation::{print_diagnostics, validate_document, ValidationResult};

/// Process an entry document and report problems
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Entry document (YAML)
    pub file: PathBuf,

    /// Print entries and diagnostics as JSON to stdout
    #[arg(long)]
    pub json: bool,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

#[derive(Serialize)]
struct CheckReport<'a> {
    entries: &'a [ProcessedEntry],
    diagnostics: &'a ValidationResult,
}

pub fn run(args: CheckArgs, printer: &Printer) -> Result<()> {
    let registry = DomainRegistry::new();
    let document = EntryDocument::load(&args.file)?;

    printer.status(
        "Checking",
        &format!(
            "{} ({})",
            display_path(&args.file),
            plural(document.entries.len(), "entry", "entries")
        ),
    );

    let processed = document.process(&registry)?;
    let result = validate_document(&processed, &registry);

    if args.json {
        let report = CheckReport {
            entries: &processed.entries,
            diagnostics: &result,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for entry in &processed.entries {
            print_entry(entry, printer);
        }
        printer.info(
            "Indexed",
            &plural(processed.index.len(), "signature", "signatures"),
        );
    }

    print_diagnostics(&result, printer);

    if result.has_errors() || (args.strict && result.has_warnings()) {
        return Err(SigError::Validation {
            message: format!(
                "{} error(s), {} warning(s) in {}",
                result.error_count(),
                result.warning_count(),
                display_path(&args.file)
            ),
            help: args
                .strict
                .then(|| "Run without --strict to allow warnings".to_string()),
        });
    }

    Ok(())
}

fn print_entry(entry: &ProcessedEntry, printer: &Printer) {
    match &entry.outcome {
        Outcome::Parsed { signatures } => {
            for sig in signatures {
                println!(
                    "{:<10} {} {}",
                    entry.directive.name(),
                    sig,
                    printer.dim(&format!("[{}:{}]", entry.namespace, sig.identifier))
                );
            }
        }
        Outcome::Rejected { fallback, .. } => {
            println!(
                "{:<10} {} {}",
                entry.directive.name(),
                fallback.text,
                printer.dim("[not indexed]")
            );
        }
    }
}
