//! Parse command implementation.
//!
//! Runs one directive's builder and prints what it produced.

use clap::Args;

use crate::error::Result;
use crate::output::{plural, Printer};
use crate::registry::DomainRegistry;
use crate::types::RefContext;

/// Parse one directive signature and print its nodes
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Directive name: operator, command, hook or combo
    pub directive: String,

    /// Signature text exactly as authored
    pub signature: String,

    /// Current module context
    #[arg(long)]
    pub module: Option<String>,

    /// Print JSON to stdout instead of a node listing
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ParseArgs, printer: &Printer) -> Result<()> {
    let registry = DomainRegistry::new();
    let ctx = RefContext {
        module: args.module.clone(),
    };

    let object_type = registry.resolve(&args.directive)?;
    let parsed = registry
        .builder(object_type)
        .parse_signature(&args.signature, &ctx)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&parsed)?);
        return Ok(());
    }

    let namespace = registry.namespace_for_directive(object_type.name());
    printer.status(
        "Parsed",
        &format!(
            "{} {}",
            registry.qualified_name(object_type),
            printer.dim(&format!("({})", plural(parsed.len(), "signature", "signatures")))
        ),
    );

    for sig in &parsed {
        println!("{}", sig);
        println!("  {} {}:{}", printer.dim("id"), namespace, sig.identifier);
        for node in &sig.nodes {
            println!("  {:<16} {:?}", node.role.name(), node.text);
        }
    }

    Ok(())
}
