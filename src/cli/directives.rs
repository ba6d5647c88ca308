//! Directives command implementation.
//!
//! Prints the domain's directive table and role namespaces.

use clap::Args;

use crate::error::Result;
use crate::output::Printer;
use crate::registry::DomainRegistry;

/// List directives, builders and namespaces
#[derive(Args, Debug)]
pub struct DirectivesArgs {
    /// Also list cross-reference roles
    #[arg(long)]
    pub roles: bool,
}

pub fn run(args: DirectivesArgs, printer: &Printer) -> Result<()> {
    let registry = DomainRegistry::new();

    printer.info(registry.label(), &format!("domain '{}'", registry.name()));

    for (object_type, builder) in registry.directives() {
        let namespace = registry.namespace_for_directive(object_type.name());
        println!(
            "{:<20} {:<10} {}",
            registry.qualified_name(object_type),
            builder.name(),
            printer.dim(&format!("namespace {}", namespace))
        );
    }

    if args.roles {
        for role in registry.roles() {
            println!(
                ":{}:{:<12} {}",
                registry.name(),
                role,
                printer.dim(&format!("namespace {}", registry.namespace_for_role(role)))
            );
        }
    }

    Ok(())
}
