pub mod check;
pub mod completions;
pub mod directives;
pub mod parse;

use clap::{Parser, Subcommand};

use crate::output::ColorChoice;

/// plover-sig - Signature grammar for Plover documentation
#[derive(Parser, Debug)]
#[command(name = "plover-sig")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// When to colour status output
    #[arg(long, value_enum, global = true, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse one directive signature and print its nodes
    Parse(parse::ParseArgs),

    /// Process an entry document and report problems
    Check(check::CheckArgs),

    /// List directives, builders and namespaces
    Directives(directives::DirectivesArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
