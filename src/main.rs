use clap::Parser;
use miette::Result;
use plover_sig::cli::{Cli, Commands};
use plover_sig::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new(cli.color);

    match cli.command {
        Commands::Parse(args) => plover_sig::cli::parse::run(args, &printer)?,
        Commands::Check(args) => plover_sig::cli::check::run(args, &printer)?,
        Commands::Directives(args) => plover_sig::cli::directives::run(args, &printer)?,
        Commands::Completions(args) => plover_sig::cli::completions::run(args)?,
    }

    Ok(())
}
