use clap::Parser;
use lectern::errors::LibraryResult;
use lectern_cli::Cli;
use lectern_cli::command::Commands;

fn main() -> LibraryResult<()> {
    let cli = Cli::parse();

    match cli.commands {
        Commands::Scan(scan) => scan.scan()?,
        Commands::Read(read) => read.read()?,
    }

    Ok(())
}
