use clap::Subcommand;

mod read;
mod scan;

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scan a directory of book archives and list the catalog.
    Scan(scan::ScanCommand),
    /// Open a book from a directory and print its pages.
    Read(read::ReadCommand),
}
