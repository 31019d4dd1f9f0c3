use clap::Args;
use lectern::Library;
use lectern::errors::LibraryResult;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ScanCommand {
    /// Directory holding `.epub` and `.cbz` archives
    pub library_dir: PathBuf,

    /// Show where each cover image landed
    #[arg(long)]
    covers: bool,
}

impl ScanCommand {
    pub fn scan(&self) -> LibraryResult<()> {
        let mut library = Library::new()?;
        let summaries = library.open_library(&self.library_dir)?;

        println!("{} book(s) in {:?}", summaries.len(), self.library_dir);
        for (index, summary) in summaries.iter().enumerate() {
            let mut line = format!("{:>3}. {}", index + 1, summary.title());
            if !summary.creator().is_empty() {
                line.push_str(" by ");
                line.push_str(summary.creator());
            }
            println!("{line} [{} page(s)]", summary.page_count());

            if self.covers {
                if let Some(cover) = summary.cover_path() {
                    println!("     cover: {}", cover.display());
                }
            }
        }
        Ok(())
    }
}
