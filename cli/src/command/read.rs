use clap::Args;
use lectern::errors::LibraryResult;
use lectern::{Library, PageView};
use std::path::PathBuf;
use std::process;

#[derive(Debug, Args)]
pub struct ReadCommand {
    /// Directory holding `.epub` and `.cbz` archives
    pub library_dir: PathBuf,

    /// 1-based position of the book within the scanned directory
    #[arg(long, default_value_t = 1)]
    book: usize,

    /// Walk every remaining page instead of stopping at the first
    #[arg(long)]
    follow: bool,
}

impl ReadCommand {
    pub fn read(&self) -> LibraryResult<()> {
        let mut library = Library::new()?;
        let summaries = library.open_library(&self.library_dir)?;

        let Some(summary) = self.book.checked_sub(1).and_then(|index| summaries.get(index))
        else {
            eprintln!(
                "no book #{} in {:?}; {} catalogued",
                self.book,
                self.library_dir,
                summaries.len(),
            );
            process::exit(2);
        };

        let view = library.open_book(summary.uid())?;
        show_page(summary.title(), &view);

        if self.follow {
            while let Some(next) = library.next_page()? {
                show_page(summary.title(), &next);
            }
        }
        Ok(())
    }
}

fn show_page(title: &str, view: &PageView) {
    println!(
        "== {title} [{}/{}] ==",
        view.current_page(),
        view.total_pages(),
    );
    println!("{}", view.content());
}
