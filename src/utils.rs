use indicatif::{ProgressBar, ProgressStyle};

/// Bar over `len` addresses, drawn on stderr and hidden when that is not a terminal.
pub fn progress_bar(len: u64) -> ProgressBar {
    ProgressBar::new(len).with_style(
        ProgressStyle::with_template("[{elapsed_precise}] {wide_bar} {pos}/{len} addresses ({per_sec})")
            .expect("hardcoded"),
    )
}
