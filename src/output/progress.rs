use std::io::IsTerminal;

use indicatif::{ProgressBar, ProgressStyle};

use crate::validator::{MissingFileResult, NamingResult, TitleBlockResult, ValidationObserver};

/// Progress bar driven by validator callbacks.
///
/// Each checked file, register entry or title-block record advances the bar by one.
/// Hidden in quiet mode or when stderr is not a TTY. Clones share one bar, so every
/// validator can hold its own copy.
#[derive(Clone)]
pub struct ProgressObserver {
    progress_bar: ProgressBar,
}

impl ProgressObserver {
    /// Creates a progress bar for `total` checks, drawn on stderr.
    #[must_use]
    pub fn new(total: u64, quiet: bool) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        Self::new_with_visibility(total, quiet, is_tty)
    }

    fn new_with_visibility(total: u64, quiet: bool, is_tty: bool) -> Self {
        let progress_bar = if quiet || !is_tty {
            ProgressBar::hidden()
        } else {
            Self::create_visible_progress_bar(total)
        };
        Self { progress_bar }
    }

    fn create_visible_progress_bar(total: u64) -> ProgressBar {
        let pb = ProgressBar::new(total);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} Auditing [{bar:40.cyan/blue}] {pos}/{len} checks ({msg})")
        {
            pb.set_style(style.progress_chars("█▓░"));
        }
        pb
    }

    /// Resize the bar once the inputs are loaded and the real total is known.
    pub fn set_total(&self, total: u64) {
        self.progress_bar.set_length(total);
    }

    #[must_use]
    pub fn position(&self) -> u64 {
        self.progress_bar.position()
    }

    /// Finishes the progress bar and clears it from the terminal.
    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }
}

impl ValidationObserver for ProgressObserver {
    fn file_checked(&self, _result: &NamingResult) {
        self.progress_bar.inc(1);
    }

    fn expected_file_checked(&self, _result: &MissingFileResult) {
        self.progress_bar.inc(1);
    }

    fn record_checked(&self, _result: &TitleBlockResult) {
        self.progress_bar.inc(1);
    }

    fn finished(&self, validator: &'static str, _total: usize) {
        self.progress_bar.set_message(validator);
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
