//! Spinner shown while the passes run.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use voidkit_core::{Pass, ProgressObserver};

use crate::output::format_count;

/// Reports pass progress on a terminal spinner.
pub struct SpinnerProgress {
    bar: ProgressBar,
}

impl SpinnerProgress {
    /// Creates a spinner; hidden entirely in quiet mode.
    pub fn new(quiet: bool) -> Self {
        if quiet {
            return Self {
                bar: ProgressBar::hidden(),
            };
        }

        let bar = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("{spinner:.green} {prefix:.bold} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["|", "/", "-", "\\", " "]);
        bar.set_style(style);
        bar.enable_steady_tick(Duration::from_millis(120));
        Self { bar }
    }

    /// Removes the spinner from the terminal.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl ProgressObserver for SpinnerProgress {
    fn pass_started(&mut self, pass: Pass, expected: Option<u64>) {
        self.bar.set_prefix(pass.to_string());
        match expected {
            Some(total) => self
                .bar
                .set_message(format!("0 / {} triples", format_count(total))),
            None => self.bar.set_message("reading triples"),
        }
    }

    fn progress(&mut self, _pass: Pass, processed: u64) {
        self.bar
            .set_message(format!("{} triples", format_count(processed)));
    }

    fn pass_finished(&mut self, pass: Pass, processed: u64) {
        self.bar
            .println(format!("✓ {pass}: {} triples", format_count(processed)));
    }
}
