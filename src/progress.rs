//! Batch progress bar for deck generation.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use slidekit::Progress;

/// Advances an indicatif bar as batches are applied.
///
/// Draws on stderr, and not at all when `quiet` or stderr is not a terminal.
pub struct BatchProgress {
    bar: ProgressBar,
}

impl BatchProgress {
    pub fn new(quiet: bool) -> Self {
        let bar = ProgressBar::hidden();
        if !quiet && console::user_attended_stderr() {
            bar.set_draw_target(ProgressDrawTarget::stderr());
        }
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-"),
        );
        Self { bar }
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Progress for BatchProgress {
    fn on_start(&mut self, total_batches: usize) {
        self.bar.set_length(total_batches as u64);
        self.bar.set_position(0);
        self.bar.set_message("applying batches");
    }

    fn on_batch_complete(&mut self, index: usize, size: usize) {
        self.bar.set_message(format!("batch {} ({} requests)", index + 1, size));
        self.bar.inc(1);
    }

    fn on_notes(&mut self, count: usize) {
        if count > 0 {
            self.bar.set_message(format!("notes on {} slides", count));
        }
    }
}

impl Drop for BatchProgress {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.abandon();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_progress_tracks_position() {
        let mut progress = BatchProgress::new(true);
        progress.on_start(3);
        progress.on_batch_complete(0, 50);
        progress.on_batch_complete(1, 50);

        assert_eq!(progress.bar.length(), Some(3));
        assert_eq!(progress.bar.position(), 2);
        assert!(progress.bar.is_hidden());
    }
}
