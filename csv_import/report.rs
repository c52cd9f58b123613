use itertools::Itertools;

use crate::entry::KbEntry;

/// Counters accumulated over one import run.
#[derive(Debug, Default)]
pub struct RunReport {
    pub rows_seen: usize,
    pub rows_skipped: usize,
    pub chars_before: usize,
    pub chars_after: usize,
}

impl RunReport {
    pub fn record_row(&mut self, raw_chars: usize, cleaned_chars: usize) {
        self.rows_seen += 1;
        self.chars_before += raw_chars;
        self.chars_after += cleaned_chars;
    }

    pub fn record_skip(&mut self) {
        self.rows_seen += 1;
        self.rows_skipped += 1;
    }

    pub fn print(&self) {
        println!(
            "  rows: {} seen, {} skipped (missing title/content)",
            self.rows_seen, self.rows_skipped
        );
        println!(
            "  chars: raw={} -> cleaned={} (removed {})",
            self.chars_before,
            self.chars_after,
            self.chars_before.saturating_sub(self.chars_after)
        );
    }
}

/// Print a short preview of the first few built entries.
pub fn print_samples(batch: &[KbEntry]) {
    if batch.is_empty() {
        return;
    }
    println!("\nSample of processed entries:");
    for (i, entry) in batch.iter().take(3).enumerate() {
        println!("\nEntry {}:", i + 1);
        println!("Title: {}", entry.title);
        println!("Content preview: {}...", preview(&entry.content, 100));
        println!("Keywords: {}", entry.keywords.iter().take(5).join(", "));
    }
}

fn preview(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
