//! Benchmarks for search operations
//!
//! Run with: cargo bench search

use tabpad::model::{BufferId, Tabs, TextBuffer};
use tabpad::search::{count_in_buffer, find_forward, replace_all, search_all, MatchOptions, Pattern};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

const LINE: &str = "The quick brown fox jumps over the lazy dog.\n";

fn text(line_count: usize) -> String {
    LINE.repeat(line_count)
}

fn pattern(text: &str) -> Pattern {
    Pattern::new(text).expect("non-empty pattern")
}

// ============================================================================
// Single-buffer search
// ============================================================================

#[divan::bench(args = [1_000, 10_000, 100_000])]
fn find_forward_last_line(bencher: divan::Bencher, line_count: usize) {
    let mut content = text(line_count);
    content.push_str("needle\n");
    let needle = pattern("needle");
    let options = MatchOptions::exact();

    bencher.bench(|| divan::black_box(find_forward(&content, &needle, 0, options)));
}

#[divan::bench(args = [1_000, 10_000, 100_000])]
fn find_forward_case_insensitive(bencher: divan::Bencher, line_count: usize) {
    let mut content = text(line_count);
    content.push_str("NEEDLE\n");
    let needle = pattern("needle");
    let options = MatchOptions::default();

    bencher.bench(|| divan::black_box(find_forward(&content, &needle, 0, options)));
}

// ============================================================================
// Counting
// ============================================================================

#[divan::bench(args = [1_000, 10_000, 100_000])]
fn count_common_word(bencher: divan::Bencher, line_count: usize) {
    let content = text(line_count);
    let needle = pattern("the");
    let options = MatchOptions::default();

    bencher.bench(|| divan::black_box(count_in_buffer(&content, &needle, options)));
}

#[divan::bench(args = [1_000, 10_000, 100_000])]
fn count_whole_word(bencher: divan::Bencher, line_count: usize) {
    let content = text(line_count);
    let needle = pattern("fox");
    let options = MatchOptions::new(false, true);

    bencher.bench(|| divan::black_box(count_in_buffer(&content, &needle, options)));
}

#[divan::bench]
fn count_repeated_char_whole_word(bencher: divan::Bencher) {
    // Every candidate is rejected by the word-boundary check
    let content = "a".repeat(100_000);
    let needle = pattern("a");
    let options = MatchOptions::new(true, true);

    bencher.bench(|| divan::black_box(count_in_buffer(&content, &needle, options)));
}

// ============================================================================
// Replace
// ============================================================================

#[divan::bench(args = [1_000, 10_000])]
fn replace_all_words(bencher: divan::Bencher, line_count: usize) {
    let content = text(line_count);
    let needle = pattern("fox");

    bencher
        .with_inputs(|| TextBuffer::with_text(BufferId(1), "bench", &content))
        .bench_local_values(|mut buffer| {
            let outcome = replace_all(&mut buffer, &needle, "cat", MatchOptions::default());
            divan::black_box((buffer, outcome))
        });
}

// ============================================================================
// Cross-buffer search
// ============================================================================

#[divan::bench(args = [10, 100])]
fn search_all_buffers(bencher: divan::Bencher, buffer_count: usize) {
    let mut tabs = Tabs::new();
    for i in 0..buffer_count {
        tabs.open_with_text(format!("buffer-{}", i), &text(1_000));
    }
    let needle = pattern("lazy");
    let options = MatchOptions::default();

    bencher.bench(|| divan::black_box(search_all(&tabs, &needle, options)));
}
