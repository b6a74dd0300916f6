//! Benchmarks for the per-keystroke reconcile path
//!
//! Run with: cargo bench reconcile

use divan::{black_box, Bencher};
use maskedit::mask::{
    apply, classify, EditDelta, MaskController, MaskedField, Snapshot, Template,
};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

const FULL: &str = "+1 (123) 456-7890";

fn phone() -> Template {
    Template::build("+1 (XXX) XXX-XXXX")
        .map(Template::digits_only)
        .unwrap_or_else(|e| panic!("bench template: {}", e))
}

fn insert_at(text: &str, p: usize, ch: char) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    chars.insert(p, ch);
    chars.into_iter().collect()
}

// ============================================================================
// Template
// ============================================================================

#[divan::bench]
fn parse_phone_template() -> Template {
    phone()
}

#[divan::bench(args = [4, 9, 16])]
fn next_mutable_index(bencher: Bencher, index: usize) {
    let template = phone();
    bencher.bench_local(|| template.next_mutable_index(black_box(index)));
}

#[divan::bench]
fn format_raw_digits(bencher: Bencher) {
    let template = phone();
    bencher.bench_local(|| template.format(black_box("(613) 555-0123")));
}

// ============================================================================
// Single cycle
// ============================================================================

#[divan::bench(args = [4, 7, 12, 16])]
fn classify_and_apply_insert(bencher: Bencher, p: usize) {
    let template = phone();
    let snapshot = Snapshot::new(FULL, p);
    let raw = insert_at(FULL, p, '5');
    bencher.bench_local(|| {
        let case = classify(&template, &snapshot, black_box(&raw));
        apply(&template, &case, &snapshot, &raw)
    });
}

#[divan::bench]
fn delta_between(bencher: Bencher) {
    let raw = insert_at(FULL, 10, '5');
    bencher.bench_local(|| EditDelta::between(black_box(FULL), black_box(&raw), 10, 11));
}

// ============================================================================
// Full field
// ============================================================================

#[divan::bench]
fn type_full_number(bencher: Bencher) {
    let template = phone();
    bencher
        .with_inputs(|| MaskedField::new(MaskController::new(template.clone())))
        .bench_local_values(|mut field| {
            for ch in "6135550123".chars() {
                let _ = field.type_char(ch);
            }
            field
        });
}

#[divan::bench]
fn backspace_full_number(bencher: Bencher) {
    let template = phone();
    bencher
        .with_inputs(|| {
            let mut field = MaskedField::with_text(MaskController::new(template.clone()), FULL);
            field.move_cursor(17);
            field
        })
        .bench_local_values(|mut field| {
            for _ in 0..10 {
                let _ = field.backspace();
            }
            field
        });
}
