use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use quill::buffer::Buffer;
use quill::search::SearchState;

fn setup_buffer() -> Buffer {
    let mut buf = Buffer::new();
    let mut rows = Vec::new();
    // 1000 lines with a needle every tenth line
    for i in 0..1000 {
        if i % 10 == 0 {
            rows.push(format!("prefix needle_{} suffix", i));
        } else {
            rows.push("Calculon is an acting robot who is very dramatic.".to_string());
        }
    }
    buf.restore(rows, 0);
    buf
}

fn search_rescans(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_rescans");

    group.bench_function("incremental_query_growth", |b| {
        let buf = setup_buffer();
        b.iter(|| {
            // Each typed character triggers a full rescan
            let mut state = SearchState::new();
            state.begin();
            for ch in "needle".chars() {
                black_box(state.push_char(ch, &buf));
            }
        })
    });

    group.bench_function("rescan_metacharacter_query", |b| {
        let buf = setup_buffer();
        b.iter(|| {
            let mut state = SearchState::new();
            state.begin();
            for ch in "a(b)*c".chars() {
                black_box(state.push_char(ch, &buf));
            }
        })
    });

    group.finish();
}

fn search_cycling(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_cycling");

    group.bench_function("next_full_cycle", |b| {
        let buf = setup_buffer();
        let mut state = SearchState::new();
        state.begin();
        for ch in "needle".chars() {
            state.push_char(ch, &buf);
        }
        b.iter(|| {
            for _ in 0..state.match_count() {
                black_box(state.next());
            }
        })
    });

    group.finish();
}

criterion_group!(benches, search_rescans, search_cycling);
criterion_main!(benches);
