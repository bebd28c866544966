//! Benchmarks for layout persistence
//!
//! Run with: cargo bench --bench codec

mod support;
use support::busy_layout;

use std::sync::Arc;

use panel_dock::panel::codec::{deserialize, serialize};
use panel_dock::Catalogue;

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

#[divan::bench]
fn serialize_layout(bencher: divan::Bencher) {
    let state = busy_layout();
    bencher.bench_local(|| divan::black_box(serialize(&state)));
}

#[divan::bench]
fn deserialize_layout(bencher: divan::Bencher) {
    let catalogue = Arc::new(Catalogue::builtin());
    let json = serialize(&busy_layout()).unwrap();
    bencher.bench_local(|| divan::black_box(deserialize(Arc::clone(&catalogue), &json)));
}

#[divan::bench]
fn deserialize_corrupt(bencher: divan::Bencher) {
    let catalogue = Arc::new(Catalogue::builtin());
    bencher.bench_local(|| {
        divan::black_box(deserialize(Arc::clone(&catalogue), "{not valid json"))
    });
}
