use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ml_core::compute;

const WORDS: &[&str] = &[
    "മലയാളം",
    "കേരളം",
    "ഉത്സവം",
    "ഉൽസവം",
    "പട്ടണം",
    "തിരുവനന്തപുരം",
    "കൊച്ചി",
    "വിദ്യാർത്ഥി",
    "പ്രിയപ്പെട്ട",
    "ക്ഷേത്രം",
];

fn bench_compute(c: &mut Criterion) {
    c.bench_function("compute/words", |b| {
        b.iter(|| {
            for w in WORDS {
                black_box(compute(black_box(w)));
            }
        })
    });

    let sentence = WORDS.join(" ");
    c.bench_function("compute/sentence", |b| {
        b.iter(|| black_box(compute(black_box(&sentence))))
    });
}

criterion_group!(benches, bench_compute);
criterion_main!(benches);
