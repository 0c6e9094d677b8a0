use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use wordtrie::{PrefixTree, Word};

/// Deterministic pseudo-random lowercase words, sharing prefixes often
fn generate_words(n: usize, max_len: usize) -> Vec<String> {
    let mut state: u64 = 42;
    let mut next = move || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (state >> 33) as usize
    };

    (0..n)
        .map(|_| {
            let len = 1 + next() % max_len;
            (0..len).map(|_| (b'a' + (next() % 8) as u8) as char).collect()
        })
        .collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for n in [1_000, 10_000, 100_000].iter() {
        let words = generate_words(*n, 12);

        group.bench_with_input(BenchmarkId::new("str", n), &words, |b, words| {
            b.iter(|| PrefixTree::from_words(black_box(words)).unwrap());
        });

        let parsed: Vec<Word> = words.iter().map(|w| Word::parse(w).unwrap()).collect();
        group.bench_with_input(BenchmarkId::new("word", n), &parsed, |b, parsed| {
            b.iter(|| {
                let mut tree = PrefixTree::new();
                for word in parsed {
                    tree.insert_word(black_box(word));
                }
                tree
            });
        });
    }

    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let words = generate_words(50_000, 12);
    let tree = PrefixTree::from_words(&words).unwrap();
    let lookups = generate_words(1_000, 12);

    c.bench_function("search", |b| {
        b.iter(|| {
            lookups
                .iter()
                .filter(|p| tree.search(black_box(p)).unwrap())
                .count()
        });
    });

    c.bench_function("starts_with", |b| {
        b.iter(|| {
            lookups
                .iter()
                .filter(|p| tree.starts_with(black_box(p)).unwrap())
                .count()
        });
    });
}

criterion_group!(benches, bench_insert, bench_queries);
criterion_main!(benches);
