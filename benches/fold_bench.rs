use std::{borrow::Cow, hint::black_box, time::Duration};

use asciifold::{AsciiFold, AsciiFoldingFilter, PreTokenized, Stage, TokenStream, fold_to_ascii};
use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

const SAMPLES: &[(&str, &str)] = &[
    // Nothing to do – must stay on the zero-copy path
    ("ascii", "The quick brown fox jumps over the lazy dog 0123456789"),
    // French – sparse accents
    ("french", "Des mots clés à la chaîne, déjà vu, naïve café crème brûlée"),
    // German / Nordic – sharp s and ligatures (length growth)
    ("nordic", "Weißstraße Ærøskøbing Ĳsselmeer ﬁsh ﬂow œuvre"),
    // Decorated forms – circled, fullwidth, parenthesized
    ("decorated", "ⒶⒷⒸ ①②③ ⑽⑾⑿ ＦＵＬＬ ｗｉｄｔｈ “quoted” — ‘text’"),
    // Mostly unmapped non-ASCII
    ("cjk", "東京都 渋谷区 日本語のテキスト café"),
];

fn fold_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("fold_to_ascii");
    for &(name, text) in SAMPLES {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), text, |b, text| {
            b.iter(|| fold_to_ascii(black_box(text)))
        });
    }
    group.finish();
}

fn stage_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("ascii_fold_stage");
    for &(name, text) in SAMPLES {
        group.bench_with_input(BenchmarkId::from_parameter(name), text, |b, text| {
            b.iter(|| {
                let cow = Cow::Borrowed(black_box(text));
                if AsciiFold.needs_apply(&cow) {
                    AsciiFold.apply(cow)
                } else {
                    cow
                }
            })
        });
    }
    group.finish();
}

fn filter_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("ascii_folding_filter");
    for &(name, text) in SAMPLES {
        for preserve in [false, true] {
            group.bench_function(format!("{name}/preserve={preserve}"), |b| {
                b.iter_batched(
                    || {
                        AsciiFoldingFilter::with_preserve_original(
                            PreTokenized::whitespace(text),
                            preserve,
                        )
                    },
                    |mut filter| {
                        filter.reset().unwrap();
                        let mut bytes = 0usize;
                        while filter.advance().unwrap() {
                            bytes += filter.token().text.len();
                        }
                        bytes
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(3));
    targets = fold_text, stage_apply, filter_stream
}
criterion_main!(benches);
