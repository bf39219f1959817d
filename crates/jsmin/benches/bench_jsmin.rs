use criterion::{black_box, criterion_group, criterion_main, Criterion};
use jsmin::{minify, Minifier};

fn generate_source(size_kb: usize) -> String {
    let base = "/* View helpers */\n(function($, log) {\n  // toggle a section\n  window.toggle = function(e) {\n    e.preventDefault();\n    var section = $(e.currentTarget).closest('.accordion-section');\n    var re = /^acc-[a-z]+$/i;\n    if (re.test(section.attr('id')) && section.length > 0) {\n      section.toggleClass(\"active\");\n    }\n    return `toggled ${section.length}`;\n  };\n}(jQuery, window.log));\n";
    let mut text = String::with_capacity(size_kb * 1024 + base.len());
    while text.len() < size_kb * 1024 {
        text.push_str(base);
    }
    text
}

fn bench_minify(c: &mut Criterion) {
    let src_1k = generate_source(1);
    let src_10k = generate_source(10);
    let src_100k = generate_source(100);

    c.bench_function("minify_1kb", |b| b.iter(|| black_box(minify(black_box(&src_1k)))));
    c.bench_function("minify_10kb", |b| b.iter(|| black_box(minify(black_box(&src_10k)))));
    c.bench_function("minify_100kb", |b| b.iter(|| black_box(minify(black_box(&src_100k)))));
}

fn bench_report(c: &mut Criterion) {
    let src = generate_source(10);
    let minifier = Minifier::new();
    c.bench_function("minify_report_10kb", |b| {
        b.iter(|| black_box(minifier.minify(black_box(&src))))
    });
}

criterion_group!(benches, bench_minify, bench_report);
criterion_main!(benches);
