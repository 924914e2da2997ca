//! Translation throughput on a synthetic fftsg-style file.

use criterion::{Criterion, criterion_group, criterion_main};
use numport_translate::{CSHARP_WRITER, Container, DialectConfig, translate};
use std::hint::black_box;

/// License block, a top-level `#ifdef`, then `functions` routines that each
/// carry forward declarations, an in-body `#ifdef` and trig calls.
fn synthetic_source(functions: usize) -> Vec<String> {
    let mut lines = vec![
        "/*".to_string(),
        "Copyright Takuya OOURA, 1996-2001".to_string(),
        "*/".to_string(),
        String::new(),
        "#include <math.h>".to_string(),
        "#ifdef USE_CDFT_THREADS".to_string(),
        "#include <pthread.h>".to_string(),
        "#endif /* USE_CDFT_THREADS */".to_string(),
    ];
    for i in 0..functions {
        lines.push(String::new());
        lines.push(format!("void cft{i}(int n, double *a, double *w)"));
        lines.push("{".to_string());
        lines.push("    void cftleaf(int n, int isplt, double *a, int nw, double *w);".to_string());
        lines.push(String::new());
        lines.push("    int j, k;".to_string());
        lines.push("#ifdef USE_CDFT_THREADS".to_string());
        lines.push("    cftrec4_th(n, a, nw, w);".to_string());
        lines.push("#endif /* USE_CDFT_THREADS */".to_string());
        for j in 0..32 {
            lines.push(format!(
                "    wk1r = cos(a[{j}]); wk1i = -sin(a[{j}]); w[{j}] = sin(wk1r) * atan(1.0) ;"
            ));
        }
        lines.push("}".to_string());
    }
    lines
}

fn bench_translate(c: &mut Criterion) {
    let dialect = DialectConfig::fftsg();
    let container = Container::new("FftFlat", "fftsg");
    let source = synthetic_source(100);

    c.bench_function("translate_fftsg_100_functions", |b| {
        b.iter(|| {
            translate(black_box(source.as_slice()), &dialect, &CSHARP_WRITER, &container)
                .expect("synthetic source translates")
        })
    });
}

criterion_group!(benches, bench_translate);
criterion_main!(benches);
