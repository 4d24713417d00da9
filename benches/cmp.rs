use std::{hint::black_box, str::FromStr};

use criterion::{Criterion, criterion_group, criterion_main};
use hanzo_version::Version;

fn version_cmp_equal_prefix(c: &mut Criterion) {
    let sa = "23.8";
    let sb = "23.8.1";
    let va = Version::from_str(sa).unwrap();
    let vb = Version::from_str(sb).unwrap();
    c.bench_function(&format!("Compare {sa} and {sb}"), |b| {
        b.iter(|| {
            let _ord = black_box(va.cmp(&vb));
        })
    });
}

fn version_cmp_first_component_differs(c: &mut Criterion) {
    let sa = "22.8.20";
    let sb = "23.3.1";
    let va = Version::from_str(sa).unwrap();
    let vb = Version::from_str(sb).unwrap();
    c.bench_function(&format!("Compare {sa} and {sb}"), |b| {
        b.iter(|| {
            let _ord = black_box(va.cmp(&vb));
        })
    });
}

fn version_parse(c: &mut Criterion) {
    let s = "23.8.1.2344";
    c.bench_function(&format!("Parse {s}"), |b| {
        b.iter(|| {
            let _ver = black_box(Version::from_str(s).unwrap());
        })
    });
}

criterion_group!(
    benches,
    version_cmp_equal_prefix,
    version_cmp_first_component_differs,
    version_parse
);
criterion_main!(benches);
