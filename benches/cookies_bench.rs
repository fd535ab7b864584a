use cookiecodec::cookies::attributes::CookieAttributes;
use cookiecodec::cookies::codec::CookieCodec;
use cookiecodec::cookies::monster::DocumentCookieStore;
use cookiecodec::cookies::parser::{decode_all, decode_one};
use cookiecodec::cookies::serializer::encode;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use url::Url;

fn benchmark_encode(c: &mut Criterion) {
    let attrs = CookieAttributes::default()
        .with_expires_days(30)
        .with_domain("Example.COM")
        .with_secure(true)
        .with_same_site("Lax");

    c.bench_function("cookie_encode", |b| {
        b.iter(|| encode(black_box("session_id"), black_box("abc123"), black_box(&attrs)))
    });
}

fn benchmark_decode(c: &mut Criterion) {
    let snapshot = (0..100)
        .map(|i| format!("cookie{}=val{}", i, i))
        .collect::<Vec<_>>()
        .join("; ");

    c.bench_function("cookie_decode_all", |b| {
        b.iter(|| decode_all(black_box(&snapshot)))
    });

    c.bench_function("cookie_decode_one", |b| {
        b.iter(|| decode_one(black_box(&snapshot), black_box("cookie99")))
    });
}

fn benchmark_store_roundtrip(c: &mut Criterion) {
    let cookies = CookieCodec::new(DocumentCookieStore::new(
        Url::parse("https://example.com/foo/bar").unwrap(),
    ));
    // Pre-populate
    for i in 0..100 {
        cookies
            .write(&format!("cookie{}", i), "val", 0, "/foo", "", false, "")
            .unwrap();
    }

    c.bench_function("cookie_set_and_read", |b| {
        b.iter(|| {
            cookies
                .set(black_box("hot"), black_box("1"), &CookieAttributes::default())
                .unwrap();
            black_box(cookies.read(black_box("hot")));
        })
    });
}

criterion_group!(
    benches,
    benchmark_encode,
    benchmark_decode,
    benchmark_store_roundtrip
);
criterion_main!(benches);
