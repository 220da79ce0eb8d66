use criterion::{criterion_group, Criterion};
use serde_json::{json, Value};

fn criterion_benchmark(c: &mut Criterion) {
    let single = json!(format!("0x{}", "ff".repeat(40)));
    c.bench_function("ethutil::decode_uint256", |b| {
        b.iter(|| {
            let _ = ethwsrpc::ethutil::decode_uint256(&single);
        })
    });

    let words = json!(format!("0x{}", "0a".repeat(32 * 16)));
    c.bench_function("ethutil::decode_uint256_slice concatenated", |b| {
        b.iter(|| {
            let _ = ethwsrpc::ethutil::decode_uint256_slice(&words);
        })
    });

    let array = Value::Array((0..16).map(|i| json!(format!("0x{:x}", i))).collect());
    c.bench_function("ethutil::decode_uint256_slice array", |b| {
        b.iter(|| {
            let _ = ethwsrpc::ethutil::decode_uint256_slice(&array);
        })
    });
}

criterion_group!(uint256_decode, criterion_benchmark);
