use criterion::{criterion_group, Criterion};
use primitive_types::{H160, U256};

fn criterion_benchmark(c: &mut Criterion) {
    let token = H160::repeat_byte(0xaa);
    let holder = H160::repeat_byte(0xbb);
    let balance = U256::exp10(21);

    c.bench_function("ethutil::build_state_diff", |b| {
        b.iter(|| {
            let _ = ethwsrpc::ethutil::build_state_diff(token, holder, 3u64, Some(balance));
        })
    });
}

criterion_group!(state_diff, criterion_benchmark);
