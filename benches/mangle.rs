//! Benchmarks for decorated-name computation.
//!
//! - Free function with a single primitive parameter
//! - Const instance member inside a marked namespace
//! - Batch mangling of many independent descriptors

extern crate vcmangle;

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use vcmangle::prelude::*;

/// Benchmark a free function.
/// Signature: int f_int_int(int)
fn bench_free_function(c: &mut Criterion) {
    let method = MethodDescriptor::free("f_int_int")
        .param(TypeSignature::I4)
        .returns(TypeSignature::I4);
    let mangler = VcEntrypointMangler::new();

    c.bench_function("mangle_free_function", |b| {
        b.iter(|| {
            let name = mangler.mangle(black_box(&method), CharSet::Wide).unwrap();
            black_box(name)
        });
    });
}

/// Benchmark a const instance member with namespace resolution.
/// Signature: int my::ns::C::g(int, const wchar_t*, __int64) const
fn bench_const_member(c: &mut Criterion) {
    let method = MethodDescriptor::virtual_member("g_const")
        .owner("C")
        .namespace("Bench.Interop.DllImport.my.ns")
        .params([
            TypeSignature::I,
            TypeSignature::I4,
            TypeSignature::String,
            TypeSignature::I8,
        ])
        .returns(TypeSignature::I4);
    let mangler = VcEntrypointMangler::new();

    c.bench_function("mangle_const_member", |b| {
        b.iter(|| {
            let name = mangler.mangle(black_box(&method), CharSet::Wide).unwrap();
            black_box(name)
        });
    });
}

/// Benchmark batch mangling of 1024 descriptors.
fn bench_mangle_all(c: &mut Criterion) {
    let methods: Vec<_> = (0..1024)
        .map(|i| {
            MethodDescriptor::static_member(format!("method_{i}"))
                .owner("Exports")
                .namespace("DllImport.native")
                .params([TypeSignature::U4, TypeSignature::R8])
                .returns(TypeSignature::U8)
        })
        .collect();
    let mangler = VcEntrypointMangler::new();

    c.bench_function("mangle_all_1024", |b| {
        b.iter(|| black_box(mangler.mangle_all(black_box(&methods), CharSet::Narrow)));
    });
}

criterion_group!(
    benches,
    bench_free_function,
    bench_const_member,
    bench_mangle_all
);
criterion_main!(benches);
