use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use RustedPolyFun::symbolic::symbolic_atom::Atom;
use RustedPolyFun::symbolic::symbolic_coefficient::Coefficient;
use RustedPolyFun::symbolic::symbolic_term::Term;

/// sum over i of (i+1) * a_i * x^(i mod 3), plus a constant
fn sample_coefficient(n: u32) -> Coefficient {
    let mut terms: Vec<Term> = (0..n)
        .map(|i| {
            Term::new(
                (i + 1) as f64,
                vec![Atom::subscripted('a', i), Atom::letter('x').with_power(i % 3 + 1)],
            )
        })
        .collect();
    terms.push(Term::constant(1.0));
    Coefficient::from_slice(&terms).unwrap()
}

fn bench_plus(c: &mut Criterion) {
    let a = sample_coefficient(200);
    let b = a.negate().place(&Term::constant(3.0));
    c.bench_function("coefficient plus, 200 terms", |bench| {
        bench.iter(|| black_box(&a).plus(black_box(&b)))
    });
}

fn bench_times(c: &mut Criterion) {
    let a = sample_coefficient(40);
    let b = sample_coefficient(30);
    c.bench_function("coefficient times, 40x30 terms", |bench| {
        bench.iter(|| black_box(&a).times(black_box(&b)))
    });
}

criterion_group!(benches, bench_plus, bench_times);
criterion_main!(benches);
