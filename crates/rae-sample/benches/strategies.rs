use criterion::{criterion_group, criterion_main, Criterion};
use rae_core::{Case, SamplingConfig};
use rae_sample::{draw_sample, SampleMethod, SampleRequest};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn synthetic_cases(count: usize, keys: &[String], seed: u64) -> Vec<Case> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|idx| {
            let mut case = Case::new(format!("case-{idx}"));
            for key in keys {
                if rng.gen_bool(0.85) {
                    case = case.with_domain(key.clone(), rng.gen_range(0.0..=5.0));
                }
            }
            case
        })
        .collect()
}

fn bench_strategies(c: &mut Criterion) {
    let keys: Vec<String> = (0..8).map(|idx| format!("domain-{idx}")).collect();
    let cases = synthetic_cases(200, &keys, 7);
    let limits = SamplingConfig::default();
    for method in SampleMethod::ALL {
        let mut request = SampleRequest::new(method, 20);
        request.domain_keys = keys.clone();
        c.bench_function(&format!("sample_{method}_200"), |b| {
            b.iter(|| draw_sample(&request, &cases, &limits).expect("sample"));
        });
    }
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
