use contract_benchmarks::LedgerFixture;
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

fn bench_issue(c: &mut Criterion) {
    c.bench_function("issue_bounty_and_contribute", |b| {
        b.iter_batched(
            || {
                let fixture = LedgerFixture::new(0);
                let funder = fixture.funder();
                (fixture, funder)
            },
            |(fixture, funder)| {
                let id = fixture.bounty_id(1);
                fixture
                    .client
                    .issue_bounty_and_contribute(&funder, &id, &id, &1_0000000);
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_contribute_with_history(c: &mut Criterion) {
    let mut group = c.benchmark_group("contribute");
    for existing in [1u32, 16, 64] {
        group.bench_function(format!("after_{existing}_contributions"), |b| {
            b.iter_batched(
                || {
                    let fixture = LedgerFixture::new(100);
                    let id = fixture.seed_bounty(1, existing, 0, 1_0000000);
                    let funder = fixture.funder();
                    (fixture, id, funder)
                },
                |(fixture, id, funder)| {
                    fixture.client.contribute(&funder, &id, &1_0000000);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_accept_answer(c: &mut Criterion) {
    c.bench_function("accept_answer", |b| {
        b.iter_batched(
            || {
                let fixture = LedgerFixture::new(0);
                let id = fixture.seed_bounty(1, 4, 8, 1_0000000);
                (fixture, id)
            },
            |(fixture, id)| {
                fixture
                    .client
                    .accept_answer(&fixture.owner, &id, &7, &2_0000000);
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_refund(c: &mut Criterion) {
    c.bench_function("refund_contribution", |b| {
        b.iter_batched(
            || {
                let fixture = LedgerFixture::new(0);
                let id = fixture.bounty_id(1);
                let funder = fixture.funder();
                fixture
                    .client
                    .issue_bounty_and_contribute(&funder, &id, &id, &1_0000000);
                (fixture, id, funder)
            },
            |(fixture, id, funder)| {
                fixture.client.refund_contribution(&funder, &id, &0, &0);
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_issue,
    bench_contribute_with_history,
    bench_accept_answer,
    bench_refund
);
criterion_main!(benches);
