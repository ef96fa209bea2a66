use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use reward_distribution::{
    ActivityRecord, DisbursementCycle, ParticipantId, PayoutAdmissionQueue, PayoutRequest,
    VaultAccount,
};
use std::time::Duration;

fn generate_test_requests(count: usize) -> Vec<PayoutRequest> {
    (0..count)
        .map(|i| PayoutRequest::new(format!("participant-{}", i), (i % 97) as i128 + 1))
        .collect()
}

fn generate_test_activities(count: usize) -> Vec<(ParticipantId, ActivityRecord)> {
    (0..count)
        .map(|i| {
            let i = i as i64;
            (format!("participant-{}", i), ActivityRecord::new(i % 13, i % 7, i % 3))
        })
        .collect()
}

fn benchmark_admission(c: &mut Criterion) {
    let queue = PayoutAdmissionQueue::default();

    let mut group = c.benchmark_group("admit_requests");
    group.measurement_time(Duration::from_secs(10));

    for count in [10, 100, 1000].iter() {
        let requests = generate_test_requests(*count);
        // roughly half of the batch fits
        let budget = requests.iter().map(|r| r.amount).sum::<i128>() / 2;

        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, _| {
            b.iter(|| {
                let vault = VaultAccount::new(budget).unwrap();
                queue.admit(&requests, &vault).unwrap()
            })
        });
    }

    group.finish();
}

fn benchmark_cycle(c: &mut Criterion) {
    let cycle = DisbursementCycle::default();

    let mut group = c.benchmark_group("disbursement_cycle");

    for count in [100, 1000].iter() {
        let activities = generate_test_activities(*count);

        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, _| {
            b.iter(|| cycle.run(activities.clone(), 50_000).unwrap())
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = benchmark_admission, benchmark_cycle
}
criterion_main!(benches);
