use criterion::{black_box, criterion_group, criterion_main, Criterion};
use garden_planner::{CropCatalog, GardenPlanner, HouseholdProfile, PlanRequest};

fn bench_plan(c: &mut Criterion) {
    let planner = GardenPlanner::builtin();
    let all_crops: Vec<String> = CropCatalog::builtin().iter().map(|c| c.name.clone()).collect();

    let small = PlanRequest::new(
        HouseholdProfile::new(2, 20.0),
        vec!["Potatis".to_string(), "Morötter".to_string()],
    );
    let full = PlanRequest::new(HouseholdProfile::new(4, 150.0), all_crops);

    c.bench_function("plan_two_crops", |b| b.iter(|| planner.plan(black_box(&small))));
    c.bench_function("plan_full_catalog", |b| b.iter(|| planner.plan(black_box(&full))));

    let batch: Vec<PlanRequest> = (0..64).map(|_| full.clone()).collect();
    c.bench_function("plan_many_64", |b| b.iter(|| planner.plan_many(black_box(&batch))));
}

criterion_group!(benches, bench_plan);
criterion_main!(benches);
