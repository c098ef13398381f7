use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kundali_vedic_base::{
    ALL_GRAHAS, ShadbalaInputs, SignIndex, YogaInputs, all_graha_strengths, antardashas, classify,
    detect_yogas, mahadashas,
};

fn zodiac_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("zodiac");
    group.bench_function("classify", |b| b.iter(|| classify(black_box(217.4))));
    group.finish();
}

fn strength_bench(c: &mut Criterion) {
    let inputs = ShadbalaInputs {
        ascendant_sign: SignIndex::new(3),
        signs: [6, 4, 3, 6, 2, 5, 4, 5, 11].map(SignIndex::new),
        speeds: [1.0, 13.2, 0.4, -0.3, 0.1, 1.2, 0.05, -0.05, -0.05],
    };

    let mut group = c.benchmark_group("strength");
    group.bench_function("all_graha_strengths", |b| {
        b.iter(|| all_graha_strengths(black_box(&inputs), 2))
    });
    let strengths = all_graha_strengths(&inputs, 2);
    let yoga_inputs = YogaInputs {
        signs: inputs.signs,
        bhavas: ALL_GRAHAS.map(|g| inputs.bhava(g)),
        strengths: strengths.map(|s| s.strength),
        house_strengths: [4.0; 12],
    };
    group.bench_function("detect_yogas", |b| {
        b.iter(|| detect_yogas(black_box(&yoga_inputs)))
    });
    group.finish();
}

fn dasha_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("dasha");
    group.bench_function("mahadashas", |b| {
        b.iter(|| mahadashas(black_box(123.4), black_box(2_451_545.0)))
    });
    let periods = mahadashas(123.4, 2_451_545.0);
    group.bench_function("antardashas", |b| {
        b.iter(|| antardashas(black_box(&periods[2])))
    });
    group.finish();
}

criterion_group!(benches, zodiac_bench, strength_bench, dasha_bench);
criterion_main!(benches);
