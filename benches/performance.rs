use budget_lines::ledger::{big_expenses_string, budget_limit, check_big_expenses, BudgetLine};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_sample_ledger(line_count: usize) -> Vec<BudgetLine> {
    (0..line_count)
        .map(|idx| {
            let user = if idx % 3 == 0 { "matilda" } else { "jonas" };
            let value = -(10.0 + (idx % 400) as f64);
            BudgetLine::new(value, format!("Entry {idx} 🧾")).with_user(user)
        })
        .collect()
}

fn bench_ledger_passes(c: &mut Criterion) {
    let ledger = build_sample_ledger(black_box(10_000));

    c.bench_function("check_big_expenses_10k", |b| {
        b.iter(|| {
            let checked = check_big_expenses(black_box(&ledger), &budget_limit);
            black_box(checked);
        })
    });

    c.bench_function("big_expenses_string_10k", |b| {
        b.iter(|| {
            let rendered = big_expenses_string(black_box(&ledger), 100.0);
            black_box(rendered);
        })
    });
}

criterion_group!(benches, bench_ledger_passes);
criterion_main!(benches);
