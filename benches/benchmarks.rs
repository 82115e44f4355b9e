use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rusty_money::{Bank, Currency, ExchangeRate, Money, Portfolio};

fn full_bank() -> Bank {
    Currency::all()
        .into_iter()
        .filter(|currency| *currency != Currency::EUR)
        .enumerate()
        .fold(Bank::with_pivot_currency(Currency::EUR), |bank, (i, currency)| {
            bank.add(ExchangeRate::from(1.0 + i as f64 * 0.5, currency).unwrap())
                .unwrap()
        })
}

fn benchmark_convert_through_pivot(c: &mut Criterion) {
    let bank = full_bank();

    c.bench_function("convert_through_pivot", |b| {
        b.iter(|| {
            bank.convert(black_box(Money::new(100.0, Currency::USD)), Currency::KRW)
                .unwrap()
        });
    });
}

fn benchmark_portfolio_evaluation(c: &mut Criterion) {
    let bank = full_bank();
    let currencies = Currency::all();
    let portfolio: Portfolio = (0..1000)
        .map(|i| Money::new(i as f64, currencies[i % currencies.len()]))
        .collect();

    c.bench_function("evaluate_1000_holdings", |b| {
        b.iter(|| portfolio.evaluate(black_box(&bank), Currency::USD).unwrap());
    });
}

fn benchmark_portfolio_missing_rates(c: &mut Criterion) {
    let bank = Bank::with_pivot_currency(Currency::EUR);
    let portfolio: Portfolio = (0..1000)
        .map(|i| Money::new(i as f64, Currency::USD))
        .collect();

    c.bench_function("evaluate_1000_missing", |b| {
        b.iter(|| portfolio.evaluate(black_box(&bank), Currency::EUR).is_err());
    });
}

criterion_group!(
    benches,
    benchmark_convert_through_pivot,
    benchmark_portfolio_evaluation,
    benchmark_portfolio_missing_rates
);
criterion_main!(benches);
