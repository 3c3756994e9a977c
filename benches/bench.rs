//! Criterion benchmarks for the Confab intent classifier.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use confab::analysis::analyzer::{Analyzer, StandardAnalyzer};
use confab::catalog::IntentCatalog;
use confab::chat::{ChatSession, Chatbot};
use confab::ml::intent_classifier::{self, ClassifierConfig, IntentClassifier};

fn bench_analysis(c: &mut Criterion) {
    let analyzer = StandardAnalyzer::new().unwrap();
    c.bench_function("standard_analyzer", |b| {
        b.iter(|| analyzer.terms(black_box("How can I improve my credit score?")).unwrap())
    });
}

fn bench_fit(c: &mut Criterion) {
    let catalog = IntentCatalog::builtin().unwrap();
    c.bench_function("fit_builtin_catalog", |b| {
        b.iter(|| {
            intent_classifier::fit_classifier(black_box(&catalog), ClassifierConfig::default())
                .unwrap()
        })
    });
}

fn bench_predict(c: &mut Criterion) {
    let catalog = IntentCatalog::builtin().unwrap();
    let classifier = intent_classifier::fit_classifier(&catalog, ClassifierConfig::default()).unwrap();

    c.bench_function("predict", |b| {
        b.iter(|| classifier.predict(black_box("what's the weather like today")).unwrap())
    });
}

fn bench_turn(c: &mut Criterion) {
    let bot = Chatbot::new(IntentCatalog::builtin().unwrap(), ClassifierConfig::default()).unwrap();
    let mut session = ChatSession::seeded(0);

    c.bench_function("turn", |b| {
        b.iter(|| {
            let outcome = session.turn(&bot, black_box("Thanks a lot")).unwrap();
            session.reset();
            outcome
        })
    });
}

criterion_group!(benches, bench_analysis, bench_fit, bench_predict, bench_turn);
criterion_main!(benches);
