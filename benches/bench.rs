// Criterion benchmarks for Cinder

use cinder::core::{ConfigResolver, OnboardingWizard, StdRandom, SwipeSession};
use cinder::models::{AppConfig, Gender, Profile, ShowMe};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn create_profile(id: usize) -> Profile {
    Profile {
        id: id.to_string(),
        name: format!("User {}", id),
        age: 21 + (id % 20) as u8,
        distance: (id % 30) as f64,
        photos: vec![format!("https://img.example/{}.jpg", id)],
        bio: None,
        interests: Default::default(),
        verified: id % 3 == 0,
        profession: None,
        education: None,
    }
}

fn bench_swipe_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("swipe_session");

    for size in [100, 1_000, 10_000].iter() {
        let queue: Vec<Profile> = (0..*size).map(create_profile).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut session = SwipeSession::new(
                    queue.clone(),
                    size as u32,
                    Box::new(StdRandom::seeded(7)),
                );
                while session.like().is_some() || session.dismiss_match().is_some() {}
                black_box(session.matches().len())
            });
        });
    }

    group.finish();
}

fn bench_resolver_lookups(c: &mut Criterion) {
    let resolver = ConfigResolver::with_defaults();

    c.bench_function("is_feature_enabled", |b| {
        b.iter(|| resolver.is_feature_enabled(black_box("messagingEnabled")));
    });

    c.bench_function("get_copy", |b| {
        b.iter(|| resolver.get_copy(black_box("discover_title"), black_box("en")));
    });

    c.bench_function("get_business_rule", |b| {
        b.iter(|| resolver.get_business_rule(black_box("monetization.tiers.1.name")));
    });
}

fn bench_onboarding_flow(c: &mut Criterion) {
    let config = AppConfig::default();

    c.bench_function("onboarding_flow", |b| {
        b.iter(|| {
            let mut wizard = OnboardingWizard::new();
            wizard.set_name("Sam");
            wizard.set_age("29");
            wizard.set_gender(Gender::Woman);
            wizard.set_interested_in(ShowMe::Everyone);
            wizard.add_photo("a", &config).ok();
            wizard.add_photo("b", &config).ok();
            wizard.set_bio("Hello");
            for interest in ["Art", "Music", "Travel"] {
                wizard.toggle_interest(interest).ok();
            }
            for _ in 0..6 {
                black_box(wizard.advance(&config));
            }
        });
    });
}

criterion_group!(benches, bench_swipe_session, bench_resolver_lookups, bench_onboarding_flow);
criterion_main!(benches);
