//! Performance benchmarks for movie-catalog-engine

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use movie_catalog_engine::{decode, Movie, Mutation, Store, User};

fn create_movies(count: u64) -> Vec<Movie> {
    (0..count)
        .map(|i| Movie::new(i, format!("Movie {}", i), 10_000 + i).with_year(2000))
        .collect()
}

fn create_users(count: u64, movies: u64) -> Vec<User> {
    (0..count)
        .map(|i| {
            let watched = (0..movies).filter(|m| m % (i + 2) == 0);
            User::new(i, format!("User {}", i)).with_watched(watched)
        })
        .collect()
}

fn loaded_store(movies: u64, users: u64) -> Store {
    let mut store = Store::new();
    store.commit(Mutation::SetSuggested(create_movies(movies)));
    store.commit(Mutation::SetUsers(create_users(users, movies)));
    store
}

fn bench_store_mutations(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_mutations");

    group.bench_function("set_suggested", |b| {
        let movies = create_movies(1000);
        let mut store = Store::new();

        b.iter(|| store.commit(black_box(Mutation::SetSuggested(movies.clone()))))
    });

    group.bench_function("set_watched", |b| {
        let mut store = loaded_store(1000, 10);
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        b.iter(|| {
            store.commit(black_box(Mutation::watched(500, 3, date)));
            store.commit(black_box(Mutation::unwatched(500, 3)))
        })
    });

    group.bench_function("set_movie_under_review", |b| {
        let mut store = loaded_store(1000, 10);
        let mut id = 0u64;

        b.iter(|| {
            id = (id + 1) % 1000;
            store.commit(black_box(Mutation::SetMovieUnderReview(id)))
        })
    });

    group.finish();
}

fn bench_watched_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("watched_index");

    for size in [10u64, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("rebuild", size), size, |b, &size| {
            let mut store = loaded_store(size, 20);

            b.iter(|| store.commit(black_box(Mutation::SetWatchedMovies)))
        });
    }

    group.finish();
}

fn bench_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot");

    for size in [100u64, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("to_json", size), size, |b, &size| {
            let mut store = loaded_store(size, 20);
            store.commit(Mutation::SetWatchedMovies);

            b.iter(|| store.snapshot().to_json())
        });
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    group.bench_function("movie_list", |b| {
        let body = serde_json::to_vec(&create_movies(500)).unwrap();

        b.iter(|| decode::<Vec<Movie>>("fetch_suggested_movies", black_box(&body)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_store_mutations,
    bench_watched_index,
    bench_snapshot,
    bench_decode,
);
criterion_main!(benches);
