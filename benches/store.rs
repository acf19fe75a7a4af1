use chrono::Days;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use tempfile::TempDir;
use wordle_solutions::domain::calendar::{find_missing_dates, first_puzzle_date};
use wordle_solutions::domain::solution::{SolutionRecord, SolutionRepository, SolutionStore};
use wordle_solutions::infrastructure::store::TextFileSolutionRepo;

/// `days` 日分の連続したストアを作成
fn make_store(days: usize) -> SolutionStore {
    first_puzzle_date()
        .iter_days()
        .take(days)
        .map(|date| SolutionRecord {
            date,
            word: "CRANE".to_string(),
        })
        .collect()
}

fn benchmark_store_io(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_io");

    // 数年分まで
    for days in [365usize, 1_500, 3_650] {
        let tmp = TempDir::new().unwrap();
        let repo = TextFileSolutionRepo::new(tmp.path().join("solutions.txt"));
        let store = make_store(days);
        repo.save(&store).unwrap();

        group.bench_with_input(BenchmarkId::new("load", days), &days, |b, _| {
            b.iter(|| black_box(repo.load().unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("save", days), &days, |b, _| {
            b.iter(|| repo.save(black_box(&store)).unwrap())
        });
    }

    group.finish();
}

fn benchmark_missing_scan(c: &mut Criterion) {
    let store = make_store(1_500);
    let today = first_puzzle_date() + Days::new(1_600);
    c.bench_function("find_missing_dates", |b| {
        b.iter(|| find_missing_dates(black_box(&store), first_puzzle_date(), black_box(today)))
    });
}

criterion_group!(benches, benchmark_store_io, benchmark_missing_scan);
criterion_main!(benches);
