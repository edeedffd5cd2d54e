mod common;

use common::MemoryStore;
use jiff::Timestamp;
use sympta_core::models::score::{Factor, FactorScores, ScoreRecord};
use sympta_scoring::trend::{DEFAULT_WINDOW_SIZE, rolling_average};
use uuid::Uuid;

fn record(respondent_id: i64, total_score: f64, created_at: &str) -> ScoreRecord {
    let ts: Timestamp = created_at.parse().unwrap();
    ScoreRecord {
        id: Uuid::new_v4(),
        respondent_id,
        factors: FactorScores::default(),
        total_score,
        negative_item_count: 0,
        positive_item_count: 0,
        positive_item_average: 0.0,
        created_at: ts,
        updated_at: ts,
    }
}

#[tokio::test]
async fn three_records_average_column_wise() {
    let mut first = record(1, 2.0, "2026-07-01T08:00:00Z");
    let mut second = record(1, 3.0, "2026-07-08T08:00:00Z");
    let mut third = record(1, 4.0, "2026-07-15T08:00:00Z");
    first.negative_item_count = 80;
    second.negative_item_count = 85;
    third.negative_item_count = 90;
    first.positive_item_count = 10;
    second.positive_item_count = 5;
    third.positive_item_count = 0;

    let store = MemoryStore::with_history(vec![first, second, third]);
    let trend = rolling_average(&store, 1, DEFAULT_WINDOW_SIZE)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(trend.total_score, 3.0);
    assert_eq!(trend.negative_item_count, 85.0);
    assert_eq!(trend.positive_item_count, 5.0);
    assert_eq!(trend.record_count, 3);
}

#[tokio::test]
async fn trend_rounds_to_one_decimal_place() {
    let store = MemoryStore::with_history(vec![
        record(1, 1.0, "2026-07-01T08:00:00Z"),
        record(1, 2.0, "2026-07-02T08:00:00Z"),
        record(1, 2.0, "2026-07-03T08:00:00Z"),
    ]);
    let trend = rolling_average(&store, 1, 10).await.unwrap().unwrap();

    // (1 + 2 + 2) / 3 = 1.666..., one decimal place, not two.
    assert_eq!(trend.total_score, 1.7);
}

#[tokio::test]
async fn factor_columns_are_averaged_too() {
    let mut first = record(1, 1.0, "2026-07-01T08:00:00Z");
    let mut second = record(1, 1.0, "2026-07-02T08:00:00Z");
    first.factors.set(Factor::Depression, 1.0);
    second.factors.set(Factor::Depression, 2.0);

    let store = MemoryStore::with_history(vec![first, second]);
    let trend = rolling_average(&store, 1, 10).await.unwrap().unwrap();

    assert_eq!(trend.factors.get(Factor::Depression), 1.5);
    assert_eq!(trend.factors.get(Factor::Anxiety), 0.0);
}

#[tokio::test]
async fn window_only_covers_the_most_recent_records() {
    let mut history = Vec::new();
    // Two old outliers, then ten newer records that all score 2.0.
    history.push(record(1, 5.0, "2026-06-01T08:00:00Z"));
    history.push(record(1, 5.0, "2026-06-02T08:00:00Z"));
    for day in 1..=10 {
        history.push(record(1, 2.0, &format!("2026-07-{day:02}T08:00:00Z")));
    }

    let store = MemoryStore::with_history(history);
    let trend = rolling_average(&store, 1, 10).await.unwrap().unwrap();

    assert_eq!(trend.record_count, 10);
    assert_eq!(trend.total_score, 2.0);
    assert_eq!(
        trend.created_at,
        "2026-07-10T08:00:00Z".parse::<Timestamp>().unwrap()
    );
}

#[tokio::test]
async fn timestamps_are_the_latest_in_the_window() {
    let store = MemoryStore::with_history(vec![
        record(1, 2.0, "2026-07-03T08:00:00Z"),
        record(1, 2.0, "2026-07-01T08:00:00Z"),
        record(1, 2.0, "2026-07-02T08:00:00Z"),
    ]);
    let trend = rolling_average(&store, 1, 10).await.unwrap().unwrap();

    let latest: Timestamp = "2026-07-03T08:00:00Z".parse().unwrap();
    assert_eq!(trend.created_at, latest);
    assert_eq!(trend.updated_at, latest);
}

#[tokio::test]
async fn no_history_returns_none() {
    let store = MemoryStore::default();
    assert!(rolling_average(&store, 1, 10).await.unwrap().is_none());
}

#[tokio::test]
async fn history_of_another_respondent_does_not_count() {
    let store = MemoryStore::with_history(vec![record(2, 3.0, "2026-07-01T08:00:00Z")]);
    assert!(rolling_average(&store, 1, 10).await.unwrap().is_none());
}

#[tokio::test]
async fn shorter_window_never_covers_more_records() {
    let history = (1..=7)
        .map(|day| record(1, 2.0, &format!("2026-07-{day:02}T08:00:00Z")))
        .collect();
    let store = MemoryStore::with_history(history);

    let narrow = rolling_average(&store, 1, 5).await.unwrap().unwrap();
    let wide = rolling_average(&store, 1, 10).await.unwrap().unwrap();

    assert_eq!(narrow.record_count, 5);
    assert_eq!(wide.record_count, 7);
    assert!(narrow.record_count <= wide.record_count);
}

#[tokio::test]
async fn reading_twice_returns_identical_results() {
    let store = MemoryStore::with_history(vec![
        record(1, 2.0, "2026-07-01T08:00:00Z"),
        record(1, 4.0, "2026-07-02T08:00:00Z"),
    ]);

    let first = rolling_average(&store, 1, 10).await.unwrap().unwrap();
    let second = rolling_average(&store, 1, 10).await.unwrap().unwrap();

    assert_eq!(first, second);
}
