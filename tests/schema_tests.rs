use sqlx::SqlitePool;

use transit_tracker::config::DatabaseConfig;
use transit_tracker::database::DatabaseConnection;

async fn open() -> (DatabaseConnection, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let db = DatabaseConnection::new(&DatabaseConfig::new(dir.path().join("schema.sqlite")))
        .await
        .unwrap();
    (db, dir)
}

async fn seed_schedule(pool: &SqlitePool) {
    sqlx::query(
        "INSERT INTO routes (route_id, route_name, route_type, start_station, end_station) VALUES (1, 'R', 'bus', 'A', 'B')",
    )
    .execute(pool)
    .await
    .unwrap();
    sqlx::query("INSERT INTO stations (station_id, station_name) VALUES (1, 'A'), (2, 'B')")
        .execute(pool)
        .await
        .unwrap();
    sqlx::query(
        "INSERT INTO schedules (schedule_id, route_id, departure_station_id, arrival_station_id, departure_time, arrival_time) VALUES (1, 1, 1, 2, '08:00:00', '09:00:00')",
    )
    .execute(pool)
    .await
    .unwrap();
    sqlx::query("INSERT INTO delays (schedule_id, delay_minutes) VALUES (1, 5)")
        .execute(pool)
        .await
        .unwrap();
}

async fn count(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .unwrap()
}

#[tokio::test]
async fn test_route_delete_cascades_to_schedules_and_delays() {
    let (db, _dir) = open().await;
    let pool = db.pool();
    seed_schedule(pool).await;

    sqlx::query("DELETE FROM routes WHERE route_id = 1")
        .execute(pool)
        .await
        .unwrap();

    assert_eq!(count(pool, "schedules").await, 0);
    assert_eq!(count(pool, "delays").await, 0);
    assert_eq!(count(pool, "stations").await, 2);
}

#[tokio::test]
async fn test_schedule_delete_cascades_to_delays() {
    let (db, _dir) = open().await;
    let pool = db.pool();
    seed_schedule(pool).await;

    sqlx::query("DELETE FROM schedules WHERE schedule_id = 1")
        .execute(pool)
        .await
        .unwrap();

    assert_eq!(count(pool, "delays").await, 0);
    assert_eq!(count(pool, "routes").await, 1);
    assert_eq!(count(pool, "stations").await, 2);
}

#[tokio::test]
async fn test_delay_defaults() {
    let (db, _dir) = open().await;
    let pool = db.pool();
    seed_schedule(pool).await;

    let (is_active, resolved): (bool, Option<String>) =
        sqlx::query_as("SELECT is_active, resolved_at FROM delays")
            .fetch_one(pool)
            .await
            .unwrap();
    assert!(is_active);
    assert!(resolved.is_none());

    let frequency: i64 = sqlx::query_scalar("SELECT frequency FROM schedules")
        .fetch_one(pool)
        .await
        .unwrap();
    assert_eq!(frequency, 15);
}

#[tokio::test]
async fn test_user_favorites_constraints() {
    let (db, _dir) = open().await;
    let pool = db.pool();
    seed_schedule(pool).await;

    sqlx::query("INSERT INTO users (user_id, username, email) VALUES (1, 'ana', 'ana@example.com')")
        .execute(pool)
        .await
        .unwrap();

    let duplicate_user = sqlx::query("INSERT INTO users (username, email) VALUES ('ana', 'other@example.com')")
        .execute(pool)
        .await;
    assert!(duplicate_user.is_err());

    sqlx::query("INSERT INTO user_favorites (user_id, route_id) VALUES (1, 1)")
        .execute(pool)
        .await
        .unwrap();
    let duplicate_favorite = sqlx::query("INSERT INTO user_favorites (user_id, route_id) VALUES (1, 1)")
        .execute(pool)
        .await;
    assert!(duplicate_favorite.is_err());

    sqlx::query("DELETE FROM users WHERE user_id = 1")
        .execute(pool)
        .await
        .unwrap();
    assert_eq!(count(pool, "user_favorites").await, 0);
}

#[tokio::test]
async fn test_negative_delay_is_rejected_by_check() {
    let (db, _dir) = open().await;
    let pool = db.pool();
    seed_schedule(pool).await;

    let result = sqlx::query("INSERT INTO delays (schedule_id, delay_minutes) VALUES (1, -1)")
        .execute(pool)
        .await;
    assert!(result.is_err());
}
