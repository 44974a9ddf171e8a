//! Accrual job integration tests
//!
//! Requires a test database (see tests/common).

mod common;

use common::TestDatabase;
use pixelboard::backend::accrual::{accrue_points, persist_points};
use pixelboard::backend::auth::users::{create_user, get_user_by_id, User};
use serial_test::serial;

async fn seed_user(pool: &sqlx::PgPool, username: &str, point: i32) -> User {
    let user = create_user(
        pool,
        username.to_string(),
        format!("{}@example.com", username),
        "not-a-real-hash".to_string(),
    )
    .await
    .expect("Failed to seed user");

    if point != 0 {
        pixelboard::backend::auth::users::set_user_point(pool, user.id, point)
            .await
            .expect("Failed to seed points");
    }

    User { point, ..user }
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL test database"]
async fn test_accrual_grants_one_point_per_user() {
    let db = TestDatabase::new().await;
    let pool = db.pool();

    let alice = seed_user(pool, "alice", 0).await;
    let bob = seed_user(pool, "bob", 3).await;

    let summary = accrue_points(pool).await.unwrap();
    assert_eq!(summary.updated, 2);
    assert_eq!(summary.failed, 0);

    let alice = get_user_by_id(pool, alice.id).await.unwrap().unwrap();
    let bob = get_user_by_id(pool, bob.id).await.unwrap().unwrap();
    assert_eq!(alice.point, 1);
    assert_eq!(bob.point, 4);
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL test database"]
async fn test_accrual_failure_on_one_user_does_not_stop_the_cycle() {
    let db = TestDatabase::new().await;
    let pool = db.pool();

    // First record in the batch no longer exists in the store, so
    // persisting it fails; the second is a live user
    let ghost = User {
        id: uuid::Uuid::new_v4(),
        ..seed_user(pool, "template", 0).await
    };
    let bob = seed_user(pool, "bob", 3).await;

    let summary = persist_points(pool, vec![ghost, bob.clone()]).await;
    assert_eq!(summary.updated, 1);
    assert_eq!(summary.failed, 1);

    // The live user still got the increment
    let bob = get_user_by_id(pool, bob.id).await.unwrap().unwrap();
    assert_eq!(bob.point, 4);
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL test database"]
async fn test_accrual_with_no_users_is_a_no_op() {
    let db = TestDatabase::new().await;
    let pool = db.pool();

    let summary = accrue_points(pool).await.unwrap();
    assert_eq!(summary.updated, 0);
    assert_eq!(summary.failed, 0);
}
