use pgprobe_client::check;
use pgprobe_client::{sqlx, ProbeClient};
use pgprobe_core::ProductQuery;

// Opt-in round against a real store: `cargo test -p pgprobe-client -- --ignored`.
// Seeds the two fixture tables on a scratch database and removes them afterwards.
#[tokio::test]
#[ignore = "needs a PostgreSQL instance reachable through DATABASE_URL"]
async fn end_to_end_check_against_a_seeded_store() {
    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for the live test");
    let seeder = ProbeClient::connect(&database_url).unwrap();
    seeder.ping().await.expect("store is unreachable");

    for statement in [
        "DROP TABLE IF EXISTS products",
        "DROP TABLE IF EXISTS groups",
        "CREATE TABLE groups (id INTEGER PRIMARY KEY, name TEXT NOT NULL)",
        "CREATE TABLE products (id INTEGER PRIMARY KEY, group_id INTEGER REFERENCES groups (id))",
        "INSERT INTO groups (id, name) VALUES (10, 'A')",
        "INSERT INTO products (id, group_id) VALUES (1, 10)",
    ] {
        sqlx::query(statement)
            .execute(seeder.pool())
            .await
            .unwrap_or_else(|err| panic!("seed step {:?} failed: {}", statement, err));
    }

    let outcome = check::run_env(&ProductQuery::first_with_group()).await;
    assert_eq!(
        outcome.to_string(),
        r#"Success: [{"id":1,"group":{"id":10,"name":"A"}}]"#
    );

    for statement in ["DROP TABLE products", "DROP TABLE groups"] {
        sqlx::query(statement)
            .execute(seeder.pool())
            .await
            .unwrap_or_else(|err| panic!("cleanup step {:?} failed: {}", statement, err));
    }
    seeder.close().await;
}
