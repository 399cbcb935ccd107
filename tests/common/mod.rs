use std::time::{SystemTime, UNIX_EPOCH};

use rusty_matchplay::args::CleanArgs;
use rusty_matchplay::model::execute_batch_sql;
use sql_middleware::SqlMiddlewareDbError;
use sql_middleware::middleware::{ConfigAndPool, DatabaseType};

pub struct TestContext {
    pub config_and_pool: ConfigAndPool,
    pub args: CleanArgs,
}

pub async fn setup_test_context(fixture_sql: &str) -> Result<TestContext, SqlMiddlewareDbError> {
    let db_name = format!(
        "file:test_db_{}?mode=memory&cache=shared",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time went backwards")
            .as_nanos()
    );

    let config_and_pool = ConfigAndPool::new_sqlite(db_name.clone()).await?;
    let args = CleanArgs {
        db_type: DatabaseType::Sqlite,
        db_name,
        db_host: None,
        db_port: None,
        db_user: None,
        db_password: None,
        db_startup_script: None,
        db_populate_json: None,
        combined_sql_script: String::new(),
        player_a: "Rod".to_string(),
        player_b: "Jim".to_string(),
    };

    execute_batch_sql(
        &config_and_pool,
        include_str!("../../src/sql/schema/sqlite/00_table_drop.sql"),
    )
    .await?;

    let schema = [
        include_str!("../../src/sql/schema/sqlite/00_matches.sql"),
        include_str!("../../src/sql/schema/sqlite/01_holes.sql"),
    ]
    .join("\n");
    execute_batch_sql(&config_and_pool, &schema).await?;

    if !fixture_sql.is_empty() {
        execute_batch_sql(&config_and_pool, fixture_sql).await?;
    }

    Ok(TestContext {
        config_and_pool,
        args,
    })
}
